//! Result export: timestamped text files and delimited (CSV) files.
//!
//! Consumes a finished [`Record`] plus optional free-text notes. Values and
//! labels cross into the file exactly as the display boundary renders them.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::format::{label, render_value};
use crate::model::Record;

/// Output format for a saved result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `Label: value` lines under a timestamp header.
    Text,
    /// `Field,Value` delimited rows.
    Csv,
}

impl ExportFormat {
    /// Infer the format from a destination path's extension.
    ///
    /// `.txt` selects the text layout; anything else, including a missing
    /// extension, selects the delimited layout.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => ExportFormat::Text,
            _ => ExportFormat::Csv,
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Render the text layout with an explicit timestamp.
pub fn render_text_at(record: &Record, notes: Option<&str>, at: DateTime<Local>) -> String {
    let mut output = String::new();
    writeln!(output, "RESULT - {}", at.format("%Y-%m-%d %H:%M:%S")).unwrap();
    writeln!(output).unwrap();

    for (key, value) in record.iter() {
        writeln!(output, "{}: {}", label(key), render_value(value)).unwrap();
    }

    if let Some(notes) = effective_notes(notes) {
        writeln!(output, "Notes: {}", notes).unwrap();
    }

    output
}

/// Render the text layout stamped with the current local time.
pub fn render_text(record: &Record, notes: Option<&str>) -> String {
    render_text_at(record, notes, Local::now())
}

/// Render the delimited layout: a `Field,Value` header, one row per field,
/// notes row last.
pub fn render_csv(record: &Record, notes: Option<&str>) -> String {
    let mut output = String::new();
    writeln!(output, "Field,Value").unwrap();

    for (key, value) in record.iter() {
        writeln!(
            output,
            "{},{}",
            csv_field(label(key)),
            csv_field(&render_value(value))
        )
        .unwrap();
    }

    if let Some(notes) = effective_notes(notes) {
        writeln!(output, "Notes,{}", csv_field(notes)).unwrap();
    }

    output
}

/// Write a record to `path` in the given format.
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    record: &Record,
    notes: Option<&str>,
) -> io::Result<()> {
    let content = match format {
        ExportFormat::Text => render_text(record, notes),
        ExportFormat::Csv => render_csv(record, notes),
    };
    fs::write(path, content)
}

/// Timestamped default filename, without extension.
pub fn suggested_filename_at(at: DateTime<Local>) -> String {
    format!("fabric_result_{}", at.format("%Y-%m-%d_%H%M"))
}

/// Default filename for the current local time.
pub fn suggested_filename() -> String {
    suggested_filename_at(Local::now())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn effective_notes(notes: Option<&str>) -> Option<&str> {
    notes.map(str::trim).filter(|n| !n.is_empty())
}

// ==================== Export tests ====================
