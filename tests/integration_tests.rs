//! Integration tests for the fabric layout calculator.
//!
//! These tests drive the public API end to end: dimensions in, calculation,
//! record, rendering, export file out. They validate the structure of what a
//! user sees and saves rather than byte-for-byte output, since the text
//! export carries a wall-clock timestamp.

use chrono::NaiveDateTime;
use fabric_calc_rs::export::{self, ExportFormat};
use fabric_calc_rs::{
    cost_from_length, length_for_quantity, pieces_from_length, ErrorKind, Estimate, LayoutSpec,
    Session,
};

// ==================== Export structure parsing ====================

/// A parsed text export: timestamp header plus labeled fields.
struct TextExport {
    timestamp: String,
    fields: Vec<(String, String)>,
}

impl TextExport {
    fn parse(content: &str) -> Self {
        let mut lines = content.lines();
        let header = lines.next().unwrap_or_default();
        let timestamp = header
            .strip_prefix("RESULT - ")
            .unwrap_or_default()
            .to_string();

        let mut fields = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            if let Some((label, value)) = line.split_once(": ") {
                fields.push((label.to_string(), value.to_string()));
            }
        }

        TextExport { timestamp, fields }
    }

    fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.fields.iter().position(|(l, _)| l == label)
    }
}

fn reference_spec() -> LayoutSpec {
    LayoutSpec::new(150.0, 40.0, 60.0, 1.0, 10.0)
}

// ==================== Layout pipeline tests ====================

#[test]
fn test_length_pipeline_to_text_export() {
    let estimate = length_for_quantity(&reference_spec(), 10, false).unwrap();
    let content = export::render_text(&estimate.record(), None);
    let parsed = TextExport::parse(&content);

    assert!(
        NaiveDateTime::parse_from_str(&parsed.timestamp, "%Y-%m-%d %H:%M:%S").is_ok(),
        "bad header timestamp: {:?}",
        parsed.timestamp
    );

    assert_eq!(
        parsed.get("Calculation mode"),
        Some("Length for piece count")
    );
    assert_eq!(parsed.get("Fabric width (cm)"), Some("150 cm (1.50 m)"));
    assert_eq!(parsed.get("Pieces per row"), Some("3"));
    assert_eq!(parsed.get("Rows needed"), Some("4"));
    assert_eq!(
        parsed.get("Total length with waste (cm)"),
        Some("272.8 cm (2.73 m)")
    );
    assert_eq!(
        parsed.get("Double piece (front and lining)"),
        Some("No")
    );

    // Mode leads, computed lengths close
    assert_eq!(parsed.position("Calculation mode"), Some(0));
    assert!(
        parsed.position("Total length with waste (cm)") > parsed.position("Rows needed"),
        "derived fields should follow the inputs"
    );
}

#[test]
fn test_pieces_pipeline_to_text_export() {
    let estimate = pieces_from_length(&reference_spec(), 272.8).unwrap();
    let content = export::render_text(&estimate.record(), None);
    let parsed = TextExport::parse(&content);

    assert_eq!(
        parsed.get("Calculation mode"),
        Some("Pieces from available length")
    );
    assert_eq!(
        parsed.get("Available fabric length (cm)"),
        Some("272.8 cm (2.73 m)")
    );
    assert_eq!(parsed.get("Usable length (cm)"), Some("248 cm (2.48 m)"));
    assert_eq!(parsed.get("Rows possible"), Some("4"));
    assert_eq!(parsed.get("Total pieces obtainable"), Some("12"));

    // Fields of the other mode must not leak in
    assert_eq!(parsed.get("Rows needed"), None);
    assert_eq!(parsed.get("Quantity requested"), None);
}

#[test]
fn test_cost_augmented_session_export() {
    let estimate = Estimate::Length(length_for_quantity(&reference_spec(), 10, false).unwrap());

    let mut session = Session::new();
    session.set(estimate.record());

    let (basis_length, basis_count) = estimate.cost_basis();
    assert_eq!(basis_length, 272.8);
    assert_eq!(basis_count, 10);

    let summary = cost_from_length(basis_length, 500.0, Some(basis_count));
    assert!(session.merge_costs(summary.record_fields()));

    let content = export::render_text(session.current().unwrap(), Some("spring order"));
    let parsed = TextExport::parse(&content);

    // Layout fields survive the augmentation
    assert_eq!(parsed.get("Pieces per row"), Some("3"));
    // Cost fields are appended after them
    assert_eq!(parsed.get("Price per meter"), Some("500"));
    assert_eq!(
        parsed.get("Length used for cost (cm)"),
        Some("272.8 cm (2.73 m)")
    );
    assert_eq!(parsed.get("Total cost"), Some("1364"));
    assert_eq!(parsed.get("Cost per unit"), Some("136.40"));
    assert!(parsed.position("Price per meter") > parsed.position("Pieces per row"));
    // Notes come last
    assert_eq!(parsed.fields.last().unwrap().0, "Notes");
    assert_eq!(parsed.get("Notes"), Some("spring order"));
}

#[test]
fn test_cost_without_units_exports_sentinel() {
    let estimate = pieces_from_length(&reference_spec(), 50.0).unwrap();

    let mut session = Session::new();
    session.set(estimate.record());

    // 50 cm yields zero pieces, so no unit count is available
    let summary = cost_from_length(50.0, 500.0, None);
    session.merge_costs(summary.record_fields());

    let content = export::render_text(session.current().unwrap(), None);
    let parsed = TextExport::parse(&content);
    assert_eq!(parsed.get("Total pieces obtainable"), Some("0"));
    assert_eq!(parsed.get("Cost per unit"), Some("N/A"));
}

// ==================== Export file tests ====================

#[test]
fn test_text_export_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");

    let record = length_for_quantity(&reference_spec(), 10, false)
        .unwrap()
        .record();
    export::write_export(&path, ExportFormat::from_path(&path), &record, None).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed = TextExport::parse(&content);
    assert_eq!(parsed.fields.len(), 14);
    assert_eq!(parsed.get("Quantity requested"), Some("10"));
}

#[test]
fn test_csv_export_file_structure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.csv");

    let mut session = Session::new();
    session.set(
        length_for_quantity(&reference_spec(), 10, false)
            .unwrap()
            .record(),
    );
    session.merge_costs(cost_from_length(272.8, 500.0, Some(10)).record_fields());

    export::write_export(
        &path,
        ExportFormat::from_path(&path),
        session.current().unwrap(),
        Some("second run"),
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "Field,Value");
    // 14 layout fields + 4 cost fields + 1 notes row
    assert_eq!(lines.len(), 20);
    assert!(lines.contains(&"Total cost,1364"));
    assert_eq!(*lines.last().unwrap(), "Notes,second run");
    // Comma-free labels and values need no quoting
    assert!(content.contains("Fabric width (cm),150 cm (1.50 m)"));
}

// ==================== Error path tests ====================

#[test]
fn test_infeasible_width_reports_and_preserves_session() {
    let mut session = Session::new();
    session.set(
        length_for_quantity(&reference_spec(), 10, false)
            .unwrap()
            .record(),
    );

    let narrow = LayoutSpec::new(30.0, 40.0, 60.0, 1.0, 10.0);
    let err = length_for_quantity(&narrow, 10, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WidthExceeded);
    let message = err.to_string();
    assert!(message.contains("42"), "message should carry the total width");
    assert!(message.contains("30"), "message should carry the fabric width");

    // The failed run must not disturb the saved result
    let content = export::render_text(session.current().unwrap(), None);
    assert!(content.contains("Total length with waste (cm): 272.8 cm (2.73 m)"));
}

#[test]
fn test_invalid_waste_only_in_yield_direction() {
    // The length direction multiplies by the factor and accepts -150
    let spec = LayoutSpec::new(150.0, 40.0, 60.0, 1.0, -150.0);
    assert!(length_for_quantity(&spec, 10, false).is_ok());

    // The yield direction divides by it and must refuse
    let err = pieces_from_length(&spec, 272.8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidWaste);
}

// ==================== Serialization tests ====================

#[test]
fn test_estimate_json_shape() {
    let estimate = Estimate::Length(length_for_quantity(&reference_spec(), 10, false).unwrap());
    let json = serde_json::to_value(&estimate).unwrap();

    let inner = json.get("Length").expect("length variant tag");
    assert_eq!(inner["pieces_per_row"], 3);
    assert_eq!(inner["length_with_waste"], 272.8);
    assert_eq!(inner["spec"]["fabric_width"], 150.0);
}

#[test]
fn test_estimate_json_round_trip() {
    let estimate = Estimate::Yield(pieces_from_length(&reference_spec(), 272.8).unwrap());
    let json = serde_json::to_string(&estimate).unwrap();
    let parsed: Estimate = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, estimate);
}
