//! fabric-calc - CLI for fabric layout and cost calculations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fabric_calc_rs::export::{self, ExportFormat};
use fabric_calc_rs::{
    cost_from_length, format, input, length_for_quantity, pieces_from_length, CostSummary,
    Estimate, LayoutSpec, Session,
};

/// Compute fabric requirements and costs for rectangular pattern pieces.
#[derive(Parser, Debug)]
#[command(name = "fabric-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fabric length needed for a target piece count
    Length {
        #[command(flatten)]
        dims: DimensionArgs,

        /// Number of pieces to produce
        #[arg(long, value_parser = input::count_value)]
        quantity: u64,

        /// Cut front and lining for each piece (doubles the quantity)
        #[arg(long)]
        double: bool,

        #[command(flatten)]
        cost: CostArgs,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Piece count obtainable from an available fabric length
    Pieces {
        #[command(flatten)]
        dims: DimensionArgs,

        /// Available fabric length (cm)
        #[arg(long, value_parser = input::length_value)]
        available_length: f64,

        #[command(flatten)]
        cost: CostArgs,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Cost of a fabric length at a price per meter
    Cost {
        /// Fabric length to price (cm)
        #[arg(long, value_parser = input::length_value)]
        length: f64,

        /// Price per meter of fabric
        #[arg(long, value_parser = input::price_value)]
        price_per_meter: f64,

        /// Unit count for the per-piece cost
        #[arg(long, value_parser = input::count_value)]
        units: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Fabric and piece dimensions shared by both layout commands.
#[derive(clap::Args, Debug)]
struct DimensionArgs {
    /// Usable fabric roll width (cm)
    #[arg(long, value_parser = input::length_value)]
    fabric_width: f64,

    /// Pattern piece width (cm)
    #[arg(long, value_parser = input::length_value)]
    piece_width: f64,

    /// Pattern piece height (cm)
    #[arg(long, value_parser = input::length_value)]
    piece_height: f64,

    /// Seam margin added per side (cm)
    #[arg(long, value_parser = input::length_value, default_value_t = fabric_calc_rs::config::DEFAULT_SEAM_MARGIN)]
    seam_margin: f64,

    /// Waste allowance percentage
    #[arg(long, value_parser = input::percent_value, default_value_t = fabric_calc_rs::config::DEFAULT_WASTE_PERCENT)]
    waste: f64,
}

impl DimensionArgs {
    fn to_spec(&self) -> LayoutSpec {
        LayoutSpec::new(
            self.fabric_width,
            self.piece_width,
            self.piece_height,
            self.seam_margin,
            self.waste,
        )
    }
}

/// Optional cost augmentation of a layout result.
#[derive(clap::Args, Debug)]
struct CostArgs {
    /// Price per meter; adds cost fields to the result
    #[arg(long, value_parser = input::price_value)]
    price_per_meter: Option<f64>,

    /// Unit count for the per-piece cost (defaults to the computed count)
    #[arg(long, value_parser = input::count_value)]
    units: Option<u64>,
}

/// Where and how to emit the result.
#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write the result to this file (.txt or .csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Export format; inferred from the extension when omitted
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Free-text notes appended to the export
    #[arg(long)]
    notes: Option<String>,

    /// Print the typed result as JSON instead of the record
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Csv,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ExportFormat::Text,
            OutputFormat::Csv => ExportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Length {
            dims,
            quantity,
            double,
            cost,
            out,
        } => {
            let spec = dims.to_spec();
            warn_unusual_inputs(&spec);

            let estimate = Estimate::Length(length_for_quantity(&spec, quantity, double)?);
            finish_layout(estimate, &cost, out)
        }

        Command::Pieces {
            dims,
            available_length,
            cost,
            out,
        } => {
            let spec = dims.to_spec();
            warn_unusual_inputs(&spec);

            let estimate = Estimate::Yield(pieces_from_length(&spec, available_length)?);
            finish_layout(estimate, &cost, out)
        }

        Command::Cost {
            length,
            price_per_meter,
            units,
            json,
        } => {
            let summary = cost_from_length(length, price_per_meter, units);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_record_lines(&summary.record_fields());
            }
            Ok(())
        }
    }
}

/// Display, optionally cost-augment, and optionally export a layout result.
fn finish_layout(estimate: Estimate, cost: &CostArgs, out: OutputArgs) -> Result<()> {
    let mut session = Session::new();
    session.set(estimate.record());

    // Cost augmentation preloads the computed length and count
    let summary = cost.price_per_meter.map(|price| {
        let (basis_length, basis_count) = estimate.cost_basis();
        let units = cost
            .units
            .or_else(|| (basis_count > 0).then_some(basis_count));
        cost_from_length(basis_length, price, units)
    });

    if let Some(ref summary) = summary {
        session.merge_costs(summary.record_fields());
    }

    if out.json {
        println!("{}", json_dump(&estimate, summary.as_ref())?);
        return Ok(());
    }

    if let Some(record) = session.current() {
        print_record_lines(record);

        if let Some((path, export_format)) = resolve_export_target(&out) {
            export::write_export(&path, export_format, record, out.notes.as_deref())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Saved: {}", path.display());
        }
    }

    Ok(())
}

/// Pick the export path and format from the output flags.
///
/// An explicit path wins; its extension picks the format unless overridden.
/// A format without a path writes to a timestamped filename in the working
/// directory. Neither means no export.
fn resolve_export_target(out: &OutputArgs) -> Option<(PathBuf, ExportFormat)> {
    match (&out.output, out.format) {
        (Some(path), format) => {
            let format = format
                .map(ExportFormat::from)
                .unwrap_or_else(|| ExportFormat::from_path(path));
            Some((path.clone(), format))
        }
        (None, Some(format)) => {
            let format = ExportFormat::from(format);
            let name = format!("{}.{}", export::suggested_filename(), format.extension());
            Some((PathBuf::from(name), format))
        }
        (None, None) => None,
    }
}

fn print_record_lines(record: &fabric_calc_rs::Record) {
    for (key, value) in record.iter() {
        println!("{}: {}", format::label(key), format::render_value(value));
    }
}

fn json_dump(estimate: &Estimate, summary: Option<&CostSummary>) -> Result<String> {
    let dump = match summary {
        Some(summary) => {
            serde_json::to_string_pretty(&serde_json::json!({
                "estimate": estimate,
                "cost": summary,
            }))?
        }
        None => serde_json::to_string_pretty(estimate)?,
    };
    Ok(dump)
}

fn warn_unusual_inputs(spec: &LayoutSpec) {
    if spec.waste_percent < 0.0 {
        warn!(
            "Negative waste percentage {} shrinks the computed requirement",
            spec.waste_percent
        );
    }
    if spec.seam_margin < 0.0 {
        warn!(
            "Negative seam margin {} trims the piece dimensions",
            spec.seam_margin
        );
    }
}
