//! Typed results of the layout and cost calculations.

use serde::{Deserialize, Serialize};

use super::record::{keys, Record, Value};
use super::spec::LayoutSpec;

/// Result of the quantity-to-length calculation.
///
/// Carries the full input spec, the derived grid, and both required lengths
/// (with and without the waste allowance). `quantity` is the effective count
/// after doubling, not the raw request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthEstimate {
    pub spec: LayoutSpec,
    pub total_piece_width: f64,
    pub total_piece_height: f64,
    pub pieces_per_row: u64,
    pub rows_needed: u64,
    /// Effective quantity (doubled when `double_piece` is set).
    pub quantity: u64,
    pub double_piece: bool,
    pub length_no_waste: f64,
    pub length_with_waste: f64,
}

/// Result of the length-to-quantity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub spec: LayoutSpec,
    pub total_piece_width: f64,
    pub total_piece_height: f64,
    pub pieces_per_row: u64,
    pub rows_possible: u64,
    pub total_pieces: u64,
    pub available_length: f64,
    /// Available length after the waste allowance shrinks it.
    pub usable_length: f64,
}

/// A finished calculation from either direction.
///
/// The variant fixes which derived fields exist; display and export layers
/// work from the flattened [`Record`] instead of matching on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Estimate {
    Length(LengthEstimate),
    Yield(YieldEstimate),
}

impl LengthEstimate {
    pub fn record(&self) -> Record {
        let mut record = Record::new();
        record.push(keys::MODE, Value::Text(MODE_LENGTH.into()));
        push_spec_fields(&mut record, &self.spec);
        record.push(
            keys::TOTAL_PIECE_WIDTH,
            Value::Measure(self.total_piece_width),
        );
        record.push(
            keys::TOTAL_PIECE_HEIGHT,
            Value::Measure(self.total_piece_height),
        );
        record.push(keys::PIECES_PER_ROW, Value::Count(self.pieces_per_row));
        record.push(keys::ROWS_NEEDED, Value::Count(self.rows_needed));
        record.push(keys::QUANTITY, Value::Count(self.quantity));
        record.push(keys::DOUBLE_PIECE, Value::Flag(self.double_piece));
        record.push(keys::LENGTH_NO_WASTE, Value::Measure(self.length_no_waste));
        record.push(
            keys::LENGTH_WITH_WASTE,
            Value::Measure(self.length_with_waste),
        );
        record
    }
}

impl YieldEstimate {
    pub fn record(&self) -> Record {
        let mut record = Record::new();
        record.push(keys::MODE, Value::Text(MODE_YIELD.into()));
        push_spec_fields(&mut record, &self.spec);
        record.push(
            keys::TOTAL_PIECE_WIDTH,
            Value::Measure(self.total_piece_width),
        );
        record.push(
            keys::TOTAL_PIECE_HEIGHT,
            Value::Measure(self.total_piece_height),
        );
        record.push(keys::PIECES_PER_ROW, Value::Count(self.pieces_per_row));
        record.push(
            keys::AVAILABLE_LENGTH,
            Value::Measure(self.available_length),
        );
        record.push(keys::USABLE_LENGTH, Value::Measure(self.usable_length));
        record.push(keys::ROWS_POSSIBLE, Value::Count(self.rows_possible));
        record.push(keys::TOTAL_PIECES, Value::Count(self.total_pieces));
        record
    }
}

/// Display label for the quantity-to-length mode.
pub const MODE_LENGTH: &str = "Length for piece count";
/// Display label for the length-to-quantity mode.
pub const MODE_YIELD: &str = "Pieces from available length";

fn push_spec_fields(record: &mut Record, spec: &LayoutSpec) {
    record.push(keys::FABRIC_WIDTH, Value::Measure(spec.fabric_width));
    record.push(keys::PIECE_WIDTH, Value::Measure(spec.piece_width));
    record.push(keys::PIECE_HEIGHT, Value::Measure(spec.piece_height));
    record.push(keys::SEAM_MARGIN, Value::Measure(spec.seam_margin));
    record.push(keys::WASTE_PERCENT, Value::Number(spec.waste_percent));
}

impl Estimate {
    /// Human-readable label of the calculation direction.
    pub fn mode_label(&self) -> &'static str {
        match self {
            Estimate::Length(_) => MODE_LENGTH,
            Estimate::Yield(_) => MODE_YIELD,
        }
    }

    /// Flattened field mapping for display and export.
    pub fn record(&self) -> Record {
        match self {
            Estimate::Length(e) => e.record(),
            Estimate::Yield(e) => e.record(),
        }
    }

    /// Length and unit count the cost calculator should default to.
    ///
    /// The length direction hands over the waste-inflated length and the
    /// effective quantity; the yield direction hands over the usable length
    /// and the obtainable piece count.
    pub fn cost_basis(&self) -> (f64, u64) {
        match self {
            Estimate::Length(e) => (e.length_with_waste, e.quantity),
            Estimate::Yield(e) => (e.usable_length, e.total_pieces),
        }
    }
}

/// Result of the cost calculation.
///
/// `unit_cost` is `None` when no unit count was given; it renders as the
/// "N/A" sentinel downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub price_per_meter: f64,
    /// Length the cost was computed from.
    pub cost_length: f64,
    pub price_per_cm: f64,
    pub total_cost: f64,
    pub unit_cost: Option<f64>,
}

impl CostSummary {
    /// Cost fields to merge into an existing layout record.
    pub fn record_fields(&self) -> Record {
        let mut record = Record::new();
        record.push(keys::PRICE_PER_METER, Value::Cost(self.price_per_meter));
        record.push(keys::COST_LENGTH, Value::Measure(self.cost_length));
        record.push(keys::TOTAL_COST, Value::Cost(self.total_cost));
        match self.unit_cost {
            Some(cost) => record.push(keys::UNIT_COST, Value::Cost(cost)),
            None => record.push(keys::UNIT_COST, Value::Text("N/A".into())),
        }
        record
    }
}

// ==================== Estimate tests ====================
