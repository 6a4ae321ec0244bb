//! Display formatting for result values.
//!
//! This is the boundary contract with presentation and export: values cross
//! it as strings formatted here, nowhere else.

use crate::config;
use crate::model::{keys, Value};

/// Format a number, collapsing integral values to plain integers.
///
/// Non-integral values keep their native precision.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    value.to_string()
}

/// Format a length as `"X cm (Y m)"` with two decimals on the meter part.
pub fn format_measure(value: f64) -> String {
    format!(
        "{} {} ({:.2} {})",
        format_number(value),
        config::UNIT_LABEL,
        value / config::UNITS_PER_MAJOR,
        config::MAJOR_UNIT_LABEL
    )
}

/// Format a monetary amount: two decimals unless integral.
pub fn format_cost(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{:.2}", value)
}

/// Render a record value as its display string.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Measure(v) => format_measure(*v),
        Value::Number(v) => format_number(*v),
        Value::Cost(v) => format_cost(*v),
        Value::Count(v) => v.to_string(),
        Value::Flag(true) => "Yes".to_string(),
        Value::Flag(false) => "No".to_string(),
        Value::Text(v) => v.clone(),
    }
}

/// Display label for a record key.
///
/// Unknown keys fall back to the key itself.
pub fn label(key: &str) -> &str {
    match key {
        keys::MODE => "Calculation mode",
        keys::FABRIC_WIDTH => "Fabric width (cm)",
        keys::PIECE_WIDTH => "Piece width (cm)",
        keys::PIECE_HEIGHT => "Piece height (cm)",
        keys::SEAM_MARGIN => "Seam margin per side (cm)",
        keys::WASTE_PERCENT => "Waste percentage",
        keys::TOTAL_PIECE_WIDTH => "Total piece width (cm)",
        keys::TOTAL_PIECE_HEIGHT => "Total piece height (cm)",
        keys::PIECES_PER_ROW => "Pieces per row",
        keys::ROWS_NEEDED => "Rows needed",
        keys::QUANTITY => "Quantity requested",
        keys::DOUBLE_PIECE => "Double piece (front and lining)",
        keys::LENGTH_NO_WASTE => "Total length without waste (cm)",
        keys::LENGTH_WITH_WASTE => "Total length with waste (cm)",
        keys::AVAILABLE_LENGTH => "Available fabric length (cm)",
        keys::USABLE_LENGTH => "Usable length (cm)",
        keys::ROWS_POSSIBLE => "Rows possible",
        keys::TOTAL_PIECES => "Total pieces obtainable",
        keys::PRICE_PER_METER => "Price per meter",
        keys::COST_LENGTH => "Length used for cost (cm)",
        keys::TOTAL_COST => "Total cost",
        keys::UNIT_COST => "Cost per unit",
        other => other,
    }
}

// ==================== Formatting tests ====================
