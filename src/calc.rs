//! Core layout and cost computations.
//!
//! All three functions are pure functions of their inputs. Nothing here
//! touches the session slot or does I/O.

use crate::config::{self, float_cmp, round};
use crate::error::{LayoutError, Result};
use crate::model::{CostSummary, LayoutSpec, LengthEstimate, YieldEstimate};

/// Compute the fabric length required for a target piece count.
///
/// `double_piece` doubles the effective quantity (front plus lining cut for
/// each logical unit), saturating at the count ceiling. Rows are filled left
/// to right; a partially used row still consumes its full height. The waste
/// allowance inflates the final length multiplicatively.
pub fn length_for_quantity(
    spec: &LayoutSpec,
    quantity: u64,
    double_piece: bool,
) -> Result<LengthEstimate> {
    let grid = spec.grid()?;
    let quantity = if double_piece {
        quantity.saturating_mul(2)
    } else {
        quantity
    };

    let rows_needed = quantity.div_ceil(grid.pieces_per_row);
    let length_no_waste = rows_needed as f64 * grid.total_piece_height;
    let length_with_waste = length_no_waste * spec.waste_factor();

    Ok(LengthEstimate {
        spec: spec.clone(),
        total_piece_width: grid.total_piece_width,
        total_piece_height: grid.total_piece_height,
        pieces_per_row: grid.pieces_per_row,
        rows_needed,
        quantity,
        double_piece,
        length_no_waste: round::length(length_no_waste),
        length_with_waste: round::length(length_with_waste),
    })
}

/// Compute the maximum piece count obtainable from an available length.
///
/// Here the waste allowance shrinks the usable portion of the fixed physical
/// length instead of inflating a requirement. The two directions are not
/// symmetric, but feeding a computed requirement back in recovers at least
/// the requested quantity whenever the stored length is exact at two
/// decimals. Negative lengths yield zero rows; the piece count saturates at
/// the count ceiling.
pub fn pieces_from_length(spec: &LayoutSpec, available_length: f64) -> Result<YieldEstimate> {
    let grid = spec.grid()?;

    let factor = spec.waste_factor();
    if factor <= 0.0 {
        return Err(LayoutError::InvalidWaste {
            waste_percent: spec.waste_percent,
        });
    }

    let usable_length = available_length / factor;
    let rows_possible =
        float_cmp::tolerant_floor(usable_length / grid.total_piece_height).max(0.0) as u64;
    let total_pieces = grid.pieces_per_row.saturating_mul(rows_possible);

    Ok(YieldEstimate {
        spec: spec.clone(),
        total_piece_width: grid.total_piece_width,
        total_piece_height: grid.total_piece_height,
        pieces_per_row: grid.pieces_per_row,
        rows_possible,
        total_pieces,
        available_length,
        usable_length: round::length(usable_length),
    })
}

/// Derive monetary cost from a length and a price per 100 length units.
///
/// The unit cost is computed only for a positive `unit_count`; otherwise it
/// stays `None` and renders as "N/A" downstream. Infallible: bad numeric
/// text is a parse failure in the input layer, never a domain error here.
pub fn cost_from_length(
    length: f64,
    price_per_meter: f64,
    unit_count: Option<u64>,
) -> CostSummary {
    let price_per_cm = price_per_meter / config::UNITS_PER_MAJOR;
    let total_cost = price_per_cm * length;
    let unit_cost = match unit_count {
        Some(count) if count > 0 => Some(round::places(
            total_cost / count as f64,
            config::UNIT_COST_DECIMALS,
        )),
        _ => None,
    };

    CostSummary {
        price_per_meter,
        cost_length: length,
        price_per_cm: round::places(price_per_cm, config::UNIT_PRICE_DECIMALS),
        total_cost: round::places(total_cost, config::TOTAL_COST_DECIMALS),
        unit_cost,
    }
}

// ==================== Layout calculation tests ====================
