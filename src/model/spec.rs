//! Dimensional inputs shared by both layout queries.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp;
use crate::error::{LayoutError, Result};

/// Dimensions of the fabric roll and the pattern piece, in one linear unit.
///
/// All lengths are centimeters in the reference domain; the arithmetic only
/// assumes they share a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    /// Usable roll width, excluding selvage.
    pub fabric_width: f64,
    /// Raw pattern piece width.
    pub piece_width: f64,
    /// Raw pattern piece height.
    pub piece_height: f64,
    /// Seam allowance added per side.
    pub seam_margin: f64,
    /// Waste adjustment percentage (0-100+).
    pub waste_percent: f64,
}

/// Derived grid geometry for a feasible spec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Piece width including margin on both sides.
    pub total_piece_width: f64,
    /// Piece height including margin on both sides.
    pub total_piece_height: f64,
    /// Whole pieces that fit across the roll width.
    pub pieces_per_row: u64,
}

impl LayoutSpec {
    /// Create a new layout spec.
    pub fn new(
        fabric_width: f64,
        piece_width: f64,
        piece_height: f64,
        seam_margin: f64,
        waste_percent: f64,
    ) -> Self {
        Self {
            fabric_width,
            piece_width,
            piece_height,
            seam_margin,
            waste_percent,
        }
    }

    /// Piece width with the margin applied on both sides.
    pub fn total_piece_width(&self) -> f64 {
        self.piece_width + 2.0 * self.seam_margin
    }

    /// Piece height with the margin applied on both sides.
    pub fn total_piece_height(&self) -> f64 {
        self.piece_height + 2.0 * self.seam_margin
    }

    /// Multiplicative waste factor, `1 + waste_percent / 100`.
    pub fn waste_factor(&self) -> f64 {
        1.0 + self.waste_percent / 100.0
    }

    /// Compute the derived grid, checking feasibility.
    ///
    /// Errors, in check order: [`LayoutError::InvalidDimensions`] when a
    /// total dimension is non-positive, [`LayoutError::WidthExceeded`] when
    /// the total piece width does not fit the roll, [`LayoutError::NoFit`]
    /// when less than one piece fits per row. A total width exactly equal to
    /// the fabric width is feasible (one piece per row).
    pub fn grid(&self) -> Result<Grid> {
        let total_width = self.total_piece_width();
        let total_height = self.total_piece_height();

        if total_width <= 0.0 || total_height <= 0.0 {
            return Err(LayoutError::InvalidDimensions {
                total_width,
                total_height,
            });
        }

        if float_cmp::exceeds(total_width, self.fabric_width) {
            return Err(LayoutError::WidthExceeded {
                total_width,
                fabric_width: self.fabric_width,
            });
        }

        let pieces_per_row = float_cmp::tolerant_floor(self.fabric_width / total_width);
        if pieces_per_row < 1.0 {
            return Err(LayoutError::NoFit {
                fabric_width: self.fabric_width,
                total_width,
            });
        }

        Ok(Grid {
            total_piece_width: total_width,
            total_piece_height: total_height,
            pieces_per_row: pieces_per_row as u64,
        })
    }
}
