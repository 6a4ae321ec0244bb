//! Domain constants and numeric policy for the calculator.

/// Floating-point comparison epsilon.
///
/// 1e-4 cm is a micron, far below anything a cutting table resolves.
pub const EPS: f64 = 0.0001;

/// Linear units per major unit (centimeters per meter).
pub const UNITS_PER_MAJOR: f64 = 100.0;

/// Display label for the base linear unit.
pub const UNIT_LABEL: &str = "cm";

/// Display label for the major linear unit.
pub const MAJOR_UNIT_LABEL: &str = "m";

/// Decimal places kept for computed lengths.
pub const LENGTH_DECIMALS: u32 = 2;

/// Decimal places kept for the per-centimeter price.
pub const UNIT_PRICE_DECIMALS: u32 = 6;

/// Decimal places kept for the total cost.
pub const TOTAL_COST_DECIMALS: u32 = 4;

/// Decimal places kept for the per-piece cost.
pub const UNIT_COST_DECIMALS: u32 = 6;

/// Default seam margin when none is given (cm per side).
pub const DEFAULT_SEAM_MARGIN: f64 = 0.0;

/// Default waste percentage when none is given.
pub const DEFAULT_WASTE_PERCENT: f64 = 0.0;

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if `a` exceeds `b` beyond epsilon tolerance.
    ///
    /// Equality (within EPS) does not count as exceeding, so a piece that
    /// spans the full fabric width is still feasible.
    #[inline]
    pub fn exceeds(a: f64, b: f64) -> bool {
        a > b + EPS
    }

    /// Floor with epsilon tolerance.
    ///
    /// A quotient that lands one ulp below an integer still counts as that
    /// integer, so decimal-exact layouts never lose a row or a column.
    #[inline]
    pub fn tolerant_floor(x: f64) -> f64 {
        (x + EPS).floor()
    }
}

/// Rounding policy helpers.
pub mod round {
    /// Round to a fixed number of decimal places.
    #[inline]
    pub fn places(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }

    /// Round a length value (2 decimals).
    #[inline]
    pub fn length(value: f64) -> f64 {
        places(value, super::LENGTH_DECIMALS)
    }
}
