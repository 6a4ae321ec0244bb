//! Error types for layout and cost calculations.

use thiserror::Error;

/// Coarse classification of layout errors.
///
/// Every [`LayoutError`] maps to exactly one kind; callers that only need to
/// branch on the category (UI highlighting, exit codes) match on this instead
/// of destructuring variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A total (piece + margin) dimension is non-positive.
    InvalidDimensions,
    /// Total piece width exceeds the usable fabric width.
    WidthExceeded,
    /// Fewer than one piece fits per row.
    NoFit,
    /// Waste percentage makes the usable-length divisor non-positive.
    InvalidWaste,
}

/// Main error type for layout calculations.
///
/// All variants are non-fatal and recoverable by correcting inputs; none of
/// them corrupts previously computed results.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid dimensions: total piece size {total_width} x {total_height} (piece + 2 x margin) must be positive")]
    InvalidDimensions { total_width: f64, total_height: f64 },

    #[error("total piece width {total_width} (including margin) exceeds the usable fabric width {fabric_width}")]
    WidthExceeded { total_width: f64, fabric_width: f64 },

    #[error("no piece fits per row: fabric width {fabric_width}, total piece width {total_width}")]
    NoFit { fabric_width: f64, total_width: f64 },

    #[error("invalid waste percentage {waste_percent}: usable-length divisor would be non-positive")]
    InvalidWaste { waste_percent: f64 },
}

impl LayoutError {
    /// Get the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            LayoutError::WidthExceeded { .. } => ErrorKind::WidthExceeded,
            LayoutError::NoFit { .. } => ErrorKind::NoFit,
            LayoutError::InvalidWaste { .. } => ErrorKind::InvalidWaste,
        }
    }
}

/// Malformed numeric text from an input layer.
///
/// Produced only by [`crate::input`] parsing helpers, never by the core
/// computations, which take already-parsed values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid number for {field}: '{value}'")]
pub struct ParseError {
    /// Which input field held the bad text.
    pub field: String,
    /// The offending text, verbatim.
    pub value: String,
}

impl ParseError {
    /// Create a parse error for a named field.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for layout calculations.
pub type Result<T> = std::result::Result<T, LayoutError>;
