//! Numeric text parsing for input layers.
//!
//! Core computations take already-parsed values; turning user text into
//! numbers happens here and reports [`ParseError`], never a domain error.

use crate::error::ParseError;

/// Parse a decimal number from user text.
///
/// Accepts a comma as the decimal separator ("272,8" parses as 272.8);
/// fabric suppliers in comma-decimal locales write lengths that way.
/// Surrounding whitespace is ignored. Non-finite values are rejected.
pub fn parse_number(field: &str, text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::new(field, trimmed))
}

/// Parse a whole count from user text.
///
/// Counts must be plain non-negative integers; decimal points or separators
/// are rejected.
pub fn parse_count(field: &str, text: &str) -> Result<u64, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| ParseError::new(field, trimmed))
}

// Single-argument wrappers with generic field names, shaped for use as clap
// value parsers. The CLI layer prefixes its own flag name.

pub fn length_value(text: &str) -> Result<f64, ParseError> {
    parse_number("length", text)
}

pub fn percent_value(text: &str) -> Result<f64, ParseError> {
    parse_number("percentage", text)
}

pub fn price_value(text: &str) -> Result<f64, ParseError> {
    parse_number("price", text)
}

pub fn count_value(text: &str) -> Result<u64, ParseError> {
    parse_count("count", text)
}

// ==================== Input parsing tests ====================
