//! fabric-calc-rs - Fabric layout and cost calculator for textile pattern cutting.
//!
//! This library computes material requirements for rectangular pattern pieces
//! cut from rolled fabric of fixed usable width: the fabric length needed for
//! a target piece count, the piece count obtainable from an available length,
//! and the monetary cost of a length at a given price per meter. Pieces tile
//! in a uniform grid with a per-side seam margin and a percentage waste
//! allowance; true nesting (rotation, irregular shapes) is out of scope.
//!
//! # Example
//!
//! ```
//! use fabric_calc_rs::{length_for_quantity, LayoutSpec};
//!
//! let spec = LayoutSpec::new(150.0, 40.0, 60.0, 1.0, 10.0);
//! let estimate = length_for_quantity(&spec, 10, false).unwrap();
//! assert_eq!(estimate.pieces_per_row, 3);
//! assert_eq!(estimate.rows_needed, 4);
//! assert_eq!(estimate.length_with_waste, 272.8);
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod model;
pub mod session;

// Re-exports for convenience
pub use calc::{cost_from_length, length_for_quantity, pieces_from_length};
pub use error::{ErrorKind, LayoutError, ParseError, Result};
pub use export::{write_export, ExportFormat};
pub use model::{
    CostSummary, Estimate, LayoutSpec, LengthEstimate, Record, Value, YieldEstimate,
};
pub use session::Session;
