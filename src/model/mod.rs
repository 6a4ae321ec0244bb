//! Data model: layout inputs, typed results, and the ordered result record.

mod estimate;
mod record;
mod spec;

pub use estimate::{CostSummary, Estimate, LengthEstimate, YieldEstimate, MODE_LENGTH, MODE_YIELD};
pub use record::{keys, Record, Value};
pub use spec::{Grid, LayoutSpec};
