//! Ordered field-to-value mapping handed to display and export layers.

/// A single result value.
///
/// The variant decides how the display boundary renders it: measures get the
/// cm-to-m suffix, counts print as plain integers, flags as yes/no, text
/// passes through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A length or width in the base linear unit.
    Measure(f64),
    /// A dimensionless number (percentages).
    Number(f64),
    /// A monetary amount (prices, computed costs).
    Cost(f64),
    /// A whole count (pieces, rows).
    Count(u64),
    /// A yes/no flag.
    Flag(bool),
    /// Free text, rendered verbatim.
    Text(String),
}

/// Ordered set of named output fields produced by one calculation.
///
/// Field order is presentation order; it is fixed at construction and
/// preserved through merge. A record is built once per successful
/// calculation and optionally augmented once with cost fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, or replace its value if the key already exists.
    ///
    /// Replacement keeps the original position, so re-running the cost step
    /// updates cost fields in place instead of duplicating them.
    pub fn push(&mut self, key: &'static str, value: Value) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Iterate fields in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Merge another record's fields into this one, in their order.
    pub fn merge(&mut self, other: Record) {
        for (key, value) in other.fields {
            self.push(key, value);
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field keys used by the calculators.
///
/// Shared constants so estimates, formatting, and tests agree on spelling.
pub mod keys {
    pub const MODE: &str = "mode";
    pub const FABRIC_WIDTH: &str = "fabric_width_cm";
    pub const PIECE_WIDTH: &str = "piece_width_cm";
    pub const PIECE_HEIGHT: &str = "piece_height_cm";
    pub const SEAM_MARGIN: &str = "seam_margin_cm_per_side";
    pub const WASTE_PERCENT: &str = "waste_percent";
    pub const TOTAL_PIECE_WIDTH: &str = "total_piece_width_cm";
    pub const TOTAL_PIECE_HEIGHT: &str = "total_piece_height_cm";
    pub const PIECES_PER_ROW: &str = "pieces_per_row";
    pub const ROWS_NEEDED: &str = "rows_needed";
    pub const QUANTITY: &str = "quantity_requested";
    pub const DOUBLE_PIECE: &str = "double_piece";
    pub const LENGTH_NO_WASTE: &str = "length_no_waste_cm";
    pub const LENGTH_WITH_WASTE: &str = "length_with_waste_cm";
    pub const AVAILABLE_LENGTH: &str = "available_length_cm";
    pub const USABLE_LENGTH: &str = "usable_length_cm";
    pub const ROWS_POSSIBLE: &str = "rows_possible";
    pub const TOTAL_PIECES: &str = "total_pieces";
    pub const PRICE_PER_METER: &str = "price_per_meter";
    pub const COST_LENGTH: &str = "cost_length_cm";
    pub const TOTAL_COST: &str = "total_cost";
    pub const UNIT_COST: &str = "unit_cost";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut record = Record::new();
        record.push(keys::MODE, Value::Text("test".into()));
        record.push(keys::FABRIC_WIDTH, Value::Measure(150.0));
        record.push(keys::PIECES_PER_ROW, Value::Count(3));

        let order: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(
            order,
            vec![keys::MODE, keys::FABRIC_WIDTH, keys::PIECES_PER_ROW]
        );
    }

    #[test]
    fn test_push_replaces_in_place() {
        let mut record = Record::new();
        record.push(keys::TOTAL_COST, Value::Cost(100.0));
        record.push(keys::UNIT_COST, Value::Cost(10.0));
        record.push(keys::TOTAL_COST, Value::Cost(200.0));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(keys::TOTAL_COST), Some(&Value::Cost(200.0)));
        let order: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec![keys::TOTAL_COST, keys::UNIT_COST]);
    }

    #[test]
    fn test_merge_appends_and_replaces() {
        let mut record = Record::new();
        record.push(keys::MODE, Value::Text("layout".into()));
        record.push(keys::QUANTITY, Value::Count(10));

        let mut costs = Record::new();
        costs.push(keys::QUANTITY, Value::Count(20));
        costs.push(keys::TOTAL_COST, Value::Cost(1364.0));
        record.merge(costs);

        assert_eq!(record.len(), 3);
        assert_eq!(record.get(keys::QUANTITY), Some(&Value::Count(20)));
        assert_eq!(record.get(keys::TOTAL_COST), Some(&Value::Cost(1364.0)));
    }

    #[test]
    fn test_get_missing_key() {
        let record = Record::new();
        assert!(record.get(keys::UNIT_COST).is_none());
        assert!(record.is_empty());
    }
}
