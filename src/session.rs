//! Application-state slot holding the most recent result record.

use crate::model::Record;

/// The single "current result" owned by a presentation layer.
///
/// Holds the record of the last successful calculation for display, cost
/// augmentation, and export. Failed calculations never reach this type, so
/// the previous record survives input mistakes untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Record>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current record with a fresh calculation result.
    pub fn set(&mut self, record: Record) {
        self.current = Some(record);
    }

    /// Merge cost fields into the current record.
    ///
    /// Returns `false` when no layout record exists to augment.
    pub fn merge_costs(&mut self, costs: Record) -> bool {
        match self.current.as_mut() {
            Some(record) => {
                record.merge(costs);
                true
            }
            None => false,
        }
    }

    /// Discard the current record.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The current record, if any calculation has succeeded yet.
    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }
}
