//! Bookkeeping for a grouping pass.

use serde::Serialize;
use tracing::{debug, warn};

/// Summary of one grouping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupingReport {
    /// Number of raw records handed to the engine
    pub input_records: usize,
    /// Number of composite slides produced
    pub slides: usize,
    /// Records dropped because no slide was open to absorb them
    pub orphaned: usize,
    /// Records rejected for lacking a title
    pub untitled: usize,
}

impl GroupingReport {
    pub(crate) fn new(input_records: usize) -> Self {
        Self {
            input_records,
            ..Self::default()
        }
    }

    /// Total number of records that contributed nothing to the output.
    pub fn dropped(&self) -> usize {
        self.orphaned + self.untitled
    }

    pub(crate) fn log(&self) {
        debug!(
            input_records = self.input_records,
            slides = self.slides,
            orphaned = self.orphaned,
            untitled = self.untitled,
            "grouped slide records"
        );
        if self.orphaned > 0 {
            warn!(
                orphaned = self.orphaned,
                "dropped slide records that precede the first slide heading"
            );
        }
    }
}
