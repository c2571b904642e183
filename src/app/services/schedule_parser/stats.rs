//! Parsing statistics and result structures for SCHEDULE processing
//!
//! This module provides types for tracking how the lines of a schedule
//! were classified and how many rate records survived the inclusion filter.

use serde::{Deserialize, Serialize};

use crate::app::models::ScheduleDocument;

/// Parsing result with the document and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Date records in file order
    pub document: ScheduleDocument,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Physical lines read, blank and comment-only lines included
    pub physical_lines: usize,

    /// Non-empty lines after comment stripping
    pub logical_lines: usize,

    /// Keyword and terminator lines
    pub control_lines: usize,

    /// Data lines outside any block
    pub ignored_lines: usize,

    /// Data lines inside date blocks
    pub date_lines: usize,

    /// Data lines inside rate blocks
    pub rate_lines: usize,

    /// Rate records kept (positive oil rate)
    pub rates_retained: usize,

    /// Rate records parsed but dropped by the inclusion filter
    pub rates_discarded: usize,

    /// Date blocks closed by a terminator
    pub date_blocks: usize,

    /// The file ended while a block was still open
    pub ended_in_open_block: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of rate lines retained; 0.0 when there were none
    pub fn retention_rate(&self) -> f64 {
        if self.rate_lines == 0 {
            0.0
        } else {
            (self.rates_retained as f64 / self.rate_lines as f64) * 100.0
        }
    }

    /// Whether any rate block contributed data
    pub fn has_rates(&self) -> bool {
        self.rates_retained > 0
    }
}
