//! Core SCHEDULE parser implementation
//!
//! This module provides the main parser orchestration: it opens the input,
//! feeds logical lines through the section state machine and folds the
//! resulting actions into a [`ScheduleDocument`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::line_reader::{LineReader, RawLine};
use super::record_builder::{build_date_stamp, build_rate_record};
use super::section::{LineAction, SectionState, transition};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize;
use crate::app::models::ScheduleDocument;
use crate::constants::{DATE_MIN_FIELDS, RATE_MIN_FIELDS};
use crate::error::{Result, ScheduleError};

/// Parser for the date and historical-rate blocks of a SCHEDULE file
///
/// Every other keyword in the file is ignored. The whole input is folded
/// into the document before anything is returned.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser;

impl ScheduleParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a SCHEDULE file from disk
    ///
    /// Failing to open or read the file is fatal; no partial document is returned.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing SCHEDULE file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| ScheduleError::input(file_path, e))?;
        let result = self
            .parse_reader(BufReader::new(file))
            .map_err(|e| match e {
                ScheduleError::Io(source) => ScheduleError::input(file_path, source),
                other => other,
            })?;

        info!(
            "Parsed {} dates and {} retained rates from {} lines",
            result.document.dates().len(),
            result.stats.rates_retained,
            result.stats.physical_lines
        );

        Ok(result)
    }

    /// Parse schedule text already held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse a buffered stream to completion
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut lines = LineReader::new(reader);
        let mut document = ScheduleDocument::new();
        let mut stats = ParseStats::new();
        let mut state = SectionState::default();

        for line in lines.by_ref() {
            let line = line?;
            stats.logical_lines += 1;

            let (next_state, action) = transition(state, &line.text);
            state = next_state;
            self.apply(action, &line, &mut document, &mut stats);
        }

        stats.physical_lines = lines.physical_lines();
        stats.ended_in_open_block = state.is_open();
        if stats.ended_in_open_block {
            debug!("Input ended inside an open block ({:?})", state);
        }

        Ok(ParseResult { document, stats })
    }

    /// Fold one classified line into the document
    fn apply(
        &self,
        action: LineAction,
        line: &RawLine,
        document: &mut ScheduleDocument,
        stats: &mut ParseStats,
    ) {
        match action {
            LineAction::OpenBlock | LineAction::CloseBlock => {
                stats.control_lines += 1;
            }
            LineAction::CloseDateBlock => {
                stats.control_lines += 1;
                stats.date_blocks += 1;
                let index = document.open_next_date();
                debug!("Line {}: date block closed, date {} opened", line.number, index);
            }
            LineAction::Ignore => {
                stats.ignored_lines += 1;
            }
            LineAction::DateLine => {
                stats.date_lines += 1;
                let stamp = build_date_stamp(&tokenize(&line.text, DATE_MIN_FIELDS));
                let current = document.current_mut();
                if current.stamp.is_some() {
                    debug!(
                        "Line {}: date {} already has a date line; replacing it",
                        line.number, current.index
                    );
                }
                current.set_stamp(stamp);
            }
            LineAction::RateLine => {
                stats.rate_lines += 1;
                let rate = build_rate_record(&tokenize(&line.text, RATE_MIN_FIELDS));
                if !rate.is_producing() {
                    debug!(
                        "Line {}: well '{}' has no positive oil rate; skipped",
                        line.number, rate.well
                    );
                }
                if document.current_mut().add_rate(rate) {
                    stats.rates_retained += 1;
                } else {
                    stats.rates_discarded += 1;
                }
            }
        }
    }
}
