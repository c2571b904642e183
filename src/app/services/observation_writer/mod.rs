//! Per-date observation file writer
//!
//! This module emits the retained rates of a [`ScheduleDocument`] as
//! fixed-width observation files, one file per date, laid out as
//! `<output_dir>/<zero-padded index>/<file_name>`.
//!
//! ## Architecture
//!
//! - [`format`] - Count line and fixed-width row formatting
//! - [`writer`] - Directory creation and atomic file writes
//!
//! Dates without retained rates produce neither a directory nor a file.
//!
//! [`ScheduleDocument`]: crate::app::models::ScheduleDocument

pub mod format;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use format::{format_observation_file, format_rate_row};
pub use writer::{EmitStats, ObservationWriter, WrittenDate};
