//! Schedule Observation Library
//!
//! A Rust library for extracting historical well production rates from
//! reservoir simulator SCHEDULE files and writing them as per-date
//! observation files for history matching.
//!
//! This library provides tools for:
//! - Reading SCHEDULE files with `--` comment stripping and mixed line endings
//! - Tokenizing records with `N*` repeat counts and quoted strings
//! - Tracking `DATES` and `WCONHIST` blocks to fold rates into date records
//! - Filtering out non-producing wells
//! - Writing fixed-width observation files, one directory per date

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod observation_writer;
        pub mod schedule_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use app::models::{DateRecord, DateStamp, RateRecord, ScheduleDocument, WellState};
pub use app::services::observation_writer::{EmitStats, ObservationWriter};
pub use app::services::schedule_parser::{ParseResult, ParseStats, ScheduleParser};
pub use config::ObservationConfig;
pub use error::{Result, ScheduleError};

/// Combined outcome of parsing a schedule and writing its observations
#[derive(Debug, Clone, Default)]
pub struct ExtractionSummary {
    pub parse: ParseStats,
    pub emit: EmitStats,
}

/// Parse `input` and write one observation file per date with retained rates
///
/// A missing or unreadable input aborts before any output is created. The
/// first output failure aborts the remaining dates.
pub fn extract_observations(input: &Path, config: &ObservationConfig) -> Result<ExtractionSummary> {
    let writer = ObservationWriter::new(config.clone())?;
    let ParseResult { document, stats } = ScheduleParser::new().parse_file(input)?;
    let emit = writer.write_document(&document)?;

    Ok(ExtractionSummary { parse: stats, emit })
}

/// Convenience wrapper using the default index width
pub fn extract_to(
    input: &Path,
    output_dir: impl Into<PathBuf>,
    file_name: impl Into<String>,
) -> Result<ExtractionSummary> {
    extract_observations(input, &ObservationConfig::new(output_dir, file_name))
}
