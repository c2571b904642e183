//! Command-line argument definitions for schedule-obs
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ObservationConfig;
use crate::constants::{DEFAULT_FILE_NAME, DEFAULT_INDEX_WIDTH, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the SCHEDULE observation extractor
///
/// Reads historical well rates from a SCHEDULE file and writes one
/// observation file per report date.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schedule-obs",
    version,
    about = "Extract historical well rates from a SCHEDULE file into per-date observation files",
    long_about = "Reads the DATES and WCONHIST blocks of a reservoir simulator SCHEDULE file \
                  and writes the oil, water and gas rates of every producing well to \
                  <output>/<date index>/<file name>, one directory per report date."
)]
pub struct Args {
    /// SCHEDULE file to read
    #[arg(value_name = "SCHEDULE")]
    pub input: PathBuf,

    /// Base directory for the per-date observation directories
    ///
    /// Created if it does not exist. Existing date directories are reused and
    /// their observation files replaced.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Base directory for observation output"
    )]
    pub output: PathBuf,

    /// File name written inside each date directory
    #[arg(
        short = 'f',
        long = "file-name",
        value_name = "NAME",
        default_value = DEFAULT_FILE_NAME,
        help = "Observation file name inside each date directory"
    )]
    pub file_name: String,

    /// Width of the zero-padded date directory names
    #[arg(
        long = "index-width",
        value_name = "DIGITS",
        default_value_t = DEFAULT_INDEX_WIDTH,
        help = "Zero-padded width of date directory names"
    )]
    pub index_width: usize,

    /// Parse and report without creating any output
    #[arg(
        long = "dry-run",
        help = "Show what would be written without creating output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress all output except errors"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the appropriate log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output naming assembled from the arguments
    pub fn to_config(&self) -> ObservationConfig {
        ObservationConfig::new(&self.output, &self.file_name).with_index_width(self.index_width)
    }
}
