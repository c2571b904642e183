//! Configuration for observation output.
//!
//! Output naming is the only runtime configuration: the base directory
//! receiving one subdirectory per date, the file written inside each,
//! and the zero-padded width of the date directory names.

use crate::constants::{DEFAULT_FILE_NAME, DEFAULT_INDEX_WIDTH, DEFAULT_OUTPUT_DIR};
use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output naming for the observation writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationConfig {
    /// Base directory; created if it does not exist
    pub output_dir: PathBuf,

    /// File name written inside each date directory
    pub file_name: String,

    /// Zero-padded width of the date directory name
    pub index_width: usize,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            index_width: DEFAULT_INDEX_WIDTH,
        }
    }
}

impl ObservationConfig {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_index_width(mut self, index_width: usize) -> Self {
        self.index_width = index_width;
        self
    }

    /// Directory receiving the observation file for one date
    pub fn date_dir(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("{:0width$}", index, width = self.index_width))
    }

    /// Full path of the observation file for one date
    pub fn date_file(&self, index: usize) -> PathBuf {
        self.date_dir(index).join(&self.file_name)
    }

    /// Reject names that would escape or collapse the per-date layout
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ScheduleError::configuration(
                "Output directory must not be empty",
            ));
        }

        if self.file_name.trim().is_empty() {
            return Err(ScheduleError::configuration(
                "Observation file name must not be empty",
            ));
        }

        if self.file_name == "." || self.file_name == ".." {
            return Err(ScheduleError::configuration(format!(
                "Observation file name '{}' is not a file name",
                self.file_name
            )));
        }

        let as_path = Path::new(&self.file_name);
        if self.file_name.contains(['/', '\\']) || as_path.components().count() != 1 {
            return Err(ScheduleError::configuration(format!(
                "Observation file name '{}' must not contain a path separator",
                self.file_name
            )));
        }

        if self.index_width == 0 {
            return Err(ScheduleError::configuration(
                "Date directory index width must be at least 1",
            ));
        }

        Ok(())
    }
}
