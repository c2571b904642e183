//! Observation writer implementation
//!
//! Writes one directory per date with retained rates, named by the date
//! index, each holding a single observation file. Files are written to a
//! temporary name in the target directory and renamed into place, so a
//! failed write never leaves a partial observation file behind.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use super::format::format_observation_file;
use crate::app::models::{DateRecord, ScheduleDocument};
use crate::config::ObservationConfig;
use crate::error::{Result, ScheduleError};

/// Outcome of writing one date's observation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDate {
    pub index: usize,
    pub path: PathBuf,
    pub rows: usize,
    /// The date directory did not exist before this write
    pub created_dir: bool,
}

/// Emission statistics for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitStats {
    pub directories_created: usize,
    pub files_written: usize,
    pub rows_written: usize,
    /// Dates without retained rates; no directory or file is produced for them
    pub dates_skipped: usize,
    pub files: Vec<PathBuf>,
}

impl EmitStats {
    pub fn record(&mut self, written: &WrittenDate) {
        if written.created_dir {
            self.directories_created += 1;
        }
        self.files_written += 1;
        self.rows_written += written.rows;
        self.files.push(written.path.clone());
    }
}

/// Writer for per-date observation files
#[derive(Debug, Clone)]
pub struct ObservationWriter {
    config: ObservationConfig,
}

impl ObservationWriter {
    /// Create a writer after validating the output naming
    pub fn new(config: ObservationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ObservationConfig {
        &self.config
    }

    /// Write every date with retained rates, in document order
    ///
    /// The first write failure aborts the run; files already written stay in place.
    pub fn write_document(&self, document: &ScheduleDocument) -> Result<EmitStats> {
        self.write_document_with(document, |_| {})
    }

    /// Like [`write_document`](Self::write_document), calling `on_written` after each file
    pub fn write_document_with<F>(
        &self,
        document: &ScheduleDocument,
        mut on_written: F,
    ) -> Result<EmitStats>
    where
        F: FnMut(&WrittenDate),
    {
        let mut stats = EmitStats::default();

        for date in document.dates() {
            match self.write_date(date)? {
                Some(written) => {
                    stats.record(&written);
                    on_written(&written);
                }
                None => stats.dates_skipped += 1,
            }
        }

        info!(
            "Wrote {} observation files ({} rows) under {}",
            stats.files_written,
            stats.rows_written,
            self.config.output_dir.display()
        );

        Ok(stats)
    }

    /// Write the observation file for one date
    ///
    /// Returns `None` without touching the filesystem when the date has no
    /// retained rates.
    pub fn write_date(&self, date: &DateRecord) -> Result<Option<WrittenDate>> {
        if !date.has_rates() {
            debug!("Date {} has no retained rates; nothing to write", date.index);
            return Ok(None);
        }

        let dir = self.config.date_dir(date.index);
        let created_dir = !dir.is_dir();
        if created_dir {
            info!("Making directory: {}", dir.display());
        }
        fs::create_dir_all(&dir).map_err(|e| ScheduleError::output_write(&dir, e))?;

        let path = self.config.date_file(date.index);
        let contents = format_observation_file(date.rates());
        write_atomically(&dir, &path, contents.as_bytes())?;

        debug!(
            "Wrote {} rows for date {} ({}) to {}",
            date.rates().len(),
            date.index,
            date.label().unwrap_or_else(|| "undated".to_string()),
            path.display()
        );

        Ok(Some(WrittenDate {
            index: date.index,
            path,
            rows: date.rates().len(),
            created_dir,
        }))
    }
}

/// Write `contents` to a temporary file in `dir`, then rename it to `path`
fn write_atomically(dir: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    let mut temp_file = create_temp_file(dir).map_err(|e| ScheduleError::output_write(dir, e))?;
    temp_file
        .write_all(contents)
        .and_then(|_| temp_file.flush())
        .map_err(|e| ScheduleError::output_write(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| ScheduleError::output_write(path, e.error))?;
    Ok(())
}

/// Temporary file whose final mode follows the umask like a plain `fs::write`
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use crate::constants::OUTPUT_FILE_MODE;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(OUTPUT_FILE_MODE));
    }
    builder.tempfile_in(dir)
}
