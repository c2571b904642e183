//! Format constants for SCHEDULE files and observation output
//!
//! Keywords, field positions and output layout values shared by the
//! parser and the observation writer.

// =============================================================================
// Section Keywords
// =============================================================================

/// Keyword line opening a date block
pub const DATES_KEYWORD: &str = "DATES";

/// Keyword line opening a historical rate block
pub const WCONHIST_KEYWORD: &str = "WCONHIST";

/// Lone token closing a block, and ending a record inside a data line
pub const TERMINATOR: &str = "/";

/// Comment marker; everything after the first unquoted occurrence is dropped
pub const COMMENT_MARKER: &str = "--";

/// Characters that open and close a quoted span
pub const QUOTE_CHARS: &[char] = &['\'', '"'];

// =============================================================================
// Record Layouts
// =============================================================================

/// Minimum number of fields produced for a date line
pub const DATE_MIN_FIELDS: usize = 3;

/// Minimum number of fields produced for a historical rate line
pub const RATE_MIN_FIELDS: usize = 10;

/// Largest `N` honoured in `N*value`; larger counts are kept as literal words
pub const MAX_REPEAT_COUNT: usize = 10_000;

/// Field positions within a date line
pub mod date_fields {
    pub const DAY: usize = 0;
    pub const MONTH: usize = 1;
    pub const YEAR: usize = 2;
}

/// Field positions within a historical rate line
pub mod rate_fields {
    pub const WELL: usize = 0;
    pub const STATE: usize = 1;
    pub const ORAT: usize = 3;
    pub const WRAT: usize = 4;
    pub const GRAT: usize = 5;
    pub const THP: usize = 8;
    pub const BHP: usize = 9;
}

/// Month abbreviations in calendar order. `JLY` is accepted as an alias for July.
pub const MONTH_NAMES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

// =============================================================================
// Observation Output
// =============================================================================

/// Value written in place of an absent field or undefined ratio
pub const SENTINEL_VALUE: f64 = -1.0;

/// Default zero-padded width of the per-date directory name
pub const DEFAULT_INDEX_WIDTH: usize = 4;

/// Default output directory for observation files
pub const DEFAULT_OUTPUT_DIR: &str = "Observations";

/// Default observation file name inside each date directory
pub const DEFAULT_FILE_NAME: &str = "PROD";

/// Unix mode requested for observation files, before the process umask applies
pub const OUTPUT_FILE_MODE: u32 = 0o666;

/// Width the well name is padded to in an observation row
pub const WELL_NAME_WIDTH: usize = 8;

/// Field width of each rate column in an observation row
pub const RATE_FIELD_WIDTH: usize = 16;

/// Decimal digits written for each rate
pub const RATE_PRECISION: usize = 4;
