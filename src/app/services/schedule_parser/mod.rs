//! SCHEDULE file parser for historical well rates
//!
//! This module turns a SCHEDULE control file into a [`ScheduleDocument`]:
//! the ordered date records of the file, each holding the historical
//! (`WCONHIST`) rates reported for that date.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`line_reader`] - Physical line reading, comment and whitespace stripping
//! - [`tokenizer`] - Field splitting, repeat-count expansion and quote removal
//! - [`section`] - Block state machine deciding what each line means
//! - [`record_builder`] - Date stamps and rate records built from token lists
//! - [`parser`] - Orchestration folding lines into the document
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use schedule_obs::app::services::schedule_parser::ScheduleParser;
//!
//! let schedule = "DATES\n 1 'JAN' 2020 /\n/\nWCONHIST\n 'P1' 'OPEN' 'ORAT' 100 5 80 /\n/\n";
//! let result = ScheduleParser::new().parse_str(schedule).unwrap();
//!
//! assert_eq!(result.document.dates().len(), 2);
//! assert_eq!(result.stats.rates_retained, 1);
//! ```
//!
//! [`ScheduleDocument`]: crate::app::models::ScheduleDocument

pub mod line_reader;
pub mod parser;
pub mod record_builder;
pub mod section;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_reader::{LineReader, RawLine, strip_line};
pub use parser::ScheduleParser;
pub use section::{LineAction, SectionState};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::{TokenList, tokenize};
