//! Test utilities and fixtures for SCHEDULE parser testing
//!
//! This module provides sample schedule content and helper functions
//! used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Helper to create a schedule with two date blocks and two rate blocks
///
/// Expected document:
/// - date 1: label "1. JAN 2020", no rates
/// - date 2: label "1. FEB 2020", OP_1 retained, OP_2 discarded
/// - date 3: no label, OP_1 retained
pub fn create_test_schedule() -> String {
    r#"-- Historical production for the test field
WCONPROD
 'INJ' 'OPEN' 'BHP' 5* 300 /
/

DATES
 1 'JAN' 2020 /
/

WCONHIST
-- well    state   ctrl    orat     wrat    grat      2*   thp    bhp
 'OP_1'    'OPEN'  'ORAT'  1000.0   200.0   50000.0   2*   150.0  250.0 /
 'OP_2'    'SHUT'  'ORAT'  0.0      0.0     0.0  /
/

DATES
 1 'FEB' 2020 / -- second report step
/

WCONHIST
 'OP_1'    'OPEN'  'ORAT'  900  4*  140  240 /
/
"#
    .to_string()
}

/// Helper to create a schedule without any rate block
pub fn create_dates_only_schedule() -> String {
    r#"DATES
 1 'JAN' 2020 /
/
DATES
 1 'FEB' 2020 /
/
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
