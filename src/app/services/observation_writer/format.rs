//! Fixed-width observation file formatting
//!
//! An observation file is a count line followed by one row per retained
//! rate: the well name padded to 8 characters, then oil, water and gas
//! rates with 4 decimals in 16-character fields. Absent rates are written
//! as the sentinel so existing readers of the format keep working.

use crate::app::models::{RateRecord, or_sentinel};
use crate::constants::{RATE_FIELD_WIDTH, RATE_PRECISION, WELL_NAME_WIDTH};

/// Format one observation row, trailing newline included
pub fn format_rate_row(rate: &RateRecord) -> String {
    format!(
        "{:<name_w$} {:>rate_w$.prec$}  {:>rate_w$.prec$}  {:>rate_w$.prec$} \n",
        rate.well,
        or_sentinel(rate.oil_rate),
        or_sentinel(rate.water_rate),
        or_sentinel(rate.gas_rate),
        name_w = WELL_NAME_WIDTH,
        rate_w = RATE_FIELD_WIDTH,
        prec = RATE_PRECISION,
    )
}

/// Format the complete contents of one observation file
pub fn format_observation_file(rates: &[RateRecord]) -> String {
    let mut contents = format!("{}\n", rates.len());
    for rate in rates {
        contents.push_str(&format_rate_row(rate));
    }
    contents
}
