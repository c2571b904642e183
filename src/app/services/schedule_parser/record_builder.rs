//! Record construction from token lists
//!
//! Maps field positions to date stamps and historical rate records. A lone
//! `/` inside a data line ends the record: it and every later field count
//! as absent.

use tracing::debug;

use super::tokenizer::TokenList;
use crate::app::models::{DateStamp, RateRecord, WellState};
use crate::constants::{date_fields, rate_fields};

/// Field `index` of a record, absent when at or after a record terminator
pub fn record_field(tokens: &TokenList, index: usize) -> Option<&str> {
    match tokens.terminator_position() {
        Some(end) if index >= end => None,
        _ => tokens.get(index),
    }
}

/// Parse a numeric field; malformed or absent values become `None`
///
/// Accepts Fortran `D` exponents (`1.5D3`) as well as `E` notation.
pub fn parse_rate(field: Option<&str>) -> Option<f64> {
    let raw = field?.trim();
    let parsed = match raw.find(['D', 'd']) {
        Some(_) => raw.replace(['D', 'd'], "E").parse::<f64>(),
        None => raw.parse::<f64>(),
    };

    match parsed {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Numeric field '{}' is malformed; treated as absent", raw);
            None
        }
    }
}

/// Build the date stamp from the first three fields of a date line
pub fn build_date_stamp(tokens: &TokenList) -> DateStamp {
    let owned = |index| record_field(tokens, index).map(str::to_string);
    DateStamp {
        day: owned(date_fields::DAY),
        month: owned(date_fields::MONTH),
        year: owned(date_fields::YEAR),
    }
}

/// Build a historical rate record from a rate line
///
/// An unrecognized state literal leaves the state unset rather than
/// rejecting the record.
pub fn build_rate_record(tokens: &TokenList) -> RateRecord {
    let field = |index| record_field(tokens, index);

    let well = field(rate_fields::WELL).unwrap_or_default().to_string();
    let state = field(rate_fields::STATE).and_then(WellState::from_literal);
    if state.is_none() {
        debug!(
            "Well '{}' has no recognized state literal ({:?})",
            well,
            field(rate_fields::STATE)
        );
    }

    RateRecord {
        well,
        state,
        oil_rate: parse_rate(field(rate_fields::ORAT)),
        water_rate: parse_rate(field(rate_fields::WRAT)),
        gas_rate: parse_rate(field(rate_fields::GRAT)),
        thp: parse_rate(field(rate_fields::THP)),
        bhp: parse_rate(field(rate_fields::BHP)),
    }
}
