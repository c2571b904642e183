//! Test utilities for observation writer testing

use crate::app::models::{DateRecord, RateRecord, ScheduleDocument, WellState};


/// Helper to create a producing rate record
pub fn create_test_rate(
    well: &str,
    oil: Option<f64>,
    water: Option<f64>,
    gas: Option<f64>,
) -> RateRecord {
    RateRecord {
        well: well.to_string(),
        state: Some(WellState::Open),
        oil_rate: oil,
        water_rate: water,
        gas_rate: gas,
        thp: None,
        bhp: None,
    }
}

/// Helper to create a date record holding the given rates
pub fn create_test_date(index: usize, rates: Vec<RateRecord>) -> DateRecord {
    let mut date = DateRecord::new(index);
    for rate in rates {
        date.add_rate(rate);
    }
    date
}

/// Helper to create a document with rates on dates 2 and 4 only
pub fn create_test_document() -> ScheduleDocument {
    let mut document = ScheduleDocument::new();
    document.open_next_date();
    document
        .current_mut()
        .add_rate(create_test_rate("OP_1", Some(1000.0), Some(200.0), Some(50000.0)));
    document
        .current_mut()
        .add_rate(create_test_rate("OP_2", Some(900.0), None, None));
    document.open_next_date();
    document.open_next_date();
    document
        .current_mut()
        .add_rate(create_test_rate("P1", Some(100.0), Some(5.0), Some(80.0)));
    document
}
