//! Tests for the main SCHEDULE parser functionality

use super::*;
use crate::app::models::WellState;
use crate::app::services::schedule_parser::ScheduleParser;
use crate::error::ScheduleError;
use chrono::NaiveDate;
use std::path::Path;

#[test]
fn test_parse_test_schedule() {
    let result = ScheduleParser::new()
        .parse_str(&create_test_schedule())
        .unwrap();
    let dates = result.document.dates();

    assert_eq!(dates.len(), 3);
    assert_eq!(
        dates.iter().map(|d| d.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    // The date line attaches to the record its block closes
    assert_eq!(dates[0].label().as_deref(), Some("1. JAN 2020"));
    assert!(!dates[0].has_rates());

    assert_eq!(dates[1].label().as_deref(), Some("1. FEB 2020"));
    assert_eq!(dates[1].calendar_date(), NaiveDate::from_ymd_opt(2020, 2, 1));
    assert_eq!(dates[1].rates().len(), 1);
    let op1 = &dates[1].rates()[0];
    assert_eq!(op1.well, "OP_1");
    assert_eq!(op1.state, Some(WellState::Open));
    assert_eq!(op1.oil_rate, Some(1000.0));
    assert_eq!(op1.thp, Some(150.0));
    assert_eq!(op1.bhp, Some(250.0));

    assert_eq!(dates[2].label(), None);
    assert_eq!(dates[2].rates().len(), 1);
    let later = &dates[2].rates()[0];
    assert_eq!(later.oil_rate, Some(900.0));
    assert_eq!(later.water_rate, None);
    assert_eq!(later.gas_rate, None);
    assert_eq!(later.thp, Some(140.0));
    assert_eq!(later.bhp, Some(240.0));
}

#[test]
fn test_parse_stats_for_test_schedule() {
    let stats = ScheduleParser::new()
        .parse_str(&create_test_schedule())
        .unwrap()
        .stats;

    assert_eq!(stats.control_lines, 9);
    assert_eq!(stats.ignored_lines, 2);
    assert_eq!(stats.date_lines, 2);
    assert_eq!(stats.rate_lines, 3);
    assert_eq!(stats.rates_retained, 2);
    assert_eq!(stats.rates_discarded, 1);
    assert_eq!(stats.date_blocks, 2);
    assert_eq!(stats.logical_lines, 16);
    assert!(!stats.ended_in_open_block);
}

#[test]
fn test_document_always_has_implicit_first_date() {
    let result = ScheduleParser::new().parse_str("").unwrap();
    assert_eq!(result.document.dates().len(), 1);
    assert_eq!(result.document.dates()[0].index, 1);
    assert_eq!(result.stats.logical_lines, 0);
}

#[test]
fn test_date_closures_number_dates_sequentially() {
    for closures in 0..5usize {
        let schedule = "DATES\n 1 'JAN' 2000 /\n/\n".repeat(closures);
        let result = ScheduleParser::new().parse_str(&schedule).unwrap();
        let indices: Vec<usize> = result.document.dates().iter().map(|d| d.index).collect();
        assert_eq!(indices, (1..=closures + 1).collect::<Vec<_>>());
    }
}

#[test]
fn test_rate_block_closure_does_not_open_a_date() {
    let schedule = "WCONHIST\n 'P1' 'OPEN' 'ORAT' 10 /\n/\nWCONHIST\n 'P2' 'OPEN' 'ORAT' 20 /\n/\n";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();

    assert_eq!(result.document.dates().len(), 1);
    let wells: Vec<&str> = result.document.dates()[0]
        .rates()
        .iter()
        .map(|r| r.well.as_str())
        .collect();
    assert_eq!(wells, vec!["P1", "P2"]);
}

#[test]
fn test_dates_only_schedule_has_no_rates() {
    let result = ScheduleParser::new()
        .parse_str(&create_dates_only_schedule())
        .unwrap();

    assert_eq!(result.document.dates().len(), 3);
    assert_eq!(result.document.total_rates(), 0);
    assert_eq!(result.document.dates_with_rates().count(), 0);
    assert!(!result.stats.has_rates());
}

#[test]
fn test_second_date_line_overwrites_label() {
    let schedule = "DATES\n 1 'JAN' 2020 /\n 1 'MAR' 2020 /\n/\n";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();
    assert_eq!(
        result.document.dates()[0].label().as_deref(),
        Some("1. MAR 2020")
    );
}

#[test]
fn test_unterminated_block_at_end_of_file_is_accepted() {
    let schedule = "DATES\n 1 'JAN' 2020 /\n/\nWCONHIST\n 'P1' 'OPEN' 'ORAT' 10 /";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();

    assert!(result.stats.ended_in_open_block);
    assert_eq!(result.document.dates().len(), 2);
    assert_eq!(result.document.dates()[1].rates().len(), 1);
}

#[test]
fn test_lines_outside_blocks_are_ignored() {
    let schedule = "WELSPECS\n 'P1' 'G1' 1 1 1* 'OIL' /\n/\n 'P9' 'OPEN' 'ORAT' 99 /\n";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();

    assert_eq!(result.document.total_rates(), 0);
    assert_eq!(result.stats.ignored_lines, 3);
    assert_eq!(result.stats.control_lines, 1);
}

#[test]
fn test_commented_keywords_are_not_control_lines() {
    let schedule = "-- DATES\nWCONHIST -- history\n 'P1' 'OPEN' 'ORAT' 5 / -- producer\n/\n";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();

    assert_eq!(result.document.dates().len(), 1);
    assert_eq!(result.document.dates()[0].rates()[0].well, "P1");
}

#[test]
fn test_parse_file_from_disk() {
    let temp_file = create_temp_file(&create_test_schedule());
    let result = ScheduleParser::new().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.document.dates().len(), 3);
    assert_eq!(result.document.total_rates(), 2);
    assert!(result.stats.physical_lines >= result.stats.logical_lines);
}

#[test]
fn test_parse_file_missing_input_is_fatal() {
    let err = ScheduleParser::new()
        .parse_file(Path::new("/definitely/not/here/SCHEDULE.INC"))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InputNotFound { .. }));
}

#[test]
fn test_parse_file_on_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = ScheduleParser::new().parse_file(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_oversized_repeat_count_is_absorbed() {
    let schedule = "WCONHIST\n 'P1' 'OPEN' 'ORAT' 100 100000000000000* /\n/\n";
    let result = ScheduleParser::new().parse_str(schedule).unwrap();

    let rates = result.document.dates()[0].rates();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].oil_rate, Some(100.0));
    assert_eq!(rates[0].water_rate, None);
    assert_eq!(rates[0].gas_rate, None);
}
