//! Data models for SCHEDULE extraction
//!
//! This module contains the in-memory representation of a parsed schedule:
//! an ordered list of date records, each owning the historical well rates
//! that were reported for it.

use crate::constants::{MONTH_NAMES, SENTINEL_VALUE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Well State
// =============================================================================

/// Operating state of a well as reported on a historical rate line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellState {
    Open,
    Stop,
    Shut,
}

impl WellState {
    /// Match the exact (case-sensitive) state literal used in SCHEDULE files
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "OPEN" => Some(WellState::Open),
            "STOP" => Some(WellState::Stop),
            "SHUT" => Some(WellState::Shut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WellState::Open => "OPEN",
            WellState::Stop => "STOP",
            WellState::Shut => "SHUT",
        }
    }
}

impl fmt::Display for WellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitute the sentinel for an absent value
pub fn or_sentinel(value: Option<f64>) -> f64 {
    value.unwrap_or(SENTINEL_VALUE)
}

// =============================================================================
// Rate Record
// =============================================================================

/// One well's historical rates for one date
///
/// Absent fields are `None` rather than a magic number; [`or_sentinel`]
/// recovers the file-format sentinel where output compatibility needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub well: String,

    /// `None` when the state field held no recognized literal
    pub state: Option<WellState>,

    pub oil_rate: Option<f64>,
    pub water_rate: Option<f64>,
    pub gas_rate: Option<f64>,

    /// Tubing-head pressure
    pub thp: Option<f64>,

    /// Bottom-hole pressure
    pub bhp: Option<f64>,
}

impl RateRecord {
    /// Gas-oil ratio, `None` when either rate is absent or the oil rate is zero
    pub fn gas_oil_ratio(&self) -> Option<f64> {
        match (self.gas_rate, self.oil_rate) {
            (Some(gas), Some(oil)) if oil != 0.0 => Some(gas / oil),
            _ => None,
        }
    }

    /// Water cut, `None` when either rate is absent or the liquid rate is zero
    pub fn water_cut(&self) -> Option<f64> {
        match (self.water_rate, self.oil_rate) {
            (Some(water), Some(oil)) if oil + water != 0.0 => Some(water / (oil + water)),
            _ => None,
        }
    }

    /// Inclusion filter: only records with a strictly positive oil rate are kept
    pub fn is_producing(&self) -> bool {
        self.oil_rate.is_some_and(|oil| oil > 0.0)
    }
}

// =============================================================================
// Date Records
// =============================================================================

/// The three raw fields of a date line, quotes already removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStamp {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl DateStamp {
    /// Free-form label in the form `"<day>. <month> <year>"`
    pub fn label(&self) -> String {
        format!(
            "{}. {} {}",
            self.day.as_deref().unwrap_or_default(),
            self.month.as_deref().unwrap_or_default(),
            self.year.as_deref().unwrap_or_default()
        )
    }

    /// Resolve to a calendar date using the simulator's month abbreviations
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let day = self.day.as_deref()?.parse::<u32>().ok()?;
        let year = self.year.as_deref()?.parse::<i32>().ok()?;
        let month = month_number(self.month.as_deref()?)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// 1-based month number for a month abbreviation, case-insensitive
pub fn month_number(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();
    if upper == "JLY" {
        return Some(7);
    }
    MONTH_NAMES
        .iter()
        .position(|month| *month == upper)
        .map(|idx| idx as u32 + 1)
}

/// One date block and the rates retained for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRecord {
    /// 1-based position in file order, independent of the calendar date
    pub index: usize,

    pub stamp: Option<DateStamp>,

    rates: Vec<RateRecord>,
}

impl DateRecord {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            stamp: None,
            rates: Vec::new(),
        }
    }

    /// Attach the date line; a second date line in the same block replaces the first
    pub fn set_stamp(&mut self, stamp: DateStamp) {
        self.stamp = Some(stamp);
    }

    pub fn label(&self) -> Option<String> {
        self.stamp.as_ref().map(DateStamp::label)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.stamp.as_ref().and_then(DateStamp::to_naive_date)
    }

    /// Append a rate if it passes the inclusion filter; returns whether it was kept
    pub fn add_rate(&mut self, rate: RateRecord) -> bool {
        if rate.is_producing() {
            self.rates.push(rate);
            true
        } else {
            false
        }
    }

    pub fn rates(&self) -> &[RateRecord] {
        &self.rates
    }

    pub fn has_rates(&self) -> bool {
        !self.rates.is_empty()
    }
}

// =============================================================================
// Schedule Document
// =============================================================================

/// Complete parse result: every date record in file order
///
/// Always holds at least one record, the implicit date open before the
/// first `DATES` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDocument {
    dates: Vec<DateRecord>,
}

impl ScheduleDocument {
    pub fn new() -> Self {
        Self {
            dates: vec![DateRecord::new(1)],
        }
    }

    /// The date record new lines are currently folded into
    pub fn current_mut(&mut self) -> &mut DateRecord {
        let last = self.dates.len() - 1;
        &mut self.dates[last]
    }

    pub fn current(&self) -> &DateRecord {
        &self.dates[self.dates.len() - 1]
    }

    /// Close the current date and open the next one; returns the new index
    pub fn open_next_date(&mut self) -> usize {
        let index = self.current().index + 1;
        self.dates.push(DateRecord::new(index));
        index
    }

    pub fn dates(&self) -> &[DateRecord] {
        &self.dates
    }

    /// Dates that will produce an observation file
    pub fn dates_with_rates(&self) -> impl Iterator<Item = &DateRecord> {
        self.dates.iter().filter(|date| date.has_rates())
    }

    pub fn total_rates(&self) -> usize {
        self.dates.iter().map(|date| date.rates().len()).sum()
    }
}

impl Default for ScheduleDocument {
    fn default() -> Self {
        Self::new()
    }
}
