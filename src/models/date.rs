//! Calendar date boundary type and formatting helpers
//!
//! Records arrive with dates as plain `{year, month, day}` triples. They are
//! converted into `chrono::NaiveDate` before any arithmetic so the calendar
//! library stays the single source of truth for month lengths and leap years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

/// A calendar date without a time component, as exchanged with collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// Month of the year, 1-12
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Convert to a chrono date, failing on out-of-range components
    pub fn to_naive(&self) -> BudgetResult<NaiveDate> {
        ymd(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = BudgetError;

    fn try_from(date: CalendarDate) -> BudgetResult<Self> {
        date.to_naive()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Build a date from components, surfacing bad components as an error
pub fn ymd(year: i32, month: u32, day: u32) -> BudgetResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(BudgetError::invalid_date(year, month, day))
}

/// The calendar day after `date`
pub fn day_after(date: NaiveDate) -> BudgetResult<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| BudgetError::DateOutOfRange(format!("no day after {}", date)))
}

/// The calendar day before `date`
pub fn day_before(date: NaiveDate) -> BudgetResult<NaiveDate> {
    date.pred_opt()
        .ok_or_else(|| BudgetError::DateOutOfRange(format!("no day before {}", date)))
}

/// Full English month name, e.g. "March"
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Day label in the form "<MonthName> <DayOfMonth>", e.g. "March 5"
pub fn month_day_label(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}
