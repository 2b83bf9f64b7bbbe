//! Budget period representation
//!
//! Two period kinds are supported: calendar months and calendar years. Every
//! period-sensitive computation is written once per kind as a pair of plain
//! functions ([`PeriodFn`]) and dispatched through a [`PeriodStrategy`], so
//! callers never branch on the kind themselves.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date::{day_after, day_before, ymd};
use crate::error::{BudgetError, BudgetResult};

/// The accounting period granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// One calendar month
    #[default]
    Monthly,
    /// One calendar year
    Yearly,
}

impl PeriodKind {
    /// Dispatcher bound to this kind
    pub const fn strategy(self) -> PeriodStrategy {
        PeriodStrategy::new(self)
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for PeriodKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> BudgetResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Self::Yearly),
            _ => Err(BudgetError::UnknownPeriodKind(s.to_string())),
        }
    }
}

/// A computation expressed once for monthly and once for yearly periods
pub trait PeriodOperation {
    type Input;
    type Output;

    fn monthly(&self, input: Self::Input) -> Self::Output;
    fn yearly(&self, input: Self::Input) -> Self::Output;
}

/// A [`PeriodOperation`] made of two plain function pointers
pub struct PeriodFn<I, O> {
    monthly: fn(I) -> O,
    yearly: fn(I) -> O,
}

impl<I, O> PeriodFn<I, O> {
    pub const fn new(monthly: fn(I) -> O, yearly: fn(I) -> O) -> Self {
        Self { monthly, yearly }
    }
}

impl<I, O> PeriodOperation for PeriodFn<I, O> {
    type Input = I;
    type Output = O;

    fn monthly(&self, input: I) -> O {
        (self.monthly)(input)
    }

    fn yearly(&self, input: I) -> O {
        (self.yearly)(input)
    }
}

/// Holds one period kind and routes operations to the matching half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodStrategy {
    kind: PeriodKind,
}

impl PeriodStrategy {
    pub const fn new(kind: PeriodKind) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// Invoke the half of `op` matching the held kind
    pub fn apply<Op>(&self, op: &Op, input: Op::Input) -> Op::Output
    where
        Op: PeriodOperation + ?Sized,
    {
        match self.kind {
            PeriodKind::Monthly => op.monthly(input),
            PeriodKind::Yearly => op.yearly(input),
        }
    }

    /// First day of the period containing `anchor`
    pub fn period_start(&self, anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        self.apply(&arithmetic::PERIOD_START, anchor)
    }

    /// Inclusive start and end of the period containing `anchor`
    pub fn bounds(&self, anchor: NaiveDate) -> BudgetResult<PeriodBounds> {
        Ok(PeriodBounds {
            start: self.period_start(anchor)?,
            end_inclusive: self.end_of_period(anchor)?,
        })
    }

    /// Number of calendar days in the period containing `anchor`
    pub fn days_in_period(&self, anchor: NaiveDate) -> BudgetResult<u32> {
        self.apply(&arithmetic::DAYS_IN_PERIOD, anchor)
    }

    /// Days from the period start through `as_of`, counting both ends
    ///
    /// The first day of the period yields 1. Dates before the period yield
    /// zero or less, dates after it exceed [`Self::days_in_period`].
    pub fn days_since_start(&self, anchor: NaiveDate, as_of: NaiveDate) -> BudgetResult<i64> {
        self.apply(&arithmetic::DAYS_SINCE_START, (anchor, as_of))
    }

    /// First day of the following period
    pub fn next_period(&self, anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        self.apply(&arithmetic::NEXT_PERIOD, anchor)
    }

    /// First day of the preceding period
    pub fn previous_period(&self, anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        self.apply(&arithmetic::PREVIOUS_PERIOD, anchor)
    }

    /// Last calendar day of the period containing `anchor`
    pub fn end_of_period(&self, anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        self.apply(&arithmetic::END_OF_PERIOD, anchor)
    }

    /// Whether `candidate` lies in `[period_start, end_of_period + 1 day)`
    pub fn is_in_period(&self, period_start: NaiveDate, candidate: NaiveDate) -> BudgetResult<bool> {
        let end_exclusive = day_after(self.end_of_period(period_start)?)?;
        Ok(candidate >= period_start && candidate < end_exclusive)
    }

    /// Human readable name of the period, e.g. "March 2024" or "2024"
    pub fn period_label(&self, anchor: NaiveDate) -> String {
        self.apply(&arithmetic::PERIOD_LABEL, anchor)
    }
}

impl From<PeriodKind> for PeriodStrategy {
    fn from(kind: PeriodKind) -> Self {
        Self::new(kind)
    }
}

/// Inclusive date boundaries of one concrete period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    pub start: NaiveDate,
    pub end_inclusive: NaiveDate,
}

/// Per-kind date arithmetic, one function pair per operation
///
/// All construction goes through chrono so month lengths and leap years are
/// decided by the calendar library.
pub mod arithmetic {
    use super::*;

    pub const PERIOD_START: PeriodFn<NaiveDate, BudgetResult<NaiveDate>> =
        PeriodFn::new(month_start, year_start);

    pub const NEXT_PERIOD: PeriodFn<NaiveDate, BudgetResult<NaiveDate>> =
        PeriodFn::new(next_month, next_year);

    pub const PREVIOUS_PERIOD: PeriodFn<NaiveDate, BudgetResult<NaiveDate>> =
        PeriodFn::new(previous_month, previous_year);

    pub const END_OF_PERIOD: PeriodFn<NaiveDate, BudgetResult<NaiveDate>> =
        PeriodFn::new(month_end, year_end);

    pub const DAYS_IN_PERIOD: PeriodFn<NaiveDate, BudgetResult<u32>> =
        PeriodFn::new(days_in_month, days_in_year);

    pub const DAYS_SINCE_START: PeriodFn<(NaiveDate, NaiveDate), BudgetResult<i64>> =
        PeriodFn::new(days_since_month_start, days_since_year_start);

    pub const PERIOD_LABEL: PeriodFn<NaiveDate, String> = PeriodFn::new(month_label, year_label);

    pub fn month_start(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        ymd(anchor.year(), anchor.month(), 1)
    }

    pub fn year_start(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        ymd(anchor.year(), 1, 1)
    }

    pub fn next_month(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        if anchor.month() == 12 {
            ymd(anchor.year() + 1, 1, 1)
        } else {
            ymd(anchor.year(), anchor.month() + 1, 1)
        }
    }

    pub fn next_year(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        ymd(anchor.year() + 1, 1, 1)
    }

    pub fn previous_month(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        if anchor.month() == 1 {
            ymd(anchor.year() - 1, 12, 1)
        } else {
            ymd(anchor.year(), anchor.month() - 1, 1)
        }
    }

    pub fn previous_year(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        ymd(anchor.year() - 1, 1, 1)
    }

    pub fn month_end(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        day_before(next_month(anchor)?)
    }

    pub fn year_end(anchor: NaiveDate) -> BudgetResult<NaiveDate> {
        day_before(next_year(anchor)?)
    }

    fn days_in_month(anchor: NaiveDate) -> BudgetResult<u32> {
        Ok((next_month(anchor)? - month_start(anchor)?).num_days() as u32)
    }

    // Jan 1 to Jan 1 so leap years come from the calendar, not a table.
    fn days_in_year(anchor: NaiveDate) -> BudgetResult<u32> {
        Ok((next_year(anchor)? - year_start(anchor)?).num_days() as u32)
    }

    fn days_since_month_start((anchor, as_of): (NaiveDate, NaiveDate)) -> BudgetResult<i64> {
        Ok((as_of - month_start(anchor)?).num_days() + 1)
    }

    fn days_since_year_start((anchor, as_of): (NaiveDate, NaiveDate)) -> BudgetResult<i64> {
        Ok((as_of - year_start(anchor)?).num_days() + 1)
    }

    fn month_label(anchor: NaiveDate) -> String {
        anchor.format("%B %Y").to_string()
    }

    fn year_label(anchor: NaiveDate) -> String {
        anchor.year().to_string()
    }
}

/// One concrete period instance: a kind plus its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodRepr")]
pub struct BudgetPeriod {
    pub kind: PeriodKind,
    start: NaiveDate,
}

/// Incoming period, whose `start` may be any day inside it
#[derive(Deserialize)]
struct PeriodRepr {
    kind: PeriodKind,
    start: NaiveDate,
}

impl TryFrom<PeriodRepr> for BudgetPeriod {
    type Error = BudgetError;

    fn try_from(repr: PeriodRepr) -> BudgetResult<Self> {
        Self::containing(repr.kind, repr.start)
    }
}

impl BudgetPeriod {
    /// The period of `kind` that contains `date`
    pub fn containing(kind: PeriodKind, date: NaiveDate) -> BudgetResult<Self> {
        Ok(Self {
            kind,
            start: kind.strategy().period_start(date)?,
        })
    }

    pub fn monthly(year: i32, month: u32) -> BudgetResult<Self> {
        Self::containing(PeriodKind::Monthly, ymd(year, month, 1)?)
    }

    pub fn yearly(year: i32) -> BudgetResult<Self> {
        Self::containing(PeriodKind::Yearly, ymd(year, 1, 1)?)
    }

    pub fn strategy(&self) -> PeriodStrategy {
        self.kind.strategy()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of this period (inclusive)
    pub fn end_date(&self) -> BudgetResult<NaiveDate> {
        self.strategy().end_of_period(self.start)
    }

    pub fn days(&self) -> BudgetResult<u32> {
        self.strategy().days_in_period(self.start)
    }

    pub fn contains(&self, date: NaiveDate) -> BudgetResult<bool> {
        self.strategy().is_in_period(self.start, date)
    }

    pub fn next(&self) -> BudgetResult<Self> {
        Ok(Self {
            kind: self.kind,
            start: self.strategy().next_period(self.start)?,
        })
    }

    pub fn prev(&self) -> BudgetResult<Self> {
        Ok(Self {
            kind: self.kind,
            start: self.strategy().previous_period(self.start)?,
        })
    }

    /// Long form label, e.g. "March 2024"
    pub fn label(&self) -> String {
        self.strategy().period_label(self.start)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PeriodKind::Monthly => write!(f, "{:04}-{:02}", self.start.year(), self.start.month()),
            PeriodKind::Yearly => write!(f, "{:04}", self.start.year()),
        }
    }
}

impl Ord for BudgetPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start.cmp(&other.start)
    }
}

impl PartialOrd for BudgetPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
