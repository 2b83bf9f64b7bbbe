//! Budget period service
//!
//! Resolves period references typed by a user ("2024-03", "2024", "march",
//! "last") into concrete periods, and navigates relative to an injected clock.

use chrono::{Datelike, NaiveDate};

use super::clock::Clock;
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetPeriod, PeriodKind};

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Service for budget period management
pub struct PeriodService<'a> {
    kind: PeriodKind,
    clock: &'a dyn Clock,
}

impl<'a> PeriodService<'a> {
    pub fn new(kind: PeriodKind, clock: &'a dyn Clock) -> Self {
        Self { kind, clock }
    }

    /// Use the period kind the user configured
    pub fn from_settings(settings: &Settings, clock: &'a dyn Clock) -> Self {
        Self::new(settings.period_kind, clock)
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The period containing the clock's current date
    pub fn current_period(&self) -> BudgetResult<BudgetPeriod> {
        self.period_for_date(self.today())
    }

    pub fn period_for_date(&self, date: NaiveDate) -> BudgetResult<BudgetPeriod> {
        BudgetPeriod::containing(self.kind, date)
    }

    pub fn is_current(&self, period: &BudgetPeriod) -> BudgetResult<bool> {
        period.contains(self.today())
    }

    /// Parse a period string, or fall back to the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> BudgetResult<BudgetPeriod> {
        match period_str {
            Some(s) => self.parse(s),
            None => self.current_period(),
        }
    }

    /// Parse a period reference
    ///
    /// Formats supported:
    /// - Monthly: "2025-01", "January 2025", "Jan"
    /// - Yearly: "2025"
    /// - Any date: "2025-01-15" (period of the configured kind containing it)
    /// - Relative: "current", "last", "next"
    pub fn parse(&self, s: &str) -> BudgetResult<BudgetPeriod> {
        let s_lower = s.trim().to_lowercase();

        match s_lower.as_str() {
            "current" | "now" | "this" => return self.current_period(),
            "last" | "previous" | "prev" => return self.current_period()?.prev(),
            "next" => return self.current_period()?.next(),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&s_lower)? {
            return Ok(period);
        }

        let invalid = || BudgetError::Validation(format!("Invalid period format: {}", s.trim()));
        let parts: Vec<&str> = s_lower.split('-').collect();
        match parts.as_slice() {
            [year] => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                BudgetPeriod::yearly(year)
            }
            [year, month] => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(BudgetError::Validation(format!("Invalid month: {}", month)));
                }
                BudgetPeriod::monthly(year, month)
            }
            [_, _, _] => {
                let date = NaiveDate::parse_from_str(&s_lower, "%Y-%m-%d").map_err(|_| invalid())?;
                self.period_for_date(date)
            }
            _ => Err(invalid()),
        }
    }

    /// Parse month names like "January", "jan 2025"
    ///
    /// Without a year, a month later than the current one refers to last year.
    fn parse_month_name(&self, s: &str) -> BudgetResult<Option<BudgetPeriod>> {
        let Some((name, month)) = MONTH_NAMES
            .iter()
            .find(|(name, _)| s.starts_with(name))
        else {
            return Ok(None);
        };

        let rest = s[name.len()..].trim();
        let year = if rest.is_empty() {
            let today = self.today();
            if *month > today.month() {
                today.year() - 1
            } else {
                today.year()
            }
        } else {
            match rest.parse() {
                Ok(year) => year,
                Err(_) => return Ok(None),
            }
        };

        BudgetPeriod::monthly(year, *month).map(Some)
    }

    /// The last `count` periods ending with the current one, oldest first
    pub fn recent_periods(&self, count: usize) -> BudgetResult<Vec<BudgetPeriod>> {
        let mut periods = Vec::with_capacity(count);
        let mut current = self.current_period()?;

        for _ in 0..count {
            periods.push(current);
            current = current.prev()?;
        }

        periods.reverse();
        Ok(periods)
    }
}
