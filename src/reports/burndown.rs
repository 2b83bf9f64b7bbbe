//! Burndown and trend projection
//!
//! Turns one category summary into three day-indexed series for plotting:
//! a linear budget ramp, the cumulative spend, and (while the period is still
//! running) a straight-line extrapolation of the current pace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;
use crate::models::date::{day_after, month_day_label};
use crate::models::{PeriodFn, PeriodStrategy};
use crate::services::aggregate::CategorySummary;

/// Plot-ready series for one category over one period
///
/// Index `i` of every series holds the value for day `i + 1` of the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownSeries {
    pub labels: Vec<String>,
    pub budget: Vec<f64>,
    pub expenses: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<f64>>,
    /// Days of the period already elapsed on the reference date
    pub elapsed_days: u32,
}

/// One plotted day
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownPoint<'a> {
    pub label: &'a str,
    pub budget: f64,
    pub spent: f64,
    pub trend: Option<f64>,
}

impl BurndownSeries {
    pub fn days(&self) -> usize {
        self.budget.len()
    }

    pub fn needs_trend(&self) -> bool {
        self.trend.is_some()
    }

    /// Iterate the series row by row
    pub fn points(&self) -> impl Iterator<Item = BurndownPoint<'_>> + '_ {
        (0..self.days()).map(move |i| BurndownPoint {
            label: &self.labels[i],
            budget: self.budget[i],
            spent: self.expenses[i],
            trend: self.trend.as_ref().map(|trend| trend[i]),
        })
    }
}

/// Horizontal axis labels for the period containing the anchor
pub const AXIS_LABELS: PeriodFn<(NaiveDate, u32), BudgetResult<Vec<String>>> =
    PeriodFn::new(day_number_labels, month_day_labels);

fn day_number_labels((_, days): (NaiveDate, u32)) -> BudgetResult<Vec<String>> {
    Ok((1..=days).map(|day| day.to_string()).collect())
}

fn month_day_labels((start, days): (NaiveDate, u32)) -> BudgetResult<Vec<String>> {
    let mut labels = Vec::with_capacity(days as usize);
    let mut day = start;
    for i in 0..days {
        labels.push(month_day_label(day));
        if i + 1 < days {
            day = day_after(day)?;
        }
    }
    Ok(labels)
}

/// Days of the period elapsed on `today`
///
/// Zero before the period starts, the full length once it has ended.
pub fn elapsed_days(
    strategy: &PeriodStrategy,
    anchor: NaiveDate,
    today: NaiveDate,
) -> BudgetResult<u32> {
    let bounds = strategy.bounds(anchor)?;
    let days = strategy.days_in_period(anchor)?;
    if today < bounds.start {
        Ok(0)
    } else if today > bounds.end_inclusive {
        Ok(days)
    } else {
        Ok(strategy.days_since_start(anchor, today)? as u32)
    }
}

/// A trend is only drawn while the period is part-way through
pub fn needs_trend(elapsed_days: u32, days_in_period: u32) -> bool {
    elapsed_days > 0 && elapsed_days < days_in_period
}

/// Project `summary` across the period containing `anchor`, as seen on `today`
///
/// Expenses dated outside the period are skipped by both the expense line and
/// the trend, so the trend's pace is the in-period spend over elapsed days.
pub fn project(
    summary: &CategorySummary,
    strategy: &PeriodStrategy,
    anchor: NaiveDate,
    today: NaiveDate,
) -> BudgetResult<BurndownSeries> {
    let start = strategy.period_start(anchor)?;
    let days = strategy.days_in_period(anchor)?;
    let len = days as usize;

    let total_budget = summary.budget.as_f64();
    let budget: Vec<f64> = (1..=days)
        .map(|i| total_budget * i as f64 / days as f64)
        .collect();

    let mut expenses = vec![0.0; len];
    for expense in &summary.expenses {
        let offset = strategy.days_since_start(anchor, expense.naive_date()?)?;
        if offset < 1 || offset > days as i64 {
            tracing::debug!(
                category = %summary.category,
                date = %expense.date,
                "expense outside burndown period ignored"
            );
            continue;
        }
        let amount = expense.amount.as_f64();
        for value in &mut expenses[(offset - 1) as usize..] {
            *value += amount;
        }
    }

    let elapsed = elapsed_days(strategy, anchor, today)?;
    let spent_in_period = expenses.last().copied().unwrap_or(0.0);
    let trend: Option<Vec<f64>> = needs_trend(elapsed, days).then(|| {
        let average = spent_in_period / elapsed as f64;
        (1..=days).map(|i| average * i as f64).collect()
    });

    let labels = strategy.apply(&AXIS_LABELS, (start, days))?;

    tracing::debug!(
        category = %summary.category,
        days,
        elapsed,
        trend = trend.is_some(),
        "projected burndown"
    );

    Ok(BurndownSeries {
        labels,
        budget,
        expenses,
        trend,
        elapsed_days: elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetAllocation, Expense, Money, PeriodKind};
    use crate::services::aggregate::aggregate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn food_summary(expenses: &[(NaiveDate, i64)], budget: i64) -> CategorySummary {
        let expenses: Vec<Expense> = expenses
            .iter()
            .map(|(day, amount)| Expense::new("Food", Money::from_units_cents(*amount, 0), *day))
            .collect();
        let budgets = [BudgetAllocation::new(
            "Food",
            Money::from_units_cents(budget, 0),
        )];
        aggregate(&expenses, &budgets).unwrap().budgeted.remove(0)
    }

    #[test]
    fn test_budget_line_is_linear() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[], 300);
        let series = project(&summary, &strategy, date(2024, 4, 1), date(2024, 4, 10)).unwrap();

        assert_eq!(series.days(), 30);
        assert_eq!(series.budget[14], 150.0);
        assert_eq!(series.budget[29], 300.0);
        assert_eq!(series.budget[0], 10.0);
    }

    #[test]
    fn test_expense_line_is_cumulative() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 3, 5), 100), (date(2024, 3, 10), 50)], 200);
        let series = project(&summary, &strategy, date(2024, 3, 1), date(2024, 4, 2)).unwrap();

        assert_eq!(series.expenses.len(), 31);
        assert_eq!(series.expenses[3], 0.0);
        assert_eq!(series.expenses[4], 100.0);
        assert_eq!(series.expenses[8], 100.0);
        assert_eq!(series.expenses[9], 150.0);
        assert_eq!(series.expenses[30], 150.0);
    }

    #[test]
    fn test_trend_extrapolates_pace() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 4, 2), 100)], 300);
        let series = project(&summary, &strategy, date(2024, 4, 1), date(2024, 4, 10)).unwrap();

        assert_eq!(series.elapsed_days, 10);
        let trend = series.trend.as_ref().unwrap();
        assert_eq!(trend[0], 10.0);
        assert_eq!(trend[29], 300.0);
    }

    #[test]
    fn test_trend_suppressed_outside_running_period() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 4, 2), 100)], 300);

        let future = project(&summary, &strategy, date(2024, 4, 1), date(2024, 3, 31)).unwrap();
        assert_eq!(future.elapsed_days, 0);
        assert!(!future.needs_trend());

        let past = project(&summary, &strategy, date(2024, 4, 1), date(2024, 5, 1)).unwrap();
        assert_eq!(past.elapsed_days, 30);
        assert!(!past.needs_trend());

        let last_day = project(&summary, &strategy, date(2024, 4, 1), date(2024, 4, 30)).unwrap();
        assert!(!last_day.needs_trend());
    }

    #[test]
    fn test_needs_trend_bounds() {
        assert!(!needs_trend(0, 30));
        assert!(needs_trend(1, 30));
        assert!(needs_trend(29, 30));
        assert!(!needs_trend(30, 30));
    }

    #[test]
    fn test_monthly_labels_are_day_numbers() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[], 0);
        let series = project(&summary, &strategy, date(2024, 2, 12), date(2024, 2, 12)).unwrap();

        assert_eq!(series.labels.len(), 29);
        assert_eq!(series.labels[0], "1");
        assert_eq!(series.labels[28], "29");
    }

    #[test]
    fn test_yearly_labels_name_each_day() {
        let strategy = PeriodKind::Yearly.strategy();
        let summary = food_summary(&[(date(2024, 12, 31), 10)], 3660);
        let series = project(&summary, &strategy, date(2024, 6, 1), date(2024, 6, 1)).unwrap();

        assert_eq!(series.labels.len(), 366);
        assert_eq!(series.labels[0], "January 1");
        assert_eq!(series.labels[59], "February 29");
        assert_eq!(series.labels[365], "December 31");
        assert_eq!(series.expenses[364], 0.0);
        assert_eq!(series.expenses[365], 10.0);
        assert_eq!(series.budget[0], 10.0);
    }

    #[test]
    fn test_out_of_period_expenses_ignored() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 2, 29), 40), (date(2024, 3, 3), 5)], 100);
        let series = project(&summary, &strategy, date(2024, 3, 1), date(2024, 3, 5)).unwrap();

        assert_eq!(series.expenses[30], 5.0);
    }

    #[test]
    fn test_trend_uses_in_period_spend() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 3, 31), 500), (date(2024, 4, 2), 100)], 300);
        assert_eq!(summary.amount, Money::from_units_cents(600, 0));

        let series = project(&summary, &strategy, date(2024, 4, 1), date(2024, 4, 10)).unwrap();

        assert_eq!(series.expenses[29], 100.0);
        let trend = series.trend.as_ref().unwrap();
        assert_eq!(trend[0], 10.0);
        assert_eq!(trend[29], 300.0);
    }

    #[test]
    fn test_points_line_up() {
        let strategy = PeriodKind::Monthly.strategy();
        let summary = food_summary(&[(date(2024, 4, 1), 30)], 300);
        let series = project(&summary, &strategy, date(2024, 4, 1), date(2024, 4, 3)).unwrap();

        let first = series.points().next().unwrap();
        assert_eq!(first.label, "1");
        assert_eq!(first.budget, 10.0);
        assert_eq!(first.spent, 30.0);
        assert_eq!(first.trend, Some(10.0));
        assert_eq!(series.points().count(), 30);
    }
}
