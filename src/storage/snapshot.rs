//! JSON snapshot of expenses and budgets
//!
//! ```json
//! {
//!   "expenses": [
//!     {"category": {"name": "Food"}, "amount": {"amount": 12.5},
//!      "date": {"year": 2024, "month": 3, "day": 5}}
//!   ],
//!   "budgets": [
//!     {"category": {"name": "Food"}, "amount": {"amount": 200}}
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetAllocation, BudgetPeriod, Expense};

/// Every record the front end knows about, across all periods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Vec<BudgetAllocation>,
}

/// The records that apply to one period
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodRecords {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<BudgetAllocation>,
}

impl Snapshot {
    /// Read a snapshot, returning an error if the file doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> BudgetResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BudgetError::NotFound {
                entity_type: "Snapshot",
                identifier: path.display().to_string(),
            });
        }

        let file = File::open(path)
            .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)
            .map_err(|e| BudgetError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;

        tracing::debug!(
            path = %path.display(),
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Expenses dated inside `period`, and budgets that apply to it
    ///
    /// A budget without period bounds applies to every period; one with bounds
    /// applies when they cover the period's first day.
    pub fn for_period(&self, period: &BudgetPeriod) -> BudgetResult<PeriodRecords> {
        let strategy = period.strategy();
        let start = period.start_date();

        let mut expenses = Vec::new();
        for expense in &self.expenses {
            if strategy.is_in_period(start, expense.naive_date()?)? {
                expenses.push(expense.clone());
            }
        }

        let budgets = self
            .budgets
            .iter()
            .filter(|budget| match &budget.period {
                None => true,
                Some(bounds) => bounds.start <= start && start <= bounds.end_inclusive,
            })
            .cloned()
            .collect();

        Ok(PeriodRecords { expenses, budgets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PeriodBounds};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            expenses: vec![
                Expense::new("Food", Money::from_units_cents(10, 0), date(2024, 2, 29)),
                Expense::new("Food", Money::from_units_cents(20, 0), date(2024, 3, 1)),
                Expense::new("Food", Money::from_units_cents(30, 0), date(2024, 3, 31)),
                Expense::new("Food", Money::from_units_cents(40, 0), date(2024, 4, 1)),
            ],
            budgets: vec![
                BudgetAllocation::new("Food", Money::from_units_cents(200, 0)),
                BudgetAllocation::new("Rent", Money::from_units_cents(900, 0)).with_period(
                    PeriodBounds {
                        start: date(2024, 4, 1),
                        end_inclusive: date(2024, 4, 30),
                    },
                ),
            ],
        }
    }

    #[test]
    fn test_for_period_filters_by_dates() {
        let march = BudgetPeriod::monthly(2024, 3).unwrap();
        let records = snapshot().for_period(&march).unwrap();

        let amounts: Vec<i64> = records.expenses.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, vec![2000, 3000]);
        assert_eq!(records.budgets.len(), 1);
        assert_eq!(records.budgets[0].category.name(), "Food");
    }

    #[test]
    fn test_bounded_budget_applies_to_its_period() {
        let april = BudgetPeriod::monthly(2024, 4).unwrap();
        let records = snapshot().for_period(&april).unwrap();

        assert_eq!(records.expenses.len(), 1);
        assert_eq!(records.budgets.len(), 2);
    }

    #[test]
    fn test_yearly_period_takes_whole_year() {
        let year = BudgetPeriod::yearly(2024).unwrap();
        let records = snapshot().for_period(&year).unwrap();
        assert_eq!(records.expenses.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{
                "expenses": [
                    {"category": {"name": "Food"}, "amount": {"amount": 12.5},
                     "date": {"year": 2024, "month": 3, "day": 5}}
                ],
                "budgets": [{"category": {"name": "Food"}, "amount": {"amount": 200}}]
            }"#,
        )
        .unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.expenses[0].amount.cents(), 1250);
        assert_eq!(loaded.budgets[0].amount.cents(), 20000);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = Snapshot::load(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.budgets.is_empty());
    }
}
