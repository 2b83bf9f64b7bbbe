//! Expense model
//!
//! A dated amount spent against a category. Expenses are read-only inputs:
//! the engine clones them into summaries and never mutates the originals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::date::CalendarDate;
use super::money::Money;
use crate::error::BudgetResult;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub category: Category,
    pub amount: Money,
    pub date: CalendarDate,
}

impl Expense {
    pub fn new(category: impl Into<Category>, amount: Money, date: NaiveDate) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    /// The expense date as a chrono date
    pub fn naive_date(&self) -> BudgetResult<NaiveDate> {
        self.date.to_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "category": {"name": "Food"},
            "amount": {"amount": 12.5},
            "date": {"year": 2024, "month": 3, "day": 5}
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category.name(), "Food");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(
            expense.naive_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_bad_date_surfaces_on_use() {
        let json = r#"{
            "category": {"name": "Food"},
            "amount": {"amount": 1},
            "date": {"year": 2024, "month": 2, "day": 30}
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.naive_date().is_err());
    }
}
