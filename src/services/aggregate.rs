//! Category aggregation
//!
//! Joins a snapshot of expenses against the budgets of one period. Every
//! expense lands in exactly one place: the first budget whose category name
//! matches exactly, or the synthetic "Not Budgeted" summary.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetAllocation, Category, Expense, Money};

/// Spending and budget for one category, with the expenses behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    /// Total spent
    pub amount: Money,
    /// Total budgeted
    pub budget: Money,
    pub expenses: Vec<Expense>,
}

impl CategorySummary {
    fn collect(category: Category, budget: Money, expenses: Vec<Expense>) -> BudgetResult<Self> {
        let amount = Money::try_sum(expenses.iter().map(|e| e.amount))?;
        Ok(Self {
            category,
            amount,
            budget,
            expenses,
        })
    }

    pub fn spent(&self) -> Money {
        self.amount
    }

    pub fn remaining(&self) -> Money {
        self.budget - self.amount
    }

    /// Spent as a percentage of budget, `None` when nothing was budgeted
    pub fn percent_used(&self) -> Option<f64> {
        if self.budget.is_zero() {
            None
        } else {
            Some(self.amount.cents() as f64 / self.budget.cents() as f64 * 100.0)
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.amount > self.budget
    }
}

/// Ordering applied to the budgeted summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryOrder {
    /// Budget input order
    Input,
    /// Largest budget first
    #[default]
    Budget,
    /// Largest spend first
    Spent,
}

impl fmt::Display for SummaryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Budget => write!(f, "budget"),
            Self::Spent => write!(f, "spent"),
        }
    }
}

impl FromStr for SummaryOrder {
    type Err = BudgetError;

    fn from_str(s: &str) -> BudgetResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "input" | "none" => Ok(Self::Input),
            "budget" | "budgeted" => Ok(Self::Budget),
            "spent" | "spending" | "amount" => Ok(Self::Spent),
            other => Err(BudgetError::Validation(format!(
                "Unknown summary order: {}",
                other
            ))),
        }
    }
}

/// Outcome of aggregating one period's expenses against its budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// One entry per input budget, in input order
    pub budgeted: Vec<CategorySummary>,
    pub unbudgeted: CategorySummary,
    pub total: CategorySummary,
}

impl AggregationResult {
    /// Budgeted summaries in the requested order
    ///
    /// Returns a fresh vector; ties keep input order.
    pub fn sorted(&self, order: SummaryOrder) -> Vec<CategorySummary> {
        let mut summaries = self.budgeted.clone();
        match order {
            SummaryOrder::Input => {}
            SummaryOrder::Budget => summaries.sort_by_key(|s| Reverse(s.budget)),
            SummaryOrder::Spent => summaries.sort_by_key(|s| Reverse(s.amount)),
        }
        summaries
    }

    /// Sorted budgeted summaries, followed by "Not Budgeted" when it holds any spend
    pub fn all_expenses(&self, order: SummaryOrder) -> Vec<CategorySummary> {
        let mut summaries = self.sorted(order);
        if self.unbudgeted.amount.is_positive() {
            summaries.push(self.unbudgeted.clone());
        }
        summaries
    }

    /// Look up a summary by exact category name, including the synthetic ones
    pub fn find(&self, name: &str) -> BudgetResult<&CategorySummary> {
        self.budgeted
            .iter()
            .chain([&self.unbudgeted, &self.total])
            .find(|s| s.category.name() == name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }
}

/// Aggregate `expenses` against `budgets`
///
/// Neither input is modified. Empty inputs are valid and yield zero totals.
/// Fails when a spent or budget total does not fit in [`Money`].
pub fn aggregate(
    expenses: &[Expense],
    budgets: &[BudgetAllocation],
) -> BudgetResult<AggregationResult> {
    let mut claimed = vec![false; expenses.len()];
    let mut budgeted = Vec::with_capacity(budgets.len());

    for (index, budget) in budgets.iter().enumerate() {
        let duplicate = budgets[..index]
            .iter()
            .any(|earlier| earlier.category.matches(&budget.category));
        if duplicate {
            tracing::warn!(
                category = %budget.category,
                "duplicate budget category; expenses stay with the first entry"
            );
        }

        let mut matched = Vec::new();
        if !duplicate {
            for (expense, taken) in expenses.iter().zip(claimed.iter_mut()) {
                if expense.category.matches(&budget.category) {
                    *taken = true;
                    matched.push(expense.clone());
                }
            }
        }

        budgeted.push(CategorySummary::collect(
            budget.category.clone(),
            budget.amount,
            matched,
        )?);
    }

    let unclaimed: Vec<Expense> = expenses
        .iter()
        .zip(&claimed)
        .filter(|(_, taken)| !**taken)
        .map(|(expense, _)| expense.clone())
        .collect();
    let unbudgeted = CategorySummary::collect(Category::not_budgeted(), Money::zero(), unclaimed)?;

    let total_budget = Money::try_sum(budgets.iter().map(|b| b.amount))?;
    let total = CategorySummary::collect(Category::total(), total_budget, expenses.to_vec())?;

    tracing::debug!(
        expenses = expenses.len(),
        budgets = budgets.len(),
        unbudgeted = unbudgeted.expenses.len(),
        "aggregated expenses by category"
    );

    Ok(AggregationResult {
        budgeted,
        unbudgeted,
        total,
    })
}
