//! Budget allocation model
//!
//! One configured budget figure for a category, already resolved to the
//! period being reported on.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use super::period::PeriodBounds;

/// A budget amount assigned to a category for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: Category,
    pub amount: Money,

    /// Period the figure applies to, when the collaborator supplies it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodBounds>,
}

impl BudgetAllocation {
    pub fn new(category: impl Into<Category>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            period: None,
        }
    }

    /// Attach the period boundaries this allocation applies to
    pub fn with_period(mut self, period: PeriodBounds) -> Self {
        self.period = Some(period);
        self
    }
}
