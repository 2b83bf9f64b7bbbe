//! Category model
//!
//! A category is a plain name shared by expenses and budget allocations.
//! Matching is exact and case-sensitive: "Food" and "food" are different
//! categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the synthetic summary collecting expenses with no matching budget
pub const NOT_BUDGETED: &str = "Not Budgeted";

/// Label of the synthetic summary covering every expense and budget
pub const TOTAL: &str = "Total";

/// A named grouping tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn not_budgeted() -> Self {
        Self::new(NOT_BUDGETED)
    }

    pub fn total() -> Self {
        Self::new(TOTAL)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive comparison by name
    pub fn matches(&self, other: &Category) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
