//! Core data models for budgetrack
//!
//! This module contains the plain data the engine works on: amounts, dates,
//! period kinds, categories, expenses and budget allocations.

pub mod budget;
pub mod category;
pub mod date;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::BudgetAllocation;
pub use category::{Category, NOT_BUDGETED, TOTAL};
pub use date::CalendarDate;
pub use expense::Expense;
pub use money::Money;
pub use period::{
    BudgetPeriod, PeriodBounds, PeriodFn, PeriodKind, PeriodOperation, PeriodStrategy,
};
