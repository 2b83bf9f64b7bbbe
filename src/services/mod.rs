//! Service layer for budgetrack
//!
//! The service layer holds the period-aware engine: resolving periods against
//! a clock, describing record queries, and aggregating expenses by category.

pub mod aggregate;
pub mod clock;
pub mod period;
pub mod query;

pub use aggregate::{aggregate, AggregationResult, CategorySummary, SummaryOrder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use period::PeriodService;
pub use query::{Comparison, Filter, QueryBuilder};
