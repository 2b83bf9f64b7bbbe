//! budgetrack - period-aware budget tracking engine
//!
//! This library groups expenses by category, compares them with budgets over
//! a monthly or yearly period, and projects burndown series for plotting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, dates, periods, expenses, budgets)
//! - `services`: Period resolution, query descriptors and aggregation
//! - `reports`: Burndown and trend projection
//! - `storage`: JSON snapshot input for the command line
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use budgetrack::models::{BudgetAllocation, BudgetPeriod, Expense, Money};
//! use budgetrack::services::aggregate;
//!
//! let march = BudgetPeriod::monthly(2024, 3)?;
//! let expenses = vec![Expense::new("Food", Money::from_cents(1250), march.start_date())];
//! let budgets = vec![BudgetAllocation::new("Food", Money::from_cents(20000))];
//!
//! let result = aggregate(&expenses, &budgets)?;
//! assert_eq!(result.find("Food")?.remaining(), Money::from_cents(18750));
//! # Ok::<(), budgetrack::BudgetError>(())
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `budgetrack=info`. Logs go to stderr so
/// JSON output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budgetrack=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
