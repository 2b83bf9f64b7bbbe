//! Reports module for budgetrack
//!
//! Provides plot-ready projections built on top of category summaries.

pub mod burndown;

pub use burndown::{project, BurndownPoint, BurndownSeries};
