//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries and burndown series as
//! plain-text tables.

pub mod burndown;
pub mod format;
pub mod summary;

pub use burndown::format_burndown;
pub use summary::format_summary;
