//! Storage layer for budgetrack
//!
//! The engine itself never fetches records. The command line front end reads
//! a JSON snapshot of expenses and budgets standing in for the data-access
//! collaborator.

pub mod snapshot;

pub use snapshot::{PeriodRecords, Snapshot};
