//! Configuration module for budgetrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetrackPaths;
pub use settings::Settings;
