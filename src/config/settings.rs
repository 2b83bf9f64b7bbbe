//! User settings for budgetrack
//!
//! Manages user preferences: the period kind reports default to, how
//! category summaries are ordered, and presentation details.

use serde::{Deserialize, Serialize};

use super::paths::BudgetrackPaths;
use crate::error::BudgetError;
use crate::models::PeriodKind;
use crate::services::aggregate::SummaryOrder;

/// User settings for budgetrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period kind used when none is given explicitly
    #[serde(default)]
    pub period_kind: PeriodKind,

    /// Ordering of budgeted category summaries
    #[serde(default)]
    pub summary_order: SummaryOrder,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether burndown output includes the trend line when one applies
    #[serde(default = "default_show_trend")]
    pub show_trend: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_show_trend() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            period_kind: PeriodKind::default(),
            summary_order: SummaryOrder::default(),
            currency_symbol: default_currency(),
            show_trend: default_show_trend(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetrackPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetrackPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
