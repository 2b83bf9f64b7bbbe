//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod period;
pub mod query;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use period::{handle_period_command, PeriodArgs};
pub use query::{handle_query_command, QueryArgs};
pub use report::{handle_burndown_command, handle_summary_command, BurndownArgs, SummaryArgs};

use clap::Args;
use serde::Serialize;

use crate::config::{BudgetrackPaths, Settings};
use crate::error::BudgetResult;
use crate::models::{BudgetPeriod, PeriodKind};
use crate::services::{Clock, PeriodService};

/// Everything a command handler needs besides its own arguments
pub struct CliContext<'a> {
    pub paths: &'a BudgetrackPaths,
    pub settings: &'a Settings,
    pub clock: &'a dyn Clock,
}

impl<'a> CliContext<'a> {
    /// Period service for an explicit kind, or the configured one
    pub fn period_service(&self, kind: Option<PeriodKind>) -> PeriodService<'a> {
        match kind {
            Some(kind) => PeriodService::new(kind, self.clock),
            None => PeriodService::from_settings(self.settings, self.clock),
        }
    }

    pub fn resolve_period(&self, selector: &PeriodSelector) -> BudgetResult<BudgetPeriod> {
        let period = self
            .period_service(selector.kind)
            .parse_or_current(selector.period.as_deref())?;
        tracing::debug!(%period, "resolved period");
        Ok(period)
    }
}

/// Period selection shared by the reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodSelector {
    /// Period ("2024-03", "2024", "march", "last"); defaults to the current one
    #[arg(short, long)]
    pub period: Option<String>,

    /// Period kind (monthly or yearly); defaults to the configured kind
    #[arg(short, long)]
    pub kind: Option<PeriodKind>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> BudgetResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
