//! CLI commands for configuration

use clap::Subcommand;

use super::CliContext;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change one setting and save it
    Set {
        /// period_kind, summary_order, currency_symbol or show_trend
        key: String,
        value: String,
    },
}

/// Handle config commands
pub fn handle_config_command(ctx: &CliContext<'_>, cmd: ConfigCommands) -> BudgetResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let settings = ctx.settings;
            println!("budgetrack Configuration");
            println!("========================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!("Snapshot file:  {}", ctx.paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  period_kind:     {}", settings.period_kind);
            println!("  summary_order:   {}", settings.summary_order);
            println!("  currency_symbol: {}", settings.currency_symbol);
            println!("  show_trend:      {}", settings.show_trend);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut settings = ctx.settings.clone();
            apply_setting(&mut settings, &key, &value)?;
            settings.save(ctx.paths)?;
            tracing::info!(%key, %value, "updated setting");
            println!("Set {} = {}", key, value);
            Ok(())
        }
    }
}

fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> BudgetResult<()> {
    match key {
        "period_kind" => settings.period_kind = value.parse()?,
        "summary_order" => settings.summary_order = value.parse()?,
        "currency_symbol" => settings.currency_symbol = value.to_string(),
        "show_trend" => {
            settings.show_trend = value.parse().map_err(|_| {
                BudgetError::Validation(format!("show_trend must be true or false, got {}", value))
            })?
        }
        other => {
            return Err(BudgetError::Validation(format!(
                "Unknown setting: {}",
                other
            )))
        }
    }
    Ok(())
}
