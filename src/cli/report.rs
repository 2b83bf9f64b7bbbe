//! CLI commands for reports
//!
//! Category summaries and burndown projections over a snapshot file.

use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::{print_json, CliContext, PeriodSelector};
use crate::display::{format_burndown, format_summary};
use crate::error::BudgetResult;
use crate::models::BudgetPeriod;
use crate::reports::burndown;
use crate::services::aggregate::{aggregate, AggregationResult, SummaryOrder};
use crate::storage::Snapshot;

/// Arguments of `summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub period: PeriodSelector,

    /// Snapshot file with expenses and budgets
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Ordering of budgeted categories (input, budget, spent)
    #[arg(short, long)]
    pub order: Option<SummaryOrder>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `burndown`
#[derive(Args, Debug, Clone)]
pub struct BurndownArgs {
    /// Category name (exact match), or "Total" / "Not Budgeted"
    pub category: String,

    #[command(flatten)]
    pub period: PeriodSelector,

    /// Snapshot file with expenses and budgets
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Leave out the trend line
    #[arg(long)]
    pub no_trend: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn aggregate_period(
    ctx: &CliContext<'_>,
    selector: &PeriodSelector,
    snapshot: Option<PathBuf>,
) -> BudgetResult<(BudgetPeriod, AggregationResult)> {
    let period = ctx.resolve_period(selector)?;
    let snapshot = Snapshot::load(snapshot.unwrap_or_else(|| ctx.paths.snapshot_file()))?;
    let records = snapshot.for_period(&period)?;
    Ok((period, aggregate(&records.expenses, &records.budgets)?))
}

/// Handle `summary`
pub fn handle_summary_command(ctx: &CliContext<'_>, args: SummaryArgs) -> BudgetResult<()> {
    let (period, result) = aggregate_period(ctx, &args.period, args.snapshot)?;
    let order = args.order.unwrap_or(ctx.settings.summary_order);

    if args.json {
        print_json(&json!({
            "period": period.label(),
            "start": period.start_date(),
            "end": period.end_date()?,
            "categories": result.all_expenses(order),
            "total": result.total,
        }))
    } else {
        print!(
            "{}",
            format_summary(&result, order, &period.label(), &ctx.settings.currency_symbol)
        );
        Ok(())
    }
}

/// Handle `burndown`
pub fn handle_burndown_command(ctx: &CliContext<'_>, args: BurndownArgs) -> BudgetResult<()> {
    let (period, result) = aggregate_period(ctx, &args.period, args.snapshot)?;
    let summary = result.find(&args.category)?;

    let mut series = burndown::project(
        summary,
        &period.strategy(),
        period.start_date(),
        ctx.clock.today(),
    )?;
    let show_trend = ctx.settings.show_trend && !args.no_trend;
    if !show_trend {
        series.trend = None;
    }

    if args.json {
        print_json(&series)
    } else {
        let title = format!("{} - {}", summary.category, period.label());
        print!("{}", format_burndown(&series, &title, show_trend));
        Ok(())
    }
}
