//! CLI command describing budget periods

use clap::Args;
use serde::Serialize;

use super::{print_json, CliContext, PeriodSelector};
use crate::error::BudgetResult;
use crate::models::BudgetPeriod;

/// Arguments of `period`
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    #[command(flatten)]
    pub period: PeriodSelector,

    /// List this many periods ending with the current one instead
    #[arg(short, long, conflicts_with = "period")]
    pub recent: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PeriodInfo {
    id: String,
    label: String,
    kind: String,
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    days: u32,
    current: bool,
}

impl PeriodInfo {
    fn describe(period: &BudgetPeriod, current: bool) -> BudgetResult<Self> {
        Ok(Self {
            id: period.to_string(),
            label: period.label(),
            kind: period.kind.to_string(),
            start: period.start_date(),
            end: period.end_date()?,
            days: period.days()?,
            current,
        })
    }
}

/// Handle `period`
pub fn handle_period_command(ctx: &CliContext<'_>, args: PeriodArgs) -> BudgetResult<()> {
    let service = ctx.period_service(args.period.kind);

    let periods = match args.recent {
        Some(count) => service.recent_periods(count)?,
        None => vec![ctx.resolve_period(&args.period)?],
    };

    let infos = periods
        .iter()
        .map(|p| PeriodInfo::describe(p, service.is_current(p)?))
        .collect::<BudgetResult<Vec<_>>>()?;

    if args.json {
        return print_json(&infos);
    }

    for info in &infos {
        let marker = if info.current { " (current)" } else { "" };
        println!(
            "{:<8} {:<15} {} .. {}  {} days{}",
            info.id, info.label, info.start, info.end, info.days, marker
        );
    }
    Ok(())
}
