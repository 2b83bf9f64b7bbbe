//! CLI command printing the record query for a period

use clap::Args;

use super::{print_json, CliContext, PeriodSelector};
use crate::error::BudgetResult;
use crate::models::Category;
use crate::services::QueryBuilder;

/// Arguments of `query`
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub period: PeriodSelector,

    /// Restrict to one category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `query`: print the filter descriptor as JSON
pub fn handle_query_command(ctx: &CliContext<'_>, args: QueryArgs) -> BudgetResult<()> {
    let period = ctx.resolve_period(&args.period)?;
    let builder = QueryBuilder::new(period.strategy());

    let filter = match args.category {
        Some(name) => builder.for_category_in_period(&Category::new(name), period.start_date())?,
        None => builder.for_period(period.start_date())?,
    };

    print_json(&filter)
}
