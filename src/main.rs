use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use budgetrack::cli::{
    handle_burndown_command, handle_config_command, handle_period_command, handle_query_command,
    handle_summary_command, BurndownArgs, CliContext, ConfigCommands, PeriodArgs, QueryArgs,
    SummaryArgs,
};
use budgetrack::config::{BudgetrackPaths, Settings};
use budgetrack::services::{Clock, FixedClock, SystemClock};

#[derive(Parser)]
#[command(
    name = "budgetrack",
    version,
    about = "Period-aware budget tracking",
    long_about = "budgetrack groups expenses by category, compares them with budgets \
                  over a monthly or yearly period, and projects spending burndown."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "BUDGETRACK_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spending and budget per category for one period
    Summary(SummaryArgs),

    /// Day-by-day burndown for one category
    Burndown(BurndownArgs),

    /// Print the record query for a period as JSON
    Query(QueryArgs),

    /// Describe budget periods
    Period(PeriodArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    budgetrack::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => BudgetrackPaths::with_base_dir(dir),
        None => BudgetrackPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => Box::new(SystemClock),
    };

    let ctx = CliContext {
        paths: &paths,
        settings: &settings,
        clock: clock.as_ref(),
    };

    match cli.command {
        Some(Commands::Summary(args)) => handle_summary_command(&ctx, args)?,
        Some(Commands::Burndown(args)) => handle_burndown_command(&ctx, args)?,
        Some(Commands::Query(args)) => handle_query_command(&ctx, args)?,
        Some(Commands::Period(args)) => handle_period_command(&ctx, args)?,
        Some(Commands::Config(cmd)) => handle_config_command(&ctx, cmd)?,
        None => {
            println!("budgetrack - period-aware budget tracking");
            println!();
            println!("Run 'budgetrack --help' for usage information.");
        }
    }

    Ok(())
}
