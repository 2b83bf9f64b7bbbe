//! Category summary formatting
//!
//! Renders an aggregation as a budget-vs-spent table for the terminal.

use crate::models::Money;
use crate::services::aggregate::{AggregationResult, CategorySummary, SummaryOrder};

use super::format::{double_separator, format_bar, format_percentage, separator, truncate};

const NAME_WIDTH: usize = 20;
const MONEY_WIDTH: usize = 12;
const BAR_WIDTH: usize = 10;

fn row(summary: &CategorySummary, symbol: &str) -> String {
    let used = summary
        .percent_used()
        .map(format_percentage)
        .unwrap_or_else(|| "-".to_string());
    let bar = format_bar(
        summary.amount.as_f64(),
        summary.budget.as_f64(),
        BAR_WIDTH,
    );
    let flag = if summary.is_over_budget() && !summary.budget.is_zero() {
        " !"
    } else {
        ""
    };

    format!(
        "{:<name$} {:>money$} {:>money$} {:>money$} {:>6} {}{}",
        truncate(summary.category.name(), NAME_WIDTH),
        fmt_money(summary.budget, symbol),
        fmt_money(summary.amount, symbol),
        fmt_money(summary.remaining(), symbol),
        used,
        bar,
        flag,
        name = NAME_WIDTH,
        money = MONEY_WIDTH,
    )
}

fn fmt_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

fn table_width() -> usize {
    NAME_WIDTH + 3 * (MONEY_WIDTH + 1) + 8 + BAR_WIDTH
}

/// Format an aggregation as a summary table
///
/// Budgeted categories come first in `order`, then "Not Budgeted" when it
/// holds any spend, then the grand total.
pub fn format_summary(
    result: &AggregationResult,
    order: SummaryOrder,
    title: &str,
    symbol: &str,
) -> String {
    let width = table_width();
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&format!("{}\n", double_separator(width)));
    output.push_str(&format!(
        "{:<name$} {:>money$} {:>money$} {:>money$} {:>6}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Used",
        name = NAME_WIDTH,
        money = MONEY_WIDTH,
    ));
    output.push_str(&format!("{}\n", separator(width)));

    let summaries = result.all_expenses(order);
    if summaries.is_empty() {
        output.push_str("  No budgets or expenses in this period.\n");
    }
    for summary in &summaries {
        output.push_str(&row(summary, symbol));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", separator(width)));
    output.push_str(&row(&result.total, symbol));
    output.push('\n');

    output
}
