//! Burndown formatting
//!
//! Prints a projected series as a day-by-day table.

use crate::reports::BurndownSeries;

use super::format::{format_amount, separator};

/// Format a burndown series as a table of budget, spent and trend per day
pub fn format_burndown(series: &BurndownSeries, title: &str, show_trend: bool) -> String {
    let show_trend = show_trend && series.needs_trend();
    let label_width = series
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(3)
        .max(3);
    let width = label_width + if show_trend { 36 } else { 24 };

    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!(
        "{:<label$} {:>11} {:>11}",
        "Day",
        "Budget",
        "Spent",
        label = label_width
    ));
    if show_trend {
        output.push_str(&format!(" {:>11}", "Trend"));
    }
    output.push('\n');
    output.push_str(&format!("{}\n", separator(width)));

    for point in series.points() {
        output.push_str(&format!(
            "{:<label$} {:>11} {:>11}",
            point.label,
            format_amount(point.budget),
            format_amount(point.spent),
            label = label_width
        ));
        if let (true, Some(trend)) = (show_trend, point.trend) {
            output.push_str(&format!(" {:>11}", format_amount(trend)));
        }
        output.push('\n');
    }

    output.push_str(&format!("{}\n", separator(width)));
    output.push_str(&format!(
        "Elapsed: {} of {} days\n",
        series.elapsed_days,
        series.days()
    ));

    output
}
