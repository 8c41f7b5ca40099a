use chrono::{DateTime, SecondsFormat, Utc};
use comfy_table::Color;

use crate::billing::{UsageStats, WarningLevel};
use crate::output::format::{
    NumberFormat, create_styled_table, format_percentage, format_units, header_cell, styled_cell,
};

/// Quota status assembled by the quota command.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuotaReport {
    pub(crate) stats: UsageStats,
    pub(crate) window_start: DateTime<Utc>,
    pub(crate) reset_due: bool,
    pub(crate) next_reset: DateTime<Utc>,
}

fn level_color(level: WarningLevel) -> Option<Color> {
    match level {
        WarningLevel::None => Some(Color::Green),
        WarningLevel::Warning => Some(Color::Yellow),
        WarningLevel::Critical | WarningLevel::Exceeded => Some(Color::Red),
    }
}

fn rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn print_quota_table(report: &QuotaReport, number_format: NumberFormat, use_color: bool) {
    let stats = &report.stats;
    let color = if use_color { level_color(stats.warning_level) } else { None };
    let bold = stats.warning_level >= WarningLevel::Critical;

    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Quota", use_color), header_cell("Value", use_color)]);
    table.add_row(vec![
        styled_cell("Units used", None, false),
        styled_cell(&format_units(stats.units_used, number_format), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Units limit", None, false),
        styled_cell(&format_units(stats.units_limit, number_format), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Remaining", None, false),
        styled_cell(&format_units(stats.units_remaining, number_format), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Usage", None, false),
        styled_cell(&format_percentage(stats.usage_percentage, number_format), color, bold),
    ]);
    table.add_row(vec![
        styled_cell("Warning level", None, false),
        styled_cell(stats.warning_level.label(), color, bold),
    ]);
    table.add_row(vec![
        styled_cell("Can make request", None, false),
        styled_cell(if stats.can_make_request { "yes" } else { "no" }, None, false),
    ]);
    table.add_row(vec![
        styled_cell("Window start", None, false),
        styled_cell(&rfc3339(report.window_start), None, false),
    ]);
    table.add_row(vec![
        styled_cell("Reset due", None, false),
        styled_cell(if report.reset_due { "yes" } else { "no" }, None, false),
    ]);
    table.add_row(vec![
        styled_cell("Next reset", None, false),
        styled_cell(&rfc3339(report.next_reset), None, false),
    ]);

    println!("\n Cubent Units Quota");
    println!("{table}");
}

pub(crate) fn output_quota_json(report: &QuotaReport) -> String {
    let stats = &report.stats;
    let output = serde_json::json!({
        "units_used": stats.units_used,
        "units_limit": stats.units_limit,
        "units_remaining": stats.units_remaining,
        "usage_percentage": stats.usage_percentage,
        "can_make_request": stats.can_make_request,
        "warning_level": stats.warning_level.label(),
        "window_start": rfc3339(report.window_start),
        "reset_due": report.reset_due,
        "next_reset": rfc3339(report.next_reset),
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
