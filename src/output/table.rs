use comfy_table::Color;
use std::collections::HashMap;

use crate::cli::SortOrder;
use crate::core::{DayStats, Stats};
use crate::output::format::{
    NumberFormat, create_styled_table, format_compact, format_number, format_units, header_cell,
    right_cell, styled_cell,
};
use crate::output::period::{Period, aggregate_day_stats_by_period};

#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitsTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryOptions {
    pub(crate) skipped: i64,
    pub(crate) valid: i64,
    pub(crate) elapsed_ms: Option<f64>,
}

/// Print the summary line with optional timing
fn print_summary_line(summary: SummaryOptions, number_format: NumberFormat, use_color: bool) {
    let stats_text = format!(
        "{} requests ({} duplicate entries skipped)",
        format_number(summary.valid, number_format),
        format_number(summary.skipped, number_format)
    );

    if let Some(ms) = summary.elapsed_ms {
        if use_color {
            println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", stats_text, ms);
        } else {
            println!("\n  {} | {:.0}ms\n", stats_text, ms);
        }
    } else {
        println!("\n  {}\n", stats_text);
    }
}

fn sort_keys(keys: &mut Vec<&String>, order: SortOrder) {
    match order {
        SortOrder::Asc => keys.sort(),
        SortOrder::Desc => keys.sort_by(|a, b| b.cmp(a)),
    }
}

struct PeriodConfig {
    label: &'static str,
    title: &'static str,
}

fn period_config(period: Period) -> PeriodConfig {
    match period {
        Period::Day => PeriodConfig {
            label: "Date",
            title: "Cubent Units Usage",
        },
        Period::Week => PeriodConfig {
            label: "Week",
            title: "Weekly Cubent Units Usage",
        },
        Period::Month => PeriodConfig {
            label: "Month",
            title: "Monthly Cubent Units Usage",
        },
    }
}

fn units_color(opts: &UnitsTableOptions) -> Option<Color> {
    if opts.use_color { Some(Color::Green) } else { None }
}

fn model_list(data: &DayStats) -> String {
    let mut models: Vec<&String> = data.models.keys().collect();
    models.sort();
    models
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn add_compact_row(
    table: &mut comfy_table::Table,
    key: &str,
    data: &DayStats,
    opts: &UnitsTableOptions,
) {
    let nf = opts.number_format;
    table.add_row(vec![
        styled_cell(key, None, false),
        right_cell(&format_compact(data.stats.requests, nf), None, false),
        right_cell(&format_compact(data.stats.input_tokens, nf), None, false),
        right_cell(&format_compact(data.stats.output_tokens, nf), None, false),
        right_cell(&format_units(data.stats.units, nf), units_color(opts), false),
    ]);
}

fn add_full_row(
    table: &mut comfy_table::Table,
    key: &str,
    data: &DayStats,
    opts: &UnitsTableOptions,
) {
    let nf = opts.number_format;
    table.add_row(vec![
        styled_cell(key, None, false),
        styled_cell(&model_list(data), None, false),
        right_cell(&format_number(data.stats.requests, nf), None, false),
        right_cell(&format_number(data.stats.input_tokens, nf), None, false),
        right_cell(&format_number(data.stats.output_tokens, nf), None, false),
        right_cell(&format_number(data.stats.total_tokens(), nf), None, false),
        right_cell(&format_units(data.stats.units, nf), units_color(opts), false),
    ]);
}

fn add_breakdown_rows(
    table: &mut comfy_table::Table,
    key: &str,
    data: &DayStats,
    opts: &UnitsTableOptions,
) {
    let nf = opts.number_format;
    let mut models: Vec<&String> = data.models.keys().collect();
    models.sort();

    for (i, model) in models.iter().enumerate() {
        let stats = &data.models[*model];
        let label = if i == 0 { key } else { "" };
        table.add_row(vec![
            styled_cell(label, None, false),
            styled_cell(model, None, false),
            right_cell(&format_number(stats.requests, nf), None, false),
            right_cell(&format_number(stats.input_tokens, nf), None, false),
            right_cell(&format_number(stats.output_tokens, nf), None, false),
            right_cell(&format_number(stats.total_tokens(), nf), None, false),
            right_cell(&format_units(stats.units, nf), units_color(opts), false),
        ]);
    }
}

fn add_total_row(table: &mut comfy_table::Table, total: &Stats, opts: &UnitsTableOptions) {
    let nf = opts.number_format;
    if opts.compact {
        table.add_row(vec![
            styled_cell("Total", None, true),
            right_cell(&format_compact(total.requests, nf), None, true),
            right_cell(&format_compact(total.input_tokens, nf), None, true),
            right_cell(&format_compact(total.output_tokens, nf), None, true),
            right_cell(&format_units(total.units, nf), units_color(opts), true),
        ]);
    } else {
        table.add_row(vec![
            styled_cell("Total", None, true),
            styled_cell("", None, false),
            right_cell(&format_number(total.requests, nf), None, true),
            right_cell(&format_number(total.input_tokens, nf), None, true),
            right_cell(&format_number(total.output_tokens, nf), None, true),
            right_cell(&format_number(total.total_tokens(), nf), None, true),
            right_cell(&format_units(total.units, nf), units_color(opts), true),
        ]);
    }
}

pub(crate) fn print_period_table(
    day_stats: &HashMap<String, DayStats>,
    period: Period,
    breakdown: bool,
    summary: SummaryOptions,
    opts: UnitsTableOptions,
) {
    let aggregated;
    let stats_by_key = if period == Period::Day {
        day_stats
    } else {
        aggregated = aggregate_day_stats_by_period(day_stats, period);
        &aggregated
    };

    let cfg = period_config(period);
    let c = opts.use_color;

    let mut table = create_styled_table();
    let header = if opts.compact {
        vec![
            header_cell(cfg.label, c),
            header_cell("Req", c),
            header_cell("In", c),
            header_cell("Out", c),
            header_cell("Units", c),
        ]
    } else if breakdown {
        vec![
            header_cell(cfg.label, c),
            header_cell("Model", c),
            header_cell("Requests", c),
            header_cell("Input", c),
            header_cell("Output", c),
            header_cell("Total", c),
            header_cell("Units", c),
        ]
    } else {
        vec![
            header_cell(cfg.label, c),
            header_cell("Models", c),
            header_cell("Requests", c),
            header_cell("Input", c),
            header_cell("Output", c),
            header_cell("Total", c),
            header_cell("Units", c),
        ]
    };
    table.set_header(header);

    let mut keys: Vec<&String> = stats_by_key.keys().collect();
    sort_keys(&mut keys, opts.order);

    let mut total = Stats::default();
    for key in keys {
        let data = &stats_by_key[key];
        total.add(&data.stats);
        if opts.compact {
            add_compact_row(&mut table, key, data, &opts);
        } else if breakdown {
            add_breakdown_rows(&mut table, key, data, &opts);
        } else {
            add_full_row(&mut table, key, data, &opts);
        }
    }
    add_total_row(&mut table, &total, &opts);

    println!("\n {}", cfg.title);
    println!("{table}");
    print_summary_line(summary, opts.number_format, opts.use_color);
}
