use std::collections::HashMap;

use crate::core::DayStats;
use crate::output::format::{NumberFormat, format_compact, format_units};

/// Output a single line suitable for statusline/tmux integration
/// Format: "Cubent: X.XX u | Req: N | In: XM Out: XK"
pub(crate) fn print_statusline(day_stats: &HashMap<String, DayStats>, number_format: NumberFormat) {
    let mut total = crate::core::Stats::default();
    for stats in day_stats.values() {
        total.add(&stats.stats);
    }

    let parts = [
        format!("Cubent: {} u", format_units(total.units, number_format)),
        format!("Req: {}", format_compact(total.requests, number_format)),
        format!(
            "In: {} Out: {}",
            format_compact(total.input_tokens, number_format),
            format_compact(total.output_tokens, number_format)
        ),
    ];
    println!("{}", parts.join(" | "));
}

/// Output statusline as JSON for programmatic consumption
pub(crate) fn output_statusline_json(
    day_stats: &HashMap<String, DayStats>,
    number_format: NumberFormat,
) -> String {
    let mut total = crate::core::Stats::default();
    for stats in day_stats.values() {
        total.add(&stats.stats);
    }

    let output = serde_json::json!({
        "requests": total.requests,
        "input_tokens": total.input_tokens,
        "output_tokens": total.output_tokens,
        "total_tokens": total.total_tokens(),
        "image_requests": total.image_requests,
        "units": total.units,
        "formatted": {
            "units": format_units(total.units, number_format),
            "input": format_compact(total.input_tokens, number_format),
            "output": format_compact(total.output_tokens, number_format),
        }
    });

    serde_json::to_string(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
