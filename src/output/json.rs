use std::collections::HashMap;

use crate::cli::SortOrder;
use crate::core::DayStats;
use crate::output::period::{Period, aggregate_day_stats_by_period};

fn period_field(period: Period) -> &'static str {
    match period {
        Period::Day => "date",
        Period::Week => "week",
        Period::Month => "month",
    }
}

fn day_value(key: &str, data: &DayStats, period: Period, breakdown: bool) -> serde_json::Value {
    let models: serde_json::Value = if breakdown {
        let mut map = serde_json::Map::new();
        let mut names: Vec<&String> = data.models.keys().collect();
        names.sort();
        for name in names {
            let s = &data.models[name];
            map.insert(
                name.clone(),
                serde_json::json!({
                    "requests": s.requests,
                    "input_tokens": s.input_tokens,
                    "output_tokens": s.output_tokens,
                    "image_requests": s.image_requests,
                    "units": s.units,
                }),
            );
        }
        serde_json::Value::Object(map)
    } else {
        let mut names: Vec<&String> = data.models.keys().collect();
        names.sort();
        serde_json::json!(names)
    };

    let mut obj = serde_json::Map::new();
    obj.insert(period_field(period).to_string(), serde_json::json!(key));
    obj.insert("requests".to_string(), serde_json::json!(data.stats.requests));
    obj.insert("input_tokens".to_string(), serde_json::json!(data.stats.input_tokens));
    obj.insert("output_tokens".to_string(), serde_json::json!(data.stats.output_tokens));
    obj.insert("total_tokens".to_string(), serde_json::json!(data.stats.total_tokens()));
    obj.insert("image_requests".to_string(), serde_json::json!(data.stats.image_requests));
    obj.insert("units".to_string(), serde_json::json!(data.stats.units));
    obj.insert("models".to_string(), models);
    serde_json::Value::Object(obj)
}

pub(crate) fn output_period_json(
    day_stats: &HashMap<String, DayStats>,
    period: Period,
    order: SortOrder,
    breakdown: bool,
) -> String {
    let aggregated;
    let stats_by_key = if period == Period::Day {
        day_stats
    } else {
        aggregated = aggregate_day_stats_by_period(day_stats, period);
        &aggregated
    };

    let mut keys: Vec<&String> = stats_by_key.keys().collect();
    match order {
        SortOrder::Asc => keys.sort(),
        SortOrder::Desc => keys.sort_by(|a, b| b.cmp(a)),
    }

    let output: Vec<serde_json::Value> = keys
        .iter()
        .map(|key| day_value(key, &stats_by_key[*key], period, breakdown))
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stats;

    fn day(units: f64, models: &[&str]) -> DayStats {
        let mut ds = DayStats::default();
        let per_model = units / models.len() as f64;
        for model in models {
            ds.add_stats(
                model.to_string(),
                &Stats {
                    requests: 1,
                    input_tokens: 100,
                    output_tokens: 50,
                    image_requests: 0,
                    units: per_model,
                },
            );
        }
        ds
    }

    #[test]
    fn daily_json_sorted_ascending() {
        let mut day_stats = HashMap::new();
        day_stats.insert("2026-03-02".to_string(), day(1.1, &["gpt-4o"]));
        day_stats.insert("2026-03-01".to_string(), day(0.95, &["claude-3-5-sonnet"]));

        let json = output_period_json(&day_stats, Period::Day, SortOrder::Asc, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["date"].as_str(), Some("2026-03-01"));
        assert_eq!(arr[0]["units"].as_f64(), Some(0.95));
        assert_eq!(arr[1]["date"].as_str(), Some("2026-03-02"));
    }

    #[test]
    fn daily_json_descending_order() {
        let mut day_stats = HashMap::new();
        day_stats.insert("2026-03-01".to_string(), day(1.0, &["gpt-4o"]));
        day_stats.insert("2026-03-02".to_string(), day(1.0, &["gpt-4o"]));

        let json = output_period_json(&day_stats, Period::Day, SortOrder::Desc, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"].as_str(), Some("2026-03-02"));
    }

    #[test]
    fn monthly_json_uses_month_key() {
        let mut day_stats = HashMap::new();
        day_stats.insert("2026-03-01".to_string(), day(1.0, &["gpt-4o"]));
        day_stats.insert("2026-03-15".to_string(), day(1.0, &["gpt-4o"]));

        let json = output_period_json(&day_stats, Period::Month, SortOrder::Asc, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["month"].as_str(), Some("2026-03"));
        assert_eq!(arr[0]["requests"].as_i64(), Some(2));
    }

    #[test]
    fn breakdown_json_nests_model_stats() {
        let mut day_stats = HashMap::new();
        day_stats.insert("2026-03-01".to_string(), day(2.05, &["claude-3-5-sonnet", "gpt-4o"]));

        let json = output_period_json(&day_stats, Period::Day, SortOrder::Asc, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let models = &value[0]["models"];
        assert!(models.is_object());
        assert_eq!(models["gpt-4o"]["requests"].as_i64(), Some(1));
    }

    #[test]
    fn plain_json_lists_model_names() {
        let mut day_stats = HashMap::new();
        day_stats.insert("2026-03-01".to_string(), day(2.05, &["gpt-4o", "claude-3-5-sonnet"]));

        let json = output_period_json(&day_stats, Period::Day, SortOrder::Asc, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let models = value[0]["models"].as_array().unwrap();
        assert_eq!(models.len(), 2);
        // sorted alphabetically
        assert_eq!(models[0].as_str(), Some("claude-3-5-sonnet"));
    }
}
