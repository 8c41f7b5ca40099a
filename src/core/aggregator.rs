//! Record aggregation

use std::collections::HashMap;

use crate::billing::ModelCatalog;
use crate::core::{DayStats, UsageRecord};

/// Fold records into per-day statistics, pricing each request exactly once.
pub(crate) fn aggregate_daily(
    records: Vec<UsageRecord>,
    catalog: &ModelCatalog,
) -> HashMap<String, DayStats> {
    let mut day_stats: HashMap<String, DayStats> = HashMap::new();
    for record in records {
        let stats = record.to_stats(catalog);
        day_stats
            .entry(record.date_str)
            .or_default()
            .add_stats(record.model, &stats);
    }
    day_stats
}
