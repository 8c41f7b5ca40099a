//! Parallel usage-log loader

use rayon::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

use crate::billing::ModelCatalog;
use crate::consts::DATE_FORMAT;
use crate::core::{DateFilter, LoadResult, UsageRecord, aggregate_daily};
use crate::utils::Timezone;

use super::parser::{find_usage_files, parse_usage_file};

/// Load all usage records: discover files, parse in parallel, drop
/// duplicate request IDs (stream retries re-append the same request), and
/// apply the date filter. Returns records in timestamp order plus the
/// duplicate count.
pub(crate) fn load_records(
    filter: &DateFilter,
    timezone: Timezone,
    quiet: bool,
) -> (Vec<UsageRecord>, i64) {
    let discovery_start = Instant::now();
    let files = find_usage_files();
    let discovery_ms = discovery_start.elapsed().as_secs_f64() * 1000.0;

    if files.is_empty() {
        return (Vec::new(), 0);
    }

    if !quiet {
        eprintln!(
            "Scanning {} usage files... ({:.2}ms)",
            files.len(),
            discovery_ms
        );
    }

    let mut records: Vec<UsageRecord> = files
        .par_iter()
        .flat_map(|path| parse_usage_file(path, timezone))
        .collect();

    // Earliest write wins when a request ID repeats.
    records.sort_by_key(|r| r.timestamp_ms);
    let before = records.len();
    let mut seen = HashSet::new();
    records.retain(|r| match &r.request_id {
        Some(id) => seen.insert(id.clone()),
        None => true,
    });
    let skipped = (before - records.len()) as i64;

    records.retain(|r| {
        chrono::NaiveDate::parse_from_str(&r.date_str, DATE_FORMAT)
            .map(|date| filter.contains(date))
            .unwrap_or(false)
    });

    (records, skipped)
}

/// Load and aggregate daily stats.
pub(crate) fn load_daily(
    catalog: &ModelCatalog,
    filter: &DateFilter,
    timezone: Timezone,
    quiet: bool,
    debug: bool,
) -> LoadResult {
    let load_start = Instant::now();

    let (records, skipped) = load_records(filter, timezone, quiet);
    if records.is_empty() {
        return LoadResult {
            skipped,
            ..LoadResult::default()
        };
    }

    let valid = records.len() as i64;
    let day_stats = aggregate_daily(records, catalog);

    if debug && !quiet {
        eprintln!("[DEBUG] Processed {} entries, {} skipped", valid, skipped);
        eprintln!("[DEBUG] Days with data: {}", day_stats.len());
    }

    let elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0;
    LoadResult {
        day_stats,
        skipped,
        valid,
        elapsed_ms,
    }
}
