//! Core data types for usage accounting
//!
//! The unified record model every usage-log schema version converts to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::billing::{ModelCatalog, calculate_units};

/// Accumulated usage counters
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Stats {
    pub(crate) requests: i64,
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    /// Requests that carried at least one image attachment
    pub(crate) image_requests: i64,
    /// Cubent Units charged for these requests
    pub(crate) units: f64,
}

impl Stats {
    pub(crate) fn add(&mut self, other: &Stats) {
        self.requests += other.requests;
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.image_requests += other.image_requests;
        self.units += other.units;
    }

    /// Total tokens for display purposes
    pub(crate) fn total_tokens(&self) -> i64 {
        self.input_tokens + self.output_tokens
    }
}

/// Day-level aggregated statistics
#[derive(Debug, Default, Clone)]
pub(crate) struct DayStats {
    pub(crate) stats: Stats,
    pub(crate) models: HashMap<String, Stats>,
}

impl DayStats {
    pub(crate) fn add_stats(&mut self, model: String, stats: &Stats) {
        self.stats.add(stats);
        self.models.entry(model).or_default().add(stats);
    }
}

/// One completed request parsed from a usage log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UsageRecord {
    /// UTC timestamp string as written by the extension
    pub(crate) timestamp: String,
    /// Timestamp in milliseconds for ordering and window checks
    pub(crate) timestamp_ms: i64,
    /// Local date string (YYYY-MM-DD) in the display timezone
    pub(crate) date_str: String,
    /// Request ID for deduplication (optional)
    pub(crate) request_id: Option<String>,
    /// Canonical model key
    pub(crate) model: String,
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    pub(crate) has_images: bool,
}

impl UsageRecord {
    /// Counters for this single request, units priced through the catalog.
    pub(crate) fn to_stats(&self, catalog: &ModelCatalog) -> Stats {
        Stats {
            requests: 1,
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
            image_requests: i64::from(self.has_images),
            units: calculate_units(catalog, &self.model, self.has_images),
        }
    }
}

/// Date filter for queries
#[derive(Debug, Clone, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<chrono::NaiveDate>,
    pub(crate) until: Option<chrono::NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<chrono::NaiveDate>, until: Option<chrono::NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: chrono::NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}

/// Loading result with statistics
#[derive(Debug, Default)]
pub(crate) struct LoadResult {
    pub(crate) day_stats: HashMap<String, DayStats>,
    /// Duplicate entries dropped during loading
    pub(crate) skipped: i64,
    pub(crate) valid: i64,
    /// Processing time in milliseconds
    pub(crate) elapsed_ms: f64,
}
