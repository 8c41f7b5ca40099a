//! Cubent usage-log parser
//!
//! The editor extension appends one JSON object per completed request to
//! JSONL files under `$CUBENT_HOME/usage/` (one file per workspace session).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::billing::normalize;
use crate::consts::{DATE_FORMAT, UNKNOWN};
use crate::core::UsageRecord;
use crate::utils::{Timezone, parse_debug_enabled};

// ============================================================================
// Internal types for JSONL parsing
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageLine {
    timestamp: Option<String>,
    request_id: Option<String>,
    model: Option<String>,
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
    has_images: Option<bool>,
}

// ============================================================================
// File discovery
// ============================================================================

/// Root of the extension's data directory: `$CUBENT_HOME` or `~/.cubent`.
pub(crate) fn usage_root() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("CUBENT_HOME")
        && !home.trim().is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir().map(|home| home.join(".cubent"))
}

pub(super) fn find_usage_files() -> Vec<PathBuf> {
    let Some(root) = usage_root() else {
        return Vec::new();
    };
    let usage_path = root.join("usage");

    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&format!("{}/**/*.jsonl", usage_path.display())) {
        for entry in entries.flatten() {
            files.push(entry);
        }
    }
    files
}

// ============================================================================
// Parsing
// ============================================================================

pub(super) fn parse_usage_file(path: &Path, timezone: Timezone) -> Vec<UsageRecord> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            if parse_debug_enabled() {
                eprintln!("Failed to open {}: {}", path.display(), err);
            }
            return Vec::new();
        }
    };
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                if parse_debug_enabled() {
                    eprintln!(
                        "Failed to read line {} in {}: {}",
                        line_no + 1,
                        path.display(),
                        err
                    );
                }
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let parsed: UsageLine = match serde_json::from_str(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                if parse_debug_enabled() {
                    eprintln!("Invalid JSON at {}:{}: {}", path.display(), line_no + 1, err);
                }
                continue;
            }
        };

        if let Some(record) = parse_line(parsed, path, timezone, line_no + 1) {
            records.push(record);
        }
    }
    records
}

fn parse_line(
    line: UsageLine,
    path: &Path,
    timezone: Timezone,
    line_no: usize,
) -> Option<UsageRecord> {
    let ts = line.timestamp?;

    let model = match line.model.as_deref() {
        Some(raw) => {
            let key = normalize(raw);
            if key.is_empty() { UNKNOWN.to_string() } else { key }
        }
        None => UNKNOWN.to_string(),
    };

    let utc_dt = match ts.parse::<DateTime<Utc>>() {
        Ok(dt) => dt,
        Err(err) => {
            if parse_debug_enabled() {
                eprintln!(
                    "Invalid timestamp at {}:{}: {} ({})",
                    path.display(),
                    line_no,
                    ts,
                    err
                );
            }
            return None;
        }
    };
    let local_dt = timezone.to_fixed_offset(utc_dt);
    let date = local_dt.date_naive();

    Some(UsageRecord {
        timestamp: ts,
        timestamp_ms: utc_dt.timestamp_millis(),
        date_str: date.format(DATE_FORMAT).to_string(),
        request_id: line.request_id,
        model,
        input_tokens: line.input_tokens.unwrap_or(0),
        output_tokens: line.output_tokens.unwrap_or(0),
        has_images: line.has_images.unwrap_or(false),
    })
}
