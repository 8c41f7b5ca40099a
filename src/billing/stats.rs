//! Usage summary derivation

use serde::{Deserialize, Serialize};

/// Coarse classification of how close an account is to its quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WarningLevel {
    None,
    Warning,
    Critical,
    Exceeded,
}

impl WarningLevel {
    pub(crate) fn label(self) -> &'static str {
        match self {
            WarningLevel::None => "none",
            WarningLevel::Warning => "warning",
            WarningLevel::Critical => "critical",
            WarningLevel::Exceeded => "exceeded",
        }
    }
}

/// Usage-percentage cutoffs for each warning level.
///
/// Deserializable so `config.toml` can override the defaults; boundary
/// values are inclusive (usage at exactly `warning` percent is already
/// `Warning`).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub(crate) struct WarningThresholds {
    pub(crate) warning: f64,
    pub(crate) critical: f64,
    pub(crate) exceeded: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            warning: 75.0,
            critical: 90.0,
            exceeded: 100.0,
        }
    }
}

impl WarningThresholds {
    fn classify(&self, usage_percentage: f64) -> WarningLevel {
        if usage_percentage >= self.exceeded {
            WarningLevel::Exceeded
        } else if usage_percentage >= self.critical {
            WarningLevel::Critical
        } else if usage_percentage >= self.warning {
            WarningLevel::Warning
        } else {
            WarningLevel::None
        }
    }
}

/// Caller-facing usage summary derived from raw counters.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct UsageStats {
    pub(crate) units_used: f64,
    pub(crate) units_limit: f64,
    pub(crate) units_remaining: f64,
    pub(crate) usage_percentage: f64,
    pub(crate) can_make_request: bool,
    pub(crate) warning_level: WarningLevel,
}

/// Derive a usage summary from raw counters. Total: never panics.
///
/// A non-positive `units_limit` is a caller error; it is defended here by
/// reporting 0% usage instead of dividing by zero. Percentage clamps at 100.
pub(crate) fn compute_stats(
    units_used: f64,
    units_limit: f64,
    thresholds: &WarningThresholds,
) -> UsageStats {
    let units_remaining = (units_limit - units_used).max(0.0);
    let usage_percentage = if units_limit > 0.0 {
        (units_used / units_limit * 100.0).min(100.0)
    } else {
        0.0
    };

    UsageStats {
        units_used,
        units_limit,
        units_remaining,
        usage_percentage,
        can_make_request: units_remaining > 0.0,
        warning_level: thresholds.classify(usage_percentage),
    }
}
