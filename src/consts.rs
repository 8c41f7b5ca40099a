/// Standard date format used throughout the codebase: "2026-03-01"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback value when a model name is unavailable
pub(crate) const UNKNOWN: &str = "unknown";

/// Monthly quota applied when neither the CLI nor the config sets one
pub(crate) const DEFAULT_UNITS_LIMIT: f64 = 500.0;
