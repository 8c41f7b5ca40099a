//! Cubent Units billing core
//!
//! Pure calculation layer: the model catalog, request-to-units conversion,
//! usage summaries, and monthly reset scheduling. No I/O, no hidden clock
//! reads; callers supply every input.

mod catalog;
mod normalize;
mod reset;
mod stats;
mod units;

pub(crate) use catalog::{ModelCatalog, ModelPricing, Provider};
pub(crate) use normalize::normalize;
pub(crate) use reset::{is_reset_due, next_reset_date, window_start};
pub(crate) use stats::{UsageStats, WarningLevel, WarningThresholds, compute_stats};
pub(crate) use units::{FALLBACK_UNITS_PER_REQUEST, IMAGE_SURCHARGE_UNITS, calculate_units};
