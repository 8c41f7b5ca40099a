//! Request-to-units conversion

use super::catalog::ModelCatalog;
use super::normalize::normalize;

/// Flat surcharge applied when a request carries images and the model
/// accepts them.
pub(crate) const IMAGE_SURCHARGE_UNITS: f64 = 0.1;

/// Flat per-request charge for models missing from the catalog.
/// Flat rather than token-proportional: a charge never depends on token
/// counts, so replaying the same requests always bills the same.
pub(crate) const FALLBACK_UNITS_PER_REQUEST: f64 = 1.0;

/// Convert one completed request into a Cubent Units charge.
///
/// Deterministic and total: the same `(model_id, has_images)` pair always
/// yields the same value, and unknown or empty model identifiers fall back
/// to [`FALLBACK_UNITS_PER_REQUEST`] instead of failing. The image
/// surcharge only applies when the model actually accepts images.
pub(crate) fn calculate_units(catalog: &ModelCatalog, model_id: &str, has_images: bool) -> f64 {
    let key = normalize(model_id);
    match catalog.lookup(&key) {
        Some(pricing) => {
            let mut units = pricing.units_per_request;
            if has_images && pricing.supports_images {
                units += IMAGE_SURCHARGE_UNITS;
            }
            units
        }
        None => FALLBACK_UNITS_PER_REQUEST,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn catalog() -> ModelCatalog {
        ModelCatalog::builtin()
    }

    #[test]
    fn known_model_exact_values() {
        assert_eq!(calculate_units(&catalog(), "claude-3-5-sonnet", false), 0.95);
        assert_eq!(calculate_units(&catalog(), "gpt-4o", false), 1.1);
        assert_eq!(calculate_units(&catalog(), "gemini-2-5-flash", false), 0.3);
    }

    #[test]
    fn deterministic_across_calls() {
        let c = catalog();
        for _ in 0..3 {
            assert_eq!(calculate_units(&c, "gpt-4o", true), calculate_units(&c, "gpt-4o", true));
            assert_eq!(calculate_units(&c, "nope", false), calculate_units(&c, "nope", false));
        }
    }

    #[test]
    fn unknown_model_uses_fallback() {
        assert_eq!(
            calculate_units(&catalog(), "totally-unknown-model-xyz", false),
            FALLBACK_UNITS_PER_REQUEST
        );
    }

    #[test]
    fn empty_model_uses_fallback() {
        assert_eq!(calculate_units(&catalog(), "", false), FALLBACK_UNITS_PER_REQUEST);
        assert_eq!(calculate_units(&catalog(), "   ", true), FALLBACK_UNITS_PER_REQUEST);
    }

    #[test]
    fn image_surcharge_applied_when_supported() {
        let c = catalog();
        assert_eq!(
            calculate_units(&c, "claude-3-7-sonnet", true),
            calculate_units(&c, "claude-3-7-sonnet", false) + IMAGE_SURCHARGE_UNITS
        );
        // 1.0 base + 0.1 surcharge
        assert_eq!(calculate_units(&c, "claude-3-7-sonnet", true), 1.1);
    }

    #[test]
    fn image_surcharge_skipped_when_unsupported() {
        let c = catalog();
        assert_eq!(
            calculate_units(&c, "claude-3-haiku", true),
            calculate_units(&c, "claude-3-haiku", false)
        );
    }

    #[test]
    fn image_flag_ignored_for_unknown_models() {
        let c = catalog();
        assert_eq!(
            calculate_units(&c, "totally-unknown-model-xyz", true),
            FALLBACK_UNITS_PER_REQUEST
        );
    }

    #[test]
    fn spelling_variants_resolve_to_same_charge() {
        let c = catalog();
        assert_eq!(
            calculate_units(&c, "anthropic/claude-3.5-sonnet", false),
            calculate_units(&c, "claude-3-5-sonnet", false)
        );
        assert_eq!(
            calculate_units(&c, "claude-3-5-sonnet-20241022", false),
            calculate_units(&c, "claude-3-5-sonnet", false)
        );
    }
}
