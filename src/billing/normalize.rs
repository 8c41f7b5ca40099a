//! Model identifier normalization
//!
//! Providers and editor builds report the same model under several spellings
//! ("anthropic/claude-3.5-sonnet", "claude-3-5-sonnet-20241022", "gpt4o").
//! This module folds them into the canonical catalog key in one place, so
//! catalog lookup can stay exact-match.

/// Prefixes stripped before any other rewriting.
const PROVIDER_PREFIXES: &[&str] = &["anthropic/", "anthropic.", "openai/", "google/", "models/"];

/// Explicit synonym table applied after mechanical cleanup.
/// Left side must already be in cleaned form (lowercase, hyphen-delimited).
const SYNONYMS: &[(&str, &str)] = &[
    ("gpt4o", "gpt-4o"),
    ("gpt4o-mini", "gpt-4o-mini"),
    ("gpt-41", "gpt-4-1"),
    ("gpt-41-mini", "gpt-4-1-mini"),
    ("claude-35-sonnet", "claude-3-5-sonnet"),
    ("claude-35-haiku", "claude-3-5-haiku"),
    ("claude-37-sonnet", "claude-3-7-sonnet"),
    ("gemini-25-pro", "gemini-2-5-pro"),
    ("gemini-25-flash", "gemini-2-5-flash"),
];

/// True for suffixes like "20241022" that providers append as release dates.
fn is_date_suffix(s: &str) -> bool {
    s.len() == 8 && s.chars().all(|c| c.is_ascii_digit())
}

/// Fold a raw model identifier into its canonical catalog key.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. An empty or
/// whitespace-only input produces an empty key, which no catalog entry
/// matches.
pub(crate) fn normalize(raw: &str) -> String {
    let mut name = raw.trim().to_ascii_lowercase();

    for prefix in PROVIDER_PREFIXES {
        if let Some(stripped) = name.strip_prefix(prefix) {
            name = stripped.to_string();
            break;
        }
    }

    // Map separator variants to hyphens and collapse runs.
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        let c = match c {
            '.' | '_' | ' ' | '@' => '-',
            other => other,
        };
        if c == '-' && cleaned.ends_with('-') {
            continue;
        }
        cleaned.push(c);
    }
    let mut cleaned = cleaned.trim_matches('-').to_string();

    // Drop release-date suffixes: "claude-3-5-sonnet-20241022"
    if let Some(pos) = cleaned.rfind('-')
        && is_date_suffix(&cleaned[pos + 1..])
    {
        cleaned.truncate(pos);
    }

    for (from, to) in SYNONYMS {
        if cleaned == *from {
            return (*to).to_string();
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_pass_through() {
        assert_eq!(normalize("claude-3-5-sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("gpt-4o"), "gpt-4o");
        assert_eq!(normalize("gemini-2-5-flash"), "gemini-2-5-flash");
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Claude-3-5-Sonnet  "), "claude-3-5-sonnet");
        assert_eq!(normalize("GPT-4O"), "gpt-4o");
    }

    #[test]
    fn strips_provider_prefixes() {
        assert_eq!(normalize("anthropic/claude-3-5-sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("anthropic.claude-3-5-sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("openai/gpt-4o"), "gpt-4o");
        assert_eq!(normalize("models/gemini-2-5-flash"), "gemini-2-5-flash");
    }

    #[test]
    fn maps_punctuation_variants() {
        assert_eq!(normalize("claude-3.5-sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("claude_3_5_sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("gemini 2.5 flash"), "gemini-2-5-flash");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(normalize("claude--3--5--sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("-gpt-4o-"), "gpt-4o");
    }

    #[test]
    fn strips_date_suffix() {
        assert_eq!(normalize("claude-3-5-sonnet-20241022"), "claude-3-5-sonnet");
        assert_eq!(normalize("gpt-4o-20240806"), "gpt-4o");
        // Seven digits is not a date suffix
        assert_eq!(normalize("model-2024102"), "model-2024102");
    }

    #[test]
    fn applies_synonyms() {
        assert_eq!(normalize("gpt4o"), "gpt-4o");
        assert_eq!(normalize("GPT4o"), "gpt-4o");
        assert_eq!(normalize("claude-35-sonnet"), "claude-3-5-sonnet");
        assert_eq!(normalize("gpt-4.1"), "gpt-4-1");
        assert_eq!(normalize("gemini-2.5-flash"), "gemini-2-5-flash");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["anthropic/Claude-3.5-Sonnet-20241022", "gpt4o", "  o3-mini  "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
