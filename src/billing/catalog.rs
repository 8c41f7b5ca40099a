//! Built-in model catalog
//!
//! Static registry mapping canonical model keys to Cubent Units pricing
//! metadata. The catalog is immutable and injected: callers hold a
//! `ModelCatalog` over a slice, so tests can substitute a fixed table.

/// Vendor tag, informational only. Never used in unit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Provider {
    Anthropic,
    OpenAi,
    Google,
    DeepSeek,
    Mistral,
}

impl Provider {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAi => "openai",
            Provider::Google => "google",
            Provider::DeepSeek => "deepseek",
            Provider::Mistral => "mistral",
        }
    }
}

/// Per-model pricing metadata.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModelPricing {
    /// Canonical key: lowercase, hyphen-delimited, exact-match only.
    pub(crate) id: &'static str,
    pub(crate) display_name: &'static str,
    /// Base charge in Cubent Units for one completed request.
    pub(crate) units_per_request: f64,
    pub(crate) provider: Provider,
    pub(crate) supports_images: bool,
    pub(crate) is_thinking: bool,
}

const fn model(
    id: &'static str,
    display_name: &'static str,
    units_per_request: f64,
    provider: Provider,
    supports_images: bool,
    is_thinking: bool,
) -> ModelPricing {
    ModelPricing {
        id,
        display_name,
        units_per_request,
        provider,
        supports_images,
        is_thinking,
    }
}

/// The compiled-in pricing table. Declaration order is the display order.
const BUILTIN_MODELS: &[ModelPricing] = &[
    model("claude-3-7-sonnet", "Claude 3.7 Sonnet", 1.0, Provider::Anthropic, true, false),
    model("claude-3-7-sonnet-thinking", "Claude 3.7 Sonnet (Thinking)", 1.25, Provider::Anthropic, true, true),
    model("claude-3-5-sonnet", "Claude 3.5 Sonnet", 0.95, Provider::Anthropic, true, false),
    model("claude-3-5-haiku", "Claude 3.5 Haiku", 0.35, Provider::Anthropic, false, false),
    model("claude-3-opus", "Claude 3 Opus", 1.8, Provider::Anthropic, true, false),
    model("claude-3-haiku", "Claude 3 Haiku", 0.25, Provider::Anthropic, false, false),
    model("gpt-4o", "GPT-4o", 1.1, Provider::OpenAi, true, false),
    model("gpt-4o-mini", "GPT-4o Mini", 0.2, Provider::OpenAi, true, false),
    model("gpt-4-1", "GPT-4.1", 1.0, Provider::OpenAi, true, false),
    model("gpt-4-1-mini", "GPT-4.1 Mini", 0.25, Provider::OpenAi, true, false),
    model("o1", "OpenAI o1", 2.5, Provider::OpenAi, false, true),
    model("o3-mini", "OpenAI o3-mini", 0.9, Provider::OpenAi, false, true),
    model("gemini-2-5-pro", "Gemini 2.5 Pro", 1.0, Provider::Google, true, false),
    model("gemini-2-5-flash", "Gemini 2.5 Flash", 0.3, Provider::Google, true, false),
    model("gemini-2-5-flash-thinking", "Gemini 2.5 Flash (Thinking)", 0.45, Provider::Google, true, true),
    model("gemini-2-0-flash", "Gemini 2.0 Flash", 0.25, Provider::Google, true, false),
    model("deepseek-chat", "DeepSeek Chat", 0.15, Provider::DeepSeek, false, false),
    model("deepseek-r1", "DeepSeek R1", 0.4, Provider::DeepSeek, false, true),
    model("mistral-large", "Mistral Large", 0.7, Provider::Mistral, false, false),
    model("codestral", "Codestral", 0.3, Provider::Mistral, false, false),
];

/// Read-only view over a pricing table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModelCatalog {
    models: &'static [ModelPricing],
}

impl ModelCatalog {
    pub(crate) const fn new(models: &'static [ModelPricing]) -> Self {
        Self { models }
    }

    pub(crate) const fn builtin() -> Self {
        Self::new(BUILTIN_MODELS)
    }

    /// Exact-match lookup on the canonical key. Unknown keys return `None`.
    pub(crate) fn lookup(&self, id: &str) -> Option<&ModelPricing> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Models in declaration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &ModelPricing> {
        self.models.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.models.len()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
