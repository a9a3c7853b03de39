use serde::{Deserialize, Serialize};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const TRANSLATION_MODEL: &str = "gemini-2.5-flash";
pub const TRANSLATION_TEMPERATURE: f64 = 0.2;
pub const TRANSLATION_THINKING_BUDGET: u32 = 0;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: Option<f64>,
    pub thinking_budget: Option<u32>,
}

impl LLMConfig {
    /// Low temperature, no thinking: translations favour latency over elaboration.
    pub fn for_translation(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: TRANSLATION_MODEL.to_string(),
            api_key: Some(api_key.to_string()),
            temperature: Some(TRANSLATION_TEMPERATURE),
            thinking_budget: Some(TRANSLATION_THINKING_BUDGET),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: GEMINI_BASE_URL.to_string(),
            model: TRANSLATION_MODEL.to_string(),
            api_key: None,
            temperature: Some(TRANSLATION_TEMPERATURE),
            thinking_budget: Some(TRANSLATION_THINKING_BUDGET),
        }
    }
}
