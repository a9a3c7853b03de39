pub mod gemini;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use gemini::GeminiClient;

#[async_trait]
pub trait LLMClient {
    /// One-shot, stateless text generation for a single prompt.
    async fn generate(&self, config: &LLMConfig, prompt: &str) -> Result<String>;
}
