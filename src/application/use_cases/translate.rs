use crate::application::use_cases::prompt_engine::PromptEngine;
use crate::domain::error::{AppError, Result, SERVICE_UNAVAILABLE_MESSAGE};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;
use std::sync::Arc;
use tracing::{error, info};

pub struct TranslateUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl TranslateUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    /// Translate `content`. Blank input short-circuits to an empty result
    /// without touching the network. Every remote failure collapses into one
    /// `ServiceError`; the cause only goes to the log.
    pub async fn execute(&self, content: &str, source: &str, target: &str) -> Result<String> {
        if content.trim().is_empty() {
            return Ok(String::new());
        }

        let prompt = PromptEngine::build_translation_prompt(content, source, target);

        info!(
            source = %source,
            target = %target,
            chars = content.chars().count(),
            model = %self.config.model,
            "Translating"
        );

        match self.llm_client.generate(&self.config, &prompt).await {
            Ok(raw) => Ok(raw.trim().to_string()),
            Err(err) => {
                error!(error = %err, source = %source, target = %target, "Translation request failed");
                Err(AppError::ServiceError(SERVICE_UNAVAILABLE_MESSAGE.to_string()))
            }
        }
    }
}
