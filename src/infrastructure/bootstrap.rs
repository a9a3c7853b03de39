use std::sync::Arc;

use tracing::info;

use crate::application::{SessionRegistry, TranslateUseCase};
use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::interfaces::state::AppState;

/// Composition root: wires the remote client, the translate use case and the
/// per-tab session registry into one [`AppState`].
pub fn setup(config: &AppConfig) -> Result<Arc<AppState>> {
    let llm_config = config.llm_config()?;
    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new());

    info!(
        model = %llm_config.model,
        base_url = %llm_config.base_url,
        "Translation client ready"
    );

    Ok(Arc::new(AppState {
        translate_use_case: TranslateUseCase::new(llm_client, llm_config),
        sessions: SessionRegistry::new(),
    }))
}
