use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{LLMConfig, GEMINI_BASE_URL};

pub const CONFIG_FILE: &str = "werger.toml";
pub const ENV_PREFIX: &str = "WERGER_";
pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            gemini_base_url: GEMINI_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Defaults, then `werger.toml`, then `WERGER_*`, then the raw `API_KEY`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&[API_KEY_VAR]))
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    /// Extract and check the config. A missing credential is fatal.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigurationError(e.to_string()))?;

        if config.api_key().is_none() {
            return Err(AppError::ConfigurationError(format!(
                "{} environment variable not set",
                API_KEY_VAR
            )));
        }

        Ok(config)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn llm_config(&self) -> Result<LLMConfig> {
        let api_key = self.api_key().ok_or_else(|| {
            AppError::ConfigurationError(format!("{} environment variable not set", API_KEY_VAR))
        })?;
        Ok(LLMConfig::for_translation(&self.gemini_base_url, api_key))
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
