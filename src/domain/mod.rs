pub mod error;
pub mod language;
pub mod llm_config;
pub mod session;
pub mod translation;
