use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown to the user whenever the remote translation call fails.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Failed to get a response from the translation service. Please try again later.";

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    NotFound(String),
    ValidationError(String),
    ConfigurationError(String),
    ServiceError(String),
    LLMError(String),
    IoError(String),
}

impl AppError {
    /// Text that is safe to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ServiceError(msg) => msg.clone(),
            _ => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ServiceError(msg) => write!(f, "Service error: {}", msg),
            AppError::LLMError(msg) => write!(f, "LLM error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
