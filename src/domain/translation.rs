use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::error::{AppError, Result};
use crate::domain::language::LanguageOption;

/// Upper bound on source text, counted in chars.
pub const MAX_SOURCE_CHARS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TranslationRequest {
    #[validate(
        length(min = 1, max = 1_000_000),
        custom(function = "not_blank")
    )]
    pub text: String,
    #[validate(custom(function = "supported_language"))]
    pub source_language: String,
    #[validate(custom(function = "supported_language"))]
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Result<Self> {
        let request = Self {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        };

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(request)
    }
}

fn not_blank(text: &str) -> std::result::Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn supported_language(identifier: &str) -> std::result::Result<(), ValidationError> {
    if !LanguageOption::is_supported(identifier) {
        return Err(ValidationError::new("unsupported_language"));
    }
    Ok(())
}

/// Cuts `text` down to at most [`MAX_SOURCE_CHARS`] chars.
pub fn clamp_source_text(text: &str) -> String {
    match text.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
