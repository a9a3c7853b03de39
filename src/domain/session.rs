use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageOption;
use crate::domain::translation::TranslationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationPhase {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// Everything one browser tab sees. Only the session controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub translated_text: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> TranslationPhase {
        if self.is_loading {
            TranslationPhase::Requesting
        } else if self.error.is_some() {
            TranslationPhase::Failed
        } else if self.translated_text.is_some() {
            TranslationPhase::Succeeded
        } else {
            TranslationPhase::Idle
        }
    }

    /// True exactly when a translate request would be issued.
    pub fn can_translate(&self) -> bool {
        !self.is_loading
            && TranslationRequest::new(
                &self.source_text,
                &self.source_language,
                &self.target_language,
            )
            .is_ok()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            source_language: LanguageOption::default_source().identifier.to_string(),
            target_language: LanguageOption::default_target().identifier.to_string(),
            source_text: String::new(),
            translated_text: None,
            is_loading: false,
            error: None,
        }
    }
}
