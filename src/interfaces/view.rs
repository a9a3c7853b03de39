use serde::Serialize;

use crate::domain::language::{LanguageOption, LANGUAGES};
use crate::domain::session::{SessionState, TranslationPhase};
use crate::domain::translation::MAX_SOURCE_CHARS;

pub const TRANSLATE_LABEL: &str = "وەرگێران";
pub const TRANSLATING_LABEL: &str = "...چاوەرێ بە";

/// What the output pane shows. Loading wins over error, error over text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputPane {
    Loading,
    Error(String),
    Translated(String),
    Placeholder,
}

impl OutputPane {
    pub fn from_state(state: &SessionState) -> Self {
        if state.is_loading {
            return OutputPane::Loading;
        }
        if let Some(error) = &state.error {
            return OutputPane::Error(error.clone());
        }
        match &state.translated_text {
            Some(text) if !text.is_empty() => OutputPane::Translated(text.clone()),
            _ => OutputPane::Placeholder,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub languages: &'static [LanguageOption],
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub char_count: usize,
    pub max_chars: usize,
    pub output: OutputPane,
    pub is_loading: bool,
    pub translate_enabled: bool,
    pub translate_label: &'static str,
    pub phase: TranslationPhase,
}

impl SessionView {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            languages: &LANGUAGES,
            source_language: state.source_language.clone(),
            target_language: state.target_language.clone(),
            source_text: state.source_text.clone(),
            char_count: state.source_text.chars().count(),
            max_chars: MAX_SOURCE_CHARS,
            output: OutputPane::from_state(state),
            is_loading: state.is_loading,
            translate_enabled: state.can_translate(),
            translate_label: if state.is_loading {
                TRANSLATING_LABEL
            } else {
                TRANSLATE_LABEL
            },
            phase: state.phase(),
        }
    }
}
