//! State controller for one translator session.
//!
//! All user events go through [`SessionController`]. A translation is split in
//! two synchronous halves, [`SessionController::begin_translate`] and
//! [`SessionController::complete_translate`], so the remote call can run with
//! no lock held. Every begun request gets a sequence number and only the
//! latest one may write its outcome back.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::application::use_cases::translate::TranslateUseCase;
use crate::domain::error::{AppError, Result};
use crate::domain::language::LanguageOption;
use crate::domain::session::{SessionState, TranslationPhase};
use crate::domain::translation::{clamp_source_text, TranslationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub sequence: u64,
    pub request: TranslationRequest,
}

#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
    issued: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> TranslationPhase {
        self.state.phase()
    }

    pub fn set_source_language(&mut self, identifier: &str) -> Result<()> {
        Self::ensure_supported(identifier)?;
        self.state.source_language = identifier.to_string();
        Ok(())
    }

    pub fn set_target_language(&mut self, identifier: &str) -> Result<()> {
        Self::ensure_supported(identifier)?;
        self.state.target_language = identifier.to_string();
        Ok(())
    }

    /// Exchange both the language pair and the texts, so the previous result
    /// becomes the next input. The new input obeys the same length bound as
    /// an edit.
    pub fn swap_languages(&mut self) {
        let state = &mut self.state;
        std::mem::swap(&mut state.source_language, &mut state.target_language);

        let previous_source = std::mem::take(&mut state.source_text);
        let previous_result = state.translated_text.take().unwrap_or_default();
        state.source_text = clamp_source_text(&previous_result);
        if !previous_source.is_empty() {
            state.translated_text = Some(previous_source);
        }
    }

    /// Any edit invalidates the shown result and error.
    pub fn update_source_text(&mut self, text: &str) {
        self.state.source_text = clamp_source_text(text);
        self.state.translated_text = None;
        self.state.error = None;
    }

    /// Enter `Requesting`. Returns `None` when there is nothing to do: blank
    /// input, or a request already in flight.
    pub fn begin_translate(&mut self) -> Option<PendingTranslation> {
        if self.state.is_loading {
            debug!(sequence = self.issued, "Translation already in flight, ignoring");
            return None;
        }

        let request = match TranslationRequest::new(
            &self.state.source_text,
            &self.state.source_language,
            &self.state.target_language,
        ) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Nothing to translate");
                return None;
            }
        };

        self.issued += 1;
        self.state.is_loading = true;
        self.state.error = None;
        self.state.translated_text = None;

        Some(PendingTranslation {
            sequence: self.issued,
            request,
        })
    }

    /// Apply the outcome of request `sequence`. Outcomes of anything but the
    /// latest issued request are dropped; returns whether it was applied.
    pub fn complete_translate(&mut self, sequence: u64, outcome: Result<String>) -> bool {
        if sequence != self.issued {
            warn!(
                sequence,
                latest = self.issued,
                "Discarding stale translation response"
            );
            return false;
        }

        self.state.is_loading = false;
        match outcome {
            Ok(text) => {
                self.state.error = None;
                self.state.translated_text = Some(text).filter(|t| !t.is_empty());
            }
            Err(err) => {
                self.state.translated_text = None;
                self.state.error = Some(err.user_message());
            }
        }
        true
    }

    fn ensure_supported(identifier: &str) -> Result<()> {
        if LanguageOption::is_supported(identifier) {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "Unsupported language: {}",
                identifier
            )))
        }
    }
}

/// Cheaply clonable handle used by the HTTP layer.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionController>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, SessionController> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().state().clone()
    }

    /// Run one full translation attempt. Re-entrant calls while a request is
    /// in flight return the current state without a second remote call.
    pub async fn request_translate(&self, translator: &TranslateUseCase) -> SessionState {
        let pending = self.lock().begin_translate();
        let Some(pending) = pending else {
            return self.snapshot();
        };

        let request = &pending.request;
        let outcome = translator
            .execute(
                &request.text,
                &request.source_language,
                &request.target_language,
            )
            .await;

        let mut controller = self.lock();
        controller.complete_translate(pending.sequence, outcome);
        controller.state().clone()
    }
}
