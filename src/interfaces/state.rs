use crate::application::{SessionRegistry, TranslateUseCase};

pub struct AppState {
    pub translate_use_case: TranslateUseCase,
    /// One state controller per open tab
    pub sessions: SessionRegistry,
}
