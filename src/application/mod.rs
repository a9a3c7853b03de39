pub mod session_controller;
pub mod session_registry;
pub mod use_cases;

pub use session_controller::{SessionController, SharedSession};
pub use session_registry::SessionRegistry;
pub use use_cases::translate::TranslateUseCase;
