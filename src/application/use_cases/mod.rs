pub mod prompt_engine;
pub mod translate;
