pub mod gemini_provider;
pub mod prompts;
pub mod types;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use types::*;
