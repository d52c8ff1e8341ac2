pub mod api;
pub mod prompts;
pub mod provider;

pub use provider::{LlmError, LlmProvider};
