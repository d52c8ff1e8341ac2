//! Completion provider facade.
//!
//! Wraps the OpenAI-compatible API client and exposes the one operation the
//! assembler needs. Failures are modelled explicitly so callers match on
//! variants instead of inspecting error text.

use thiserror::Error;

use crate::config::LlmConfig;
use crate::llm::api::LlmApiClient;

/// Outcome of a failed completion call.
///
/// `QuotaExceeded` covers rate/quota exhaustion reported by the provider;
/// everything else is `Provider` with the upstream message. Classification
/// happens once, in the API client, from the provider's structured error
/// fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("completion provider quota exhausted")]
    QuotaExceeded,

    #[error("completion provider error: {0}")]
    Provider(String),
}

#[derive(Clone)]
pub struct LlmProvider {
    client: LlmApiClient,
}

impl LlmProvider {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: LlmApiClient::new(config)?,
        })
    }

    /// Send one prompt and return the completion text. Single attempt, no
    /// retries; every failure is reported once.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.client.complete(prompt).await
    }
}
