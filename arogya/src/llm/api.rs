//! OpenAI-compatible chat-completions transport.
//!
//! Gemini, OpenAI, OpenRouter, Ollama, and LM Studio all speak the same
//! chat-completions dialect, so one `async-openai` client covers them; the
//! provider prefix in the model name selects the base URL. Provider
//! failures are classified here, from the structured error object, into
//! [`LlmError`] variants.

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::{ApiError, OpenAIError},
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::llm::provider::LlmError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
const LMSTUDIO_BASE_URL: &str = "http://localhost:1234/v1";

#[derive(Clone)]
pub struct LlmApiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl LlmApiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let (provider, model) = parse_llm_provider_model(&config.model);

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url(provider).to_string());

        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(config.api_key.clone());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| {
                LlmError::Provider(format!("Failed to create LLM HTTP client: {error}"))
            })?;

        // async-openai retries transient errors with exponential backoff by
        // default. This service reports every provider failure once, so the
        // retry window is closed entirely.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(backoff);

        Ok(Self {
            client,
            model: model.to_string(),
            temperature: config.temperature,
        })
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = self.build_request(prompt)?;

        match self.client.chat().create(request).await {
            Ok(response) => Self::extract_content(response),
            Err(error) => Err(Self::classify_error(error)),
        }
    }

    fn build_request(&self, prompt: &str) -> Result<CreateChatCompletionRequest, LlmError> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|error| LlmError::Provider(format!("Invalid user prompt: {error}")))?
            .into()];

        CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .temperature(self.temperature)
            .messages(messages)
            .build()
            .map_err(|error| LlmError::Provider(format!("Invalid completion request: {error}")))
    }

    fn extract_content(response: CreateChatCompletionResponse) -> Result<String, LlmError> {
        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Provider("LLM response contained no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        if message.trim().is_empty() {
            return Err(LlmError::Provider(
                "LLM response contained empty content".to_string(),
            ));
        }

        Ok(message)
    }

    fn classify_error(error: OpenAIError) -> LlmError {
        match error {
            OpenAIError::Reqwest(reqwest_error)
                if reqwest_error.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) =>
            {
                LlmError::QuotaExceeded
            }
            OpenAIError::ApiError(api_error) if Self::is_quota_api_error(&api_error) => {
                LlmError::QuotaExceeded
            }
            OpenAIError::Reqwest(reqwest_error) => {
                LlmError::Provider(format!("LLM request failed: {reqwest_error}"))
            }
            OpenAIError::ApiError(api_error) => {
                LlmError::Provider(format!("LLM API error: {api_error}"))
            }
            OpenAIError::JSONDeserialize(err) => {
                LlmError::Provider(format!("Failed to parse LLM response: {err}"))
            }
            other => LlmError::Provider(other.to_string()),
        }
    }

    fn is_quota_api_error(api_error: &ApiError) -> bool {
        let error_type = api_error.r#type.clone().unwrap_or_default().to_lowercase();
        let code = api_error.code.clone().unwrap_or_default().to_lowercase();

        error_type.contains("rate_limit")
            || code.contains("rate_limit")
            || code == "insufficient_quota"
            || code == "resource_exhausted"
    }
}

fn default_base_url(provider: &str) -> &'static str {
    match provider.to_lowercase().as_str() {
        "gemini" => GEMINI_BASE_URL,
        "openai" => OPENAI_BASE_URL,
        "openrouter" => OPENROUTER_BASE_URL,
        "ollama" => OLLAMA_BASE_URL,
        "lmstudio" => LMSTUDIO_BASE_URL,
        _ => GEMINI_BASE_URL,
    }
}
