use std::env;

use serde::Deserialize;
use thiserror::Error;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. The completion provider API key is required to start.")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS. Fixed local-dev allow-list by
    /// default, overridable as a comma-separated env var.
    pub allowed_origins: Vec<String>,
}

/// Configuration for the chat completion model.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// `provider/model` string, e.g. `gemini/gemini-2.5-flash`.
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub temperature: f32,
}

const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://localhost:3000",
];

impl Config {
    /// Build configuration from the environment. Fails when `LLM_API_KEY`
    /// is absent; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("LLM_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey("LLM_API_KEY"))?;

        Ok(Self {
            server: ServerConfig {
                host: env::var("AROGYA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("AROGYA_PORT", 8000),
                allowed_origins: env::var("AROGYA_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|origin| origin.trim().to_string())
                            .filter(|origin| !origin.is_empty())
                            .collect()
                    })
                    .unwrap_or_else(|_| {
                        DEFAULT_ALLOWED_ORIGINS
                            .iter()
                            .map(|origin| origin.to_string())
                            .collect()
                    }),
            },
            llm: LlmConfig {
                model: env::var("LLM_MODEL")
                    .unwrap_or_else(|_| "gemini/gemini-2.5-flash".to_string()),
                api_key,
                base_url: env::var("LLM_BASE_URL").ok(),
                timeout_secs: parse_env_or("LLM_TIMEOUT", 30),
                temperature: parse_env_or("LLM_TEMPERATURE", 0.3),
            },
        })
    }
}

/// Known LLM providers that expose OpenAI-compatible chat APIs.
pub const KNOWN_LLM_PROVIDERS: &[&str] = &["gemini", "openai", "openrouter", "ollama", "lmstudio"];

/// Parse an LLM model name into a (provider, model) tuple.
///
/// `gemini/gemini-2.5-flash` splits into `("gemini", "gemini-2.5-flash")`.
/// Unprefixed names default to the `gemini` provider.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    ("gemini", model)
}
