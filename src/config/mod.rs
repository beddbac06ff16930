//! Configuration handling for the application.
//!
//! Everything is read once at process start by [`Config::from_env`] and then
//! passed by value (or behind an `Arc`) into the components that need it. No
//! component reads the environment on its own.

use std::env;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

use thiserror::Error;

/// Environment variable names. Public so binaries and tests can refer to them.
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_LLM_ENDPOINT: &str = "LLM_ENDPOINT";
pub const ENV_LLM_MODEL: &str = "LLM_MODEL";
pub const ENV_LLM_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-70b-versatile";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Application runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    llm_endpoint: String,
    llm_model: String,
    llm_timeout: Duration,
    bind_addr: String,
}

impl Config {
    /// Create a config explicitly with defaults for everything but the key
    /// and endpoint. Mostly useful for pointing the client at a fake server.
    pub fn new(api_key: impl Into<String>, llm_endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            llm_endpoint: llm_endpoint.into(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    /// Load from environment variables.
    ///
    /// `API_KEY` is required; a missing or blank key fails here so that no
    /// request is ever sent without credentials.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let llm_endpoint =
            env::var(ENV_LLM_ENDPOINT).unwrap_or_else(|_| DEFAULT_LLM_ENDPOINT.to_string());
        url::Url::parse(&llm_endpoint).map_err(|e| ConfigError::InvalidValue {
            field: ENV_LLM_ENDPOINT,
            reason: e.to_string(),
        })?;

        let llm_model = env::var(ENV_LLM_MODEL).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());

        let llm_timeout = match env::var(ENV_LLM_TIMEOUT_SECS) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LLM_TIMEOUT_SECS,
                        reason: format!("expected a positive number of seconds, got '{raw}'"),
                    });
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        };

        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_key,
            llm_endpoint,
            llm_model,
            llm_timeout,
            bind_addr,
        })
    }

    /// Bearer credential for the chat-completion endpoint.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    /// Full URL of the chat-completion endpoint.
    pub fn llm_endpoint(&self) -> &str {
        &self.llm_endpoint
    }
    pub fn llm_model(&self) -> &str {
        &self.llm_model
    }
    pub fn llm_timeout(&self) -> Duration {
        self.llm_timeout
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

// The key must never end up in logs, so Debug is written by hand.
impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("llm_endpoint", &self.llm_endpoint)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout", &self.llm_timeout)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    Missing(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
