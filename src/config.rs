//! Runtime configuration read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable to override the model id.
pub const MODEL_ENV_VAR: &str = "AI_COMMITS_MODEL";

/// Environment variable to override the API base URL.
pub const API_BASE_ENV_VAR: &str = "AI_COMMITS_API_BASE";

/// Environment variable to override the diff character budget.
pub const MAX_DIFF_ENV_VAR: &str = "AI_COMMITS_MAX_DIFF";

/// Environment variable to override the HTTP timeout (seconds).
pub const TIMEOUT_ENV_VAR: &str = "AI_COMMITS_TIMEOUT";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Maximum number of diff characters sent to the model.
pub const DEFAULT_MAX_DIFF_CHARS: usize = 10_000;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub max_diff_chars: usize,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Only the API key is required. Numeric overrides that fail to parse, or
    /// that are zero, are logged and replaced by their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let model = non_empty_var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base =
            non_empty_var(API_BASE_ENV_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key,
            model,
            api_base,
            max_diff_chars: parse_positive_var(MAX_DIFF_ENV_VAR, DEFAULT_MAX_DIFF_CHARS),
            timeout: Duration::from_secs(parse_positive_var(TIMEOUT_ENV_VAR, DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Replace the model id, e.g. from a `--model` flag.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a positive integer environment variable, warning and falling back
/// on bad input. Zero is rejected.
fn parse_positive_var<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy + PartialOrd + Default,
{
    match env::var(name) {
        Ok(v) if !v.is_empty() => match v.trim().parse::<T>() {
            Ok(parsed) if parsed > T::default() => parsed,
            _ => {
                warn!("Invalid {} value '{}', using default {}", name, v, default);
                default
            }
        },
        _ => default,
    }
}
