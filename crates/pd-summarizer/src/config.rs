//! Summarizer configuration, loadable from TOML and environment.
//!
//! Defaults reproduce the fixed inference parameters. The library never
//! reads the environment itself; the binary loads a `SummarizerConfig`
//! once and passes it down explicitly.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "PLAN_DIGEST_CONFIG";

/// Inference and exit-code settings for one invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummarizerConfig {
    /// Bedrock model ID.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    /// Optional deadline for the Converse call. `None` leaves the SDK defaults alone.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Exit non-zero when the fallback summary was written.
    #[serde(default)]
    pub fail_on_fallback: bool,
}

fn default_model_id() -> String {
    "amazon.nova-lite-v1:0".into()
}
fn default_temperature() -> f32 {
    0.3
}
fn default_max_tokens() -> i32 {
    500
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: None,
            fail_on_fallback: false,
        }
    }
}

impl SummarizerConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate().map_err(|message| ConfigError::Parse {
            path: path.to_string(),
            message,
        })?;
        Ok(config)
    }

    /// Reject values the env overrides would ignore: a zero deadline fails every call.
    fn validate(&self) -> Result<(), String> {
        if self.model_id.trim().is_empty() {
            return Err("model_id must not be empty".into());
        }
        if self.max_tokens <= 0 {
            return Err(format!("max_tokens must be positive, got {}", self.max_tokens));
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be positive; omit it to use SDK defaults".into());
        }
        Ok(())
    }

    /// Full load: TOML file named by `PLAN_DIGEST_CONFIG` (if set), then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(model_id) = lookup("BEDROCK_MODEL_ID").filter(|s| !s.trim().is_empty()) {
            self.model_id = model_id.trim().to_string();
        }
        if let Some(temperature) =
            lookup("BEDROCK_TEMPERATURE").and_then(|s| s.trim().parse::<f32>().ok())
        {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = lookup("BEDROCK_MAX_TOKENS")
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|n| *n > 0)
        {
            self.max_tokens = max_tokens;
        }
        if let Some(secs) = lookup("BEDROCK_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
        {
            self.timeout_secs = Some(secs);
        }
        if let Some(flag) = lookup("PLAN_DIGEST_FAIL_ON_FALLBACK") {
            self.fail_on_fallback = flag.eq_ignore_ascii_case("true") || flag == "1";
        }
        self
    }

    /// Converse deadline, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
