//! Error types for the summarizer.
//!
//! Split along the two failure tiers: `SummaryError` is fatal and reaches the
//! process boundary, `InferenceError` is always recovered into the fallback.

use thiserror::Error;

/// Fatal errors. No summary or fallback is guaranteed on disk.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read plan file {path}: {message}")]
    PlanRead { path: String, message: String },

    #[error("failed to write output file {path}: {message}")]
    OutputWrite { path: String, message: String },
}

/// Errors from the inference boundary. Recovered by writing the fallback.
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Request(String),

    #[error("inference timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("malformed inference response: {0}")]
    MalformedResponse(String),

    #[error("inference response contained no content")]
    EmptyResponse,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Convenience alias for summarizer results.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Convenience alias for inference results.
pub type InferenceResult<T> = Result<T, InferenceError>;
