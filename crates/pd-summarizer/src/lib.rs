//! Plan Digest: plain-language summaries of Terraform plans.
//!
//! Reads a plan file, sends it to AWS Bedrock (Converse API) with a fixed
//! prompt, and writes the ASCII-filtered summary, or a fixed fallback
//! sentence when inference fails, to an output file.
//!
//! Re-exports all modules so the binary (`main.rs`) and `pd-e2e-tests`
//! share the same types.

pub mod cli;
pub mod config;
pub mod error;
pub mod inference;
pub mod prompt;
pub mod sanitize;
pub mod summary;

pub use config::SummarizerConfig;
pub use error::{ConfigError, InferenceError, InferenceResult, SummaryError, SummaryResult};
pub use inference::{BedrockEngine, InferenceEngine, MockEngine};
pub use prompt::{InferenceParams, PromptRequest};
pub use summary::{FALLBACK_SUMMARY, SummaryOutcome, generate_summary, read_plan, summarize_plan};
