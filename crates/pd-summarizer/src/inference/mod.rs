//! Inference boundary for plan summaries.
//!
//! One request, one response. `BedrockEngine` talks to the Converse API;
//! `MockEngine` stands in for it in tests.

pub mod bedrock;
pub mod mock;

use async_trait::async_trait;

use crate::error::InferenceResult;
use crate::prompt::PromptRequest;

/// Trait for engines that turn a prompt into generated text.
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Submit the prompt and return the first text segment of the reply, unfiltered.
    async fn submit(&self, request: &PromptRequest) -> InferenceResult<String>;

    /// Name of this engine (for logging).
    fn engine_name(&self) -> &str;
}

pub use bedrock::BedrockEngine;
pub use mock::MockEngine;
