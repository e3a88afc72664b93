//! Mock inference engine for testing without AWS.
//!
//! Returns a scripted reply and records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::InferenceEngine;
use crate::error::{InferenceError, InferenceResult};
use crate::prompt::PromptRequest;

/// Mock implementation of the `InferenceEngine` trait.
pub struct MockEngine {
    reply: InferenceResult<String>,
    requests: Mutex<Vec<PromptRequest>>,
}

impl MockEngine {
    /// Engine that always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Engine that always fails with `error`.
    pub fn failing(error: InferenceError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Engine that always times out.
    pub fn timing_out(timeout_secs: u64) -> Self {
        Self::failing(InferenceError::Timeout { timeout_secs })
    }

    /// All requests submitted so far.
    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests submitted.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceEngine for MockEngine {
    async fn submit(&self, request: &PromptRequest) -> InferenceResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }

    fn engine_name(&self) -> &str {
        "mock"
    }
}
