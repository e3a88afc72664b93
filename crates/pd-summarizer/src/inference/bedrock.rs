//! AWS Bedrock inference engine using the Converse API.
//!
//! Sends one user-role message with fixed inference parameters and returns
//! the first content block of the reply. The Converse API is model-agnostic,
//! so the model ID is the only thing that changes between Nova, Claude, etc.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ConverseOutput, InferenceConfiguration, Message,
};
use tokio::time::timeout;

use super::InferenceEngine;
use crate::config::SummarizerConfig;
use crate::error::{InferenceError, InferenceResult};
use crate::prompt::PromptRequest;

/// Bedrock Converse API inference engine.
pub struct BedrockEngine {
    client: BedrockClient,
    timeout: Option<Duration>,
}

impl BedrockEngine {
    /// Create a new engine with a pre-built Bedrock client.
    pub fn new(client: BedrockClient, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    /// Build a client for `region`. Credentials come from the standard AWS provider chain.
    pub async fn connect(region: &str, config: &SummarizerConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        tracing::debug!(region, model_id = %config.model_id, "bedrock client configured");
        Self::new(BedrockClient::new(&sdk_config), config.timeout())
    }

    /// Call the Converse API and pull out the generated text.
    async fn call_converse(&self, request: &PromptRequest) -> InferenceResult<String> {
        let user_message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt.clone()))
            .build()
            .map_err(|e| InferenceError::Request(format!("failed to build message: {e}")))?;

        let inference_config = InferenceConfiguration::builder()
            .temperature(request.params.temperature)
            .max_tokens(request.params.max_tokens)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&request.params.model_id)
            .messages(user_message)
            .inference_config(inference_config)
            .send()
            .await
            .map_err(|e| {
                InferenceError::Request(format!("bedrock converse error: {}", DisplayErrorContext(&e)))
            })?;

        let output = response
            .output()
            .ok_or_else(|| InferenceError::MalformedResponse("no output in converse response".into()))?;

        first_text(output)
    }
}

#[async_trait]
impl InferenceEngine for BedrockEngine {
    async fn submit(&self, request: &PromptRequest) -> InferenceResult<String> {
        let Some(limit) = self.timeout else {
            return self.call_converse(request).await;
        };

        match timeout(limit, self.call_converse(request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_secs = limit.as_secs(), "bedrock converse timed out");
                Err(InferenceError::Timeout {
                    timeout_secs: limit.as_secs(),
                })
            }
        }
    }

    fn engine_name(&self) -> &str {
        "bedrock"
    }
}

/// The first content block of the output message, which must be text.
fn first_text(output: &ConverseOutput) -> InferenceResult<String> {
    let ConverseOutput::Message(msg) = output else {
        return Err(InferenceError::MalformedResponse(
            "converse output is not a message".into(),
        ));
    };

    match msg.content().first() {
        Some(ContentBlock::Text(text)) => Ok(text.clone()),
        Some(_) => Err(InferenceError::MalformedResponse(
            "first content block is not text".into(),
        )),
        None => Err(InferenceError::EmptyResponse),
    }
}
