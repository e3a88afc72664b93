//! Prompt construction for plan summaries.

use crate::config::SummarizerConfig;

/// Instructional preamble placed ahead of the raw plan text.
pub const PREAMBLE: &str = "Please analyze this Terraform plan and provide a concise summary of the infrastructure changes. Focus on:

1. Resources being created, modified, or destroyed
2. Key configuration changes
3. Potential impact on the infrastructure
4. Any security or cost implications

Keep the summary clear and non-technical for approval reviewers. Use only standard ASCII characters, avoid emojis.

Terraform Plan:
";

/// Fixed inference parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceParams {
    /// Bedrock model ID.
    pub model_id: String,
    pub temperature: f32,
    pub max_tokens: i32,
}

impl From<&SummarizerConfig> for InferenceParams {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            model_id: config.model_id.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self::from(&SummarizerConfig::default())
    }
}

/// A single user-role prompt plus the parameters it is sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub prompt: String,
    pub params: InferenceParams,
}

impl PromptRequest {
    /// Embed the plan verbatim after the preamble.
    pub fn new(plan: &str, params: InferenceParams) -> Self {
        Self {
            prompt: build_prompt(plan),
            params,
        }
    }
}

/// Concatenate the preamble with the untouched plan text.
pub fn build_prompt(plan: &str) -> String {
    let mut prompt = String::with_capacity(PREAMBLE.len() + plan.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str(plan);
    prompt
}
