//! Shared harness for end-to-end tests.
//!
//! Owns a scratch directory with a plan file and builds engines (mock or
//! real Bedrock client against a local `MockServer`).

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
use serde_json::json;
use tempfile::TempDir;
use wiremock::MockServer;

use pd_summarizer::{
    BedrockEngine, InferenceEngine, InferenceParams, SummaryOutcome, SummaryResult,
    generate_summary,
};

/// Model ID used against the mock server. No `:` so the request path stays unencoded.
pub const TEST_MODEL_ID: &str = "test-model";

/// Converse path for `TEST_MODEL_ID`.
pub const CONVERSE_PATH: &str = "/model/test-model/converse";

/// The single-instance plan used throughout the scenarios.
pub const SIMPLE_PLAN: &str = "resource \"aws_instance\" \"x\" {}";

/// Scratch directory with `plan.txt` and a target `summary.txt`.
pub struct TestHarness {
    _dir: TempDir,
    pub plan_path: PathBuf,
    pub output_path: PathBuf,
}

impl TestHarness {
    pub fn with_plan(plan: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let plan_path = dir.path().join("plan.txt");
        std::fs::write(&plan_path, plan).unwrap();
        let output_path = dir.path().join("summary.txt");
        Self {
            _dir: dir,
            plan_path,
            output_path,
        }
    }

    /// Harness whose plan path does not exist.
    pub fn without_plan() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let plan_path = dir.path().join("does-not-exist.txt");
        let output_path = dir.path().join("summary.txt");
        Self {
            _dir: dir,
            plan_path,
            output_path,
        }
    }

    /// Run the summarizer with the given engine and parameters.
    pub async fn run_with(
        &self,
        engine: &dyn InferenceEngine,
        params: &InferenceParams,
    ) -> SummaryResult<SummaryOutcome> {
        generate_summary(engine, params, &self.plan_path, &self.output_path).await
    }

    /// Run with default parameters.
    pub async fn run(&self, engine: &dyn InferenceEngine) -> SummaryResult<SummaryOutcome> {
        self.run_with(engine, &InferenceParams::default()).await
    }

    /// Raw bytes of the output file.
    pub fn output_bytes(&self) -> Vec<u8> {
        std::fs::read(&self.output_path).unwrap()
    }

    pub fn output_text(&self) -> String {
        String::from_utf8(self.output_bytes()).unwrap()
    }
}

/// Parameters matching the mock server's model path.
pub fn test_params() -> InferenceParams {
    InferenceParams {
        model_id: TEST_MODEL_ID.into(),
        ..InferenceParams::default()
    }
}

/// Real Bedrock engine talking to `server` with static credentials.
pub fn bedrock_engine_for(server: &MockServer, timeout: Option<Duration>) -> BedrockEngine {
    let conf = aws_sdk_bedrockruntime::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "SECRETTEST", None, None, "e2e"))
        .endpoint_url(server.uri())
        .build();
    BedrockEngine::new(BedrockClient::from_conf(conf), timeout)
}

/// Converse response body carrying `text` as the first content block.
pub fn converse_response(text: &str) -> serde_json::Value {
    json!({
        "output": {
            "message": {
                "role": "assistant",
                "content": [{ "text": text }]
            }
        },
        "stopReason": "end_turn",
        "usage": { "inputTokens": 200, "outputTokens": 12, "totalTokens": 212 },
        "metrics": { "latencyMs": 310 }
    })
}
