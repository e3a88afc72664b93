//! Plan summary generation with a static fallback.
//!
//! Failure policy:
//! - Reading the plan fails: `SummaryError::PlanRead` propagates, nothing is written.
//! - Inference or the summary write fails: the fallback sentence is written
//!   and `SummaryOutcome::Fallback` is returned.
//! - Writing the fallback fails: `SummaryError::OutputWrite` propagates.

use std::path::Path;

use thiserror::Error;

use crate::error::{InferenceError, SummaryError, SummaryResult};
use crate::inference::InferenceEngine;
use crate::prompt::{InferenceParams, PromptRequest};
use crate::sanitize::to_ascii;

/// Written in place of a summary whenever generation fails.
pub const FALLBACK_SUMMARY: &str =
    "AI summary generation failed. Please review the full Terraform plan for details.";

/// Result of one summary attempt. `text()` is exactly what landed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// ASCII-filtered model output.
    Generated(String),
    /// Inference failed; the fallback sentence was written.
    Fallback { error: String },
}

impl SummaryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Generated(summary) => summary,
            Self::Fallback { .. } => FALLBACK_SUMMARY,
        }
    }
}

/// Failures that are recovered by writing the fallback.
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Write(#[from] SummaryError),
}

/// Summarize the plan at `plan_path` into `output_path`.
pub async fn generate_summary(
    engine: &dyn InferenceEngine,
    params: &InferenceParams,
    plan_path: &Path,
    output_path: &Path,
) -> SummaryResult<SummaryOutcome> {
    let plan = read_plan(plan_path).await?;
    summarize_plan(engine, params, &plan, output_path).await
}

/// Summarize already-loaded plan text into `output_path`.
pub async fn summarize_plan(
    engine: &dyn InferenceEngine,
    params: &InferenceParams,
    plan: &str,
    output_path: &Path,
) -> SummaryResult<SummaryOutcome> {
    let request = PromptRequest::new(plan, params.clone());

    match attempt(engine, &request, output_path).await {
        Ok(summary) => {
            println!("AI Summary generated successfully");
            tracing::info!(
                output_path = %output_path.display(),
                summary_bytes = summary.len(),
                "summary written"
            );
            Ok(SummaryOutcome::Generated(summary))
        }
        Err(e) => {
            println!("Error generating AI summary: {e}");
            tracing::warn!(
                error = %e,
                engine = engine.engine_name(),
                "summary generation failed, writing fallback"
            );
            write_output(output_path, FALLBACK_SUMMARY).await?;
            Ok(SummaryOutcome::Fallback {
                error: e.to_string(),
            })
        }
    }
}

/// Submit, filter, write. Everything in here is recoverable.
async fn attempt(
    engine: &dyn InferenceEngine,
    request: &PromptRequest,
    output_path: &Path,
) -> Result<String, AttemptError> {
    tracing::debug!(
        engine = engine.engine_name(),
        model_id = %request.params.model_id,
        prompt_bytes = request.prompt.len(),
        "submitting prompt"
    );
    let raw = engine.submit(request).await?;

    let summary = to_ascii(&raw);
    if summary.len() != raw.len() {
        tracing::debug!(
            dropped_bytes = raw.len() - summary.len(),
            "stripped non-ASCII characters from summary"
        );
    }

    write_output(output_path, &summary).await?;
    Ok(summary)
}

/// Read the whole plan as UTF-8. Failure here is fatal.
pub async fn read_plan(path: &Path) -> SummaryResult<String> {
    let plan = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SummaryError::PlanRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    tracing::info!(
        plan_path = %path.display(),
        plan_bytes = plan.len(),
        "plan loaded"
    );
    Ok(plan)
}

async fn write_output(path: &Path, contents: &str) -> SummaryResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| SummaryError::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
