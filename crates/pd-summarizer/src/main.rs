//! Plan Digest CLI: summarize a Terraform plan for approval reviewers.
//!
//! `plan-digest <plan_file> <output_file> <aws_region>`

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use pd_summarizer::cli::{Invocation, USAGE};
use pd_summarizer::{BedrockEngine, InferenceParams, SummarizerConfig, read_plan, summarize_plan};

/// Exit code when the fallback was written and `fail_on_fallback` is set.
const FALLBACK_EXIT_CODE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let Some(invocation) = Invocation::from_args(std::env::args().skip(1)) else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "plan-digest starting");

    let config = SummarizerConfig::load()?;
    tracing::info!(
        region = %invocation.aws_region,
        model_id = %config.model_id,
        timeout_secs = ?config.timeout_secs,
        "config loaded"
    );

    // Plan first: a fatal read should not pay for an SDK config load.
    let plan = read_plan(&invocation.plan_file).await?;

    let engine = BedrockEngine::connect(&invocation.aws_region, &config).await;
    let params = InferenceParams::from(&config);

    let outcome = summarize_plan(&engine, &params, &plan, &invocation.output_file).await?;

    if !outcome.is_success() && config.fail_on_fallback {
        tracing::info!("fallback written and fail_on_fallback set, exiting non-zero");
        return Ok(ExitCode::from(FALLBACK_EXIT_CODE));
    }

    Ok(ExitCode::SUCCESS)
}
