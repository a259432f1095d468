//! Run command handler.

use super::Cli;
use flowscribe::{
    FileSystemOutput, FlowscribeConfig, FlowscribeResult, IllustrationRequester,
    NarrativeRequester, OpenAiClient, OutputStorage, Pipeline, PipelineOptions,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Execute a run and return the process exit code.
#[instrument(skip(cli), fields(flow = %cli.flow.display()))]
pub async fn run_flow(cli: &Cli) -> FlowscribeResult<u8> {
    let config = FlowscribeConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let storage: Arc<dyn OutputStorage> = Arc::new(FileSystemOutput::new(output_dir));

    let client = Arc::new(OpenAiClient::from_env(
        &config.generation.api_key_env,
        config.generation.base_url.clone(),
    ));
    let narrator = NarrativeRequester::new(
        client.clone(),
        config.generation.text_model.clone(),
        Some(config.generation.reasoning_effort),
    );
    let illustrator = IllustrationRequester::new(
        client,
        storage.clone(),
        config.generation.image_model.clone(),
        config.output.image_file.clone(),
    );

    let options = PipelineOptions {
        policy: cli.policy.unwrap_or(config.projection.policy),
        narrate: !cli.extract_only,
        illustrate: !cli.no_image,
        summary_file: config.output.summary_file.clone(),
    };

    let pipeline = Pipeline::new(options, narrator, illustrator, storage);
    let mut stdout = std::io::stdout();
    let report = pipeline.run(&cli.flow, &mut stdout).await?;

    debug!(
        records = report.records,
        summary = ?report.summary,
        image = ?report.image,
        "Run finished"
    );
    Ok(report.exit_code())
}
