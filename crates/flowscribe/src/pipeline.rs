//! Run sequencing: load, project, print, narrate, illustrate.

use flowscribe_core::{ProjectionPolicy, ReducedStep, load_or_empty, project_all};
use flowscribe_error::{FlowscribeError, FlowscribeResult, JsonError};
use flowscribe_narrative::{IllustrationRequester, NarrativeRequester};
use flowscribe_storage::{ArtifactKind, OutputStorage};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Which stages of a run are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Projection applied to every step
    pub policy: ProjectionPolicy,
    /// Request a narrative after printing the records
    pub narrate: bool,
    /// Request an illustration once a narrative exists
    pub illustrate: bool,
    /// File name the narrative is stored under
    pub summary_file: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            policy: ProjectionPolicy::Strict,
            narrate: true,
            illustrate: true,
            summary_file: "flow_summary.md".to_string(),
        }
    }
}

/// Outcome of a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of records extracted
    pub records: usize,
    /// Narrative file, if one was written
    pub summary: Option<PathBuf>,
    /// Illustration file, if one was written
    pub image: Option<PathBuf>,
}

impl RunReport {
    /// Process exit code: success whenever at least one record was extracted.
    pub fn exit_code(&self) -> u8 {
        if self.records == 0 { 1 } else { 0 }
    }
}

/// Sequences the stages of a run.
///
/// Each stage is awaited before the next starts. Failures after the records
/// are printed are logged and never affect the exit code. A failed narrative
/// still yields text (the failure message), which is stored and illustrated
/// like any other narrative.
pub struct Pipeline {
    options: PipelineOptions,
    narrator: NarrativeRequester,
    illustrator: IllustrationRequester,
    storage: Arc<dyn OutputStorage>,
}

impl Pipeline {
    /// Create a pipeline; `storage` receives the narrative file.
    pub fn new(
        options: PipelineOptions,
        narrator: NarrativeRequester,
        illustrator: IllustrationRequester,
        storage: Arc<dyn OutputStorage>,
    ) -> Self {
        Self {
            options,
            narrator,
            illustrator,
            storage,
        }
    }

    /// Load a flow and project its steps with the configured policy.
    pub fn extract(&self, flow_path: &Path) -> Vec<ReducedStep> {
        let steps = load_or_empty(flow_path);
        project_all(&steps, self.options.policy)
    }

    /// Run every enabled stage, printing the records to `out`.
    ///
    /// # Errors
    ///
    /// Only fails if the records cannot be serialized or written to `out`.
    #[instrument(skip(self, out), fields(flow = %flow_path.display(), policy = %self.options.policy))]
    pub async fn run<W: Write>(&self, flow_path: &Path, out: &mut W) -> FlowscribeResult<RunReport> {
        let records = self.extract(flow_path);
        let mut report = RunReport {
            records: records.len(),
            ..RunReport::default()
        };

        if records.is_empty() {
            warn!("No steps extracted");
            return Ok(report);
        }
        debug!(records = records.len(), "Steps extracted");

        let rendered = serde_json::to_string_pretty(&records).map_err(|e| {
            FlowscribeError::from(JsonError::new(format!("Failed to render records: {}", e)))
        })?;
        writeln!(out, "{}", rendered).map_err(|e| {
            FlowscribeError::from(JsonError::new(format!("Failed to print records: {}", e)))
        })?;

        if !self.options.narrate {
            return Ok(report);
        }

        let narrative = self.narrator.summarize(&records).await;

        match self
            .storage
            .write(
                ArtifactKind::Summary,
                &self.options.summary_file,
                narrative.as_bytes(),
            )
            .await
        {
            Ok(path) => {
                info!(path = %path.display(), "Summary saved");
                report.summary = Some(path);
            }
            Err(e) => error!(error = %e, "Failed to save summary"),
        }

        if self.options.illustrate && self.illustrator.illustrate(&narrative).await {
            report.image = Some(self.illustrator.image_location());
        }

        Ok(report)
    }
}
