//! Narrative requests.

use crate::summary_prompt;
use flowscribe_core::{ReasoningEffort, ReducedStep, TextRequest};
use flowscribe_error::{FlowscribeError, FlowscribeErrorKind, FlowscribeResult, JsonError};
use flowscribe_interface::TextGeneration;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Asks a text backend for a plain-language walkthrough of a flow.
#[derive(Clone)]
pub struct NarrativeRequester {
    generator: Arc<dyn TextGeneration>,
    model: String,
    reasoning_effort: Option<ReasoningEffort>,
}

impl NarrativeRequester {
    /// Create a requester for `model` on the given backend.
    pub fn new(
        generator: Arc<dyn TextGeneration>,
        model: impl Into<String>,
        reasoning_effort: Option<ReasoningEffort>,
    ) -> Self {
        Self {
            generator,
            model: model.into(),
            reasoning_effort,
        }
    }

    /// Model identifier used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a narrative, surfacing failures as typed errors.
    #[instrument(skip(self, records), fields(records = records.len(), model = %self.model))]
    pub async fn try_summarize(&self, records: &[ReducedStep]) -> FlowscribeResult<String> {
        let records_json = serde_json::to_string_pretty(records)
            .map_err(|e| JsonError::new(format!("Failed to serialize records: {}", e)))?;
        let request = TextRequest::builder()
            .prompt(summary_prompt(&records_json))
            .model(self.model.clone())
            .reasoning_effort(self.reasoning_effort)
            .build()?;

        debug!(
            provider = self.generator.provider_name(),
            prompt_len = request.prompt().len(),
            "Requesting narrative"
        );
        let narrative = self.generator.generate_text(&request).await?;
        info!(chars = narrative.len(), "Received narrative");
        Ok(narrative)
    }

    /// Request a narrative.
    ///
    /// On failure the returned string is the error message itself:
    /// `"Error: <VAR> environment variable not set."` when the credential is
    /// missing, `"Error generating summary: <cause>"` otherwise.
    pub async fn summarize(&self, records: &[ReducedStep]) -> String {
        match self.try_summarize(records).await {
            Ok(narrative) => narrative,
            Err(e) => {
                let message = describe_failure(&e, "Error generating summary");
                error!("{}", message);
                message
            }
        }
    }
}

/// Render a generation failure as a one-line message.
///
/// A missing credential reads `Error: <VAR> environment variable not set.`;
/// anything else reads `<context>: <cause>`.
pub fn describe_failure(err: &FlowscribeError, context: &str) -> String {
    match err.kind() {
        FlowscribeErrorKind::Generation(e) if e.kind.is_credential_missing() => {
            format!("Error: {}", e.kind)
        }
        FlowscribeErrorKind::Generation(e) => format!("{}: {}", context, e.kind),
        FlowscribeErrorKind::Flow(e) => format!("{}: {}", context, e.kind),
        FlowscribeErrorKind::Storage(e) => format!("{}: {}", context, e.kind),
        FlowscribeErrorKind::Json(e) => format!("{}: {}", context, e.message),
        FlowscribeErrorKind::Config(e) => format!("{}: {}", context, e.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowscribe_error::{GenerationError, GenerationErrorKind, StorageError, StorageErrorKind};

    #[test]
    fn credential_failure_has_no_context_prefix() {
        let err: FlowscribeError = GenerationError::new(GenerationErrorKind::CredentialMissing(
            "OPENAI_API_KEY".to_string(),
        ))
        .into();
        assert_eq!(
            describe_failure(&err, "Error generating summary"),
            "Error: OPENAI_API_KEY environment variable not set."
        );
    }

    #[test]
    fn other_failures_carry_context() {
        let err: FlowscribeError = GenerationError::new(GenerationErrorKind::ServiceFailure(
            "connection reset".to_string(),
        ))
        .into();
        assert_eq!(
            describe_failure(&err, "Error generating summary"),
            "Error generating summary: connection reset"
        );

        let err: FlowscribeError =
            StorageError::new(StorageErrorKind::FileWrite("output/x.png".to_string())).into();
        assert_eq!(
            describe_failure(&err, "Error generating image"),
            "Error generating image: Failed to write file: output/x.png"
        );
    }
}
