//! Reading flow documents from disk.

use crate::{Flow, Step};
use flowscribe_error::{FlowError, FlowErrorKind, FlowscribeErrorKind, FlowscribeResult};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, instrument, warn};

/// Flow file read when no path is given.
pub const DEFAULT_FLOW_PATH: &str = "flow.json";

/// Load a flow document from `path`.
///
/// # Errors
///
/// - [`FlowErrorKind::NotFound`] if the file does not exist
/// - [`FlowErrorKind::InvalidFormat`] if the content is not valid JSON
/// - [`FlowErrorKind::MissingField`] if there is no top-level `steps` sequence
/// - [`FlowErrorKind::FileRead`] for any other I/O or encoding failure
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_flow(path: impl AsRef<Path>) -> FlowscribeResult<Flow> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FlowError::new(FlowErrorKind::NotFound(source.clone())),
        _ => FlowError::new(FlowErrorKind::FileRead(format!("{}: {}", source, e))),
    })?;

    debug!(bytes = content.len(), "Read flow file");
    parse_flow(&content, &source)
}

/// Parse a flow document already held in memory.
///
/// `source` names the document in diagnostics.
pub fn parse_flow(content: &str, source: &str) -> FlowscribeResult<Flow> {
    let document: Value = serde_json::from_str(content).map_err(|e| {
        FlowError::new(FlowErrorKind::InvalidFormat {
            path: source.to_string(),
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        })
    })?;

    let steps = match document {
        Value::Object(mut fields) => match fields.remove("steps") {
            Some(Value::Array(steps)) => steps,
            _ => return Err(FlowError::new(FlowErrorKind::MissingField("steps".to_string())).into()),
        },
        _ => return Err(FlowError::new(FlowErrorKind::MissingField("steps".to_string())).into()),
    };

    debug!(steps = steps.len(), "Parsed flow document");
    Ok(Flow::new(steps.into_iter().map(Step::from_value).collect()))
}

/// Load a flow, degrading every failure to an empty step list.
///
/// A missing `steps` field is reported as a warning; every other failure is
/// reported as an error. Callers decide what an empty result means.
pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Step> {
    match load_flow(path) {
        Ok(flow) => flow.into_steps(),
        Err(e) => {
            match e.kind() {
                FlowscribeErrorKind::Flow(flow_err) => match &flow_err.kind {
                    FlowErrorKind::MissingField(_) => warn!("{}", flow_err.kind),
                    kind => error!("{}", kind),
                },
                other => error!("{}", other),
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_kind(result: FlowscribeResult<Flow>) -> FlowErrorKind {
        match result {
            Err(e) => match e.kind() {
                FlowscribeErrorKind::Flow(flow_err) => flow_err.kind.clone(),
                other => panic!("unexpected error: {}", other),
            },
            Ok(flow) => panic!("expected an error, got {} steps", flow.len()),
        }
    }

    #[test]
    fn invalid_json_reports_position() {
        let kind = flow_kind(parse_flow("{\n  \"steps\": [,]\n}", "broken.json"));
        match kind {
            FlowErrorKind::InvalidFormat { path, line, column, .. } => {
                assert_eq!(path, "broken.json");
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected kind: {}", other),
        }
    }

    #[test]
    fn missing_steps_is_missing_field() {
        let kind = flow_kind(parse_flow(r#"{"name": "demo"}"#, "inline"));
        assert_eq!(kind, FlowErrorKind::MissingField("steps".to_string()));
    }

    #[test]
    fn non_mapping_document_is_missing_field() {
        let kind = flow_kind(parse_flow("[1, 2, 3]", "inline"));
        assert_eq!(kind, FlowErrorKind::MissingField("steps".to_string()));
    }

    #[test]
    fn steps_must_be_a_sequence() {
        let kind = flow_kind(parse_flow(r#"{"steps": {"type": "chapter"}}"#, "inline"));
        assert_eq!(kind, FlowErrorKind::MissingField("steps".to_string()));
    }

    #[test]
    fn non_mapping_steps_keep_their_position() {
        let flow = parse_flow(r#"{"steps": [{"type": "a"}, 7, {"type": "b"}]}"#, "inline").unwrap();
        assert_eq!(flow.len(), 3);
        assert!(flow.steps()[1].fields().is_empty());
    }
}
