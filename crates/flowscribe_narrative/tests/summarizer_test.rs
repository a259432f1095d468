//! Narrative requester tests.

mod test_utils;

use flowscribe_core::{ProjectionPolicy, ReasoningEffort, parse_flow, project_all};
use flowscribe_error::GenerationErrorKind;
use flowscribe_models::OpenAiClient;
use flowscribe_narrative::NarrativeRequester;
use std::sync::Arc;
use test_utils::MockGenerator;

const FLOW: &str = r##"{"steps":[{"type":"chapter","title":"Intro"},{"type":"click","clickContext":{"cssSelector":"#buy","text":"Buy now","irrelevant":"x"}}]}"##;

fn records() -> Vec<flowscribe_core::ReducedStep> {
    let flow = parse_flow(FLOW, "flow.json").unwrap();
    project_all(flow.steps(), ProjectionPolicy::Strict)
}

#[tokio::test]
async fn test_summarize_returns_text_verbatim() {
    let mock = Arc::new(MockGenerator::new_text("1. Clicked **Buy now**\n\n## Summary\nBuying."));
    let requester = NarrativeRequester::new(mock.clone(), "gpt-5", Some(ReasoningEffort::Low));

    let narrative = requester.summarize(&records()).await;

    assert_eq!(narrative, "1. Clicked **Buy now**\n\n## Summary\nBuying.");
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.models(), vec!["gpt-5".to_string()]);
}

#[tokio::test]
async fn test_prompt_embeds_pretty_printed_records() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::new_text("ok"));
    let requester = NarrativeRequester::new(mock.clone(), "gpt-5", None);
    let records = records();

    requester.try_summarize(&records).await?;

    let prompt = &mock.prompts()[0];
    assert!(prompt.contains(&serde_json::to_string_pretty(&records)?));
    assert!(prompt.contains("  {\n    \"type\": \"chapter\",\n    \"title\": \"Intro\"\n  }"));
    assert!(!prompt.contains("irrelevant"));
    Ok(())
}

#[tokio::test]
async fn test_service_failure_becomes_error_string() {
    let mock = Arc::new(MockGenerator::new_error(GenerationErrorKind::ApiStatus {
        status: 500,
        message: "boom".to_string(),
    }));
    let requester = NarrativeRequester::new(mock.clone(), "gpt-5", None);

    let narrative = requester.summarize(&records()).await;

    assert_eq!(narrative, "Error generating summary: HTTP 500 error: boom");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_try_summarize_surfaces_typed_error() {
    let mock = Arc::new(MockGenerator::new_error(GenerationErrorKind::ServiceFailure(
        "connection refused".to_string(),
    )));
    let requester = NarrativeRequester::new(mock, "gpt-5", None);

    assert!(requester.try_summarize(&records()).await.is_err());
}

#[tokio::test]
async fn test_missing_credential_returns_literal_message() {
    // No key and an unroutable endpoint: any attempted request would surface
    // as a transport error instead of the credential message.
    let client = Arc::new(OpenAiClient::new(None, "OPENAI_API_KEY", "http://127.0.0.1:9/v1"));
    let requester = NarrativeRequester::new(client, "gpt-5", Some(ReasoningEffort::Low));

    let narrative = requester.summarize(&records()).await;

    assert_eq!(narrative, "Error: OPENAI_API_KEY environment variable not set.");
}
