//! Wire types for the OpenAI Responses API.

use flowscribe_core::ReasoningEffort;
use serde::{Deserialize, Serialize};

/// Body of `POST /responses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsesRequest {
    /// Model identifier
    pub model: String,
    /// Plain-text input
    pub input: String,
    /// Reasoning configuration, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningConfig>,
    /// Hosted tools the model may call
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolSpec>,
}

/// Reasoning options for reasoning-capable models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReasoningConfig {
    /// Effort level
    pub effort: ReasoningEffort,
}

/// Hosted tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolSpec {
    /// Built-in image generation
    ImageGeneration,
}

/// Response body of `POST /responses`, reduced to what Flowscribe reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponsesResponse {
    /// Output items in generation order
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// One item of a response's output list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// An assistant message
    Message {
        /// Message content parts
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    /// Result of the image generation tool
    ImageGenerationCall {
        /// Base64-encoded image, absent while the call is incomplete
        #[serde(default)]
        result: Option<String>,
    },
    /// Reasoning summaries and any item kind Flowscribe ignores
    #[serde(other)]
    Other,
}

/// One content part of a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Generated text
    OutputText {
        /// The text
        text: String,
    },
    /// Refusals and other parts
    #[serde(other)]
    Other,
}

impl ResponsesResponse {
    /// Concatenation of every `output_text` part, in order.
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                _ => None,
            })
            .flatten()
            .filter_map(|part| match part {
                ContentPart::OutputText { text } => Some(text.as_str()),
                ContentPart::Other => None,
            })
            .collect()
    }

    /// Base64 payloads of every completed image generation call.
    pub fn image_results(&self) -> impl Iterator<Item = &str> {
        self.output.iter().filter_map(|item| match item {
            OutputItem::ImageGenerationCall { result } => result.as_deref(),
            _ => None,
        })
    }
}
