//! OpenAI Responses API client.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    ContentPart, OutputItem, ReasoningConfig, ResponsesRequest, ResponsesResponse, ToolSpec,
};
