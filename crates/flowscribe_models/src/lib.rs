//! Generation provider integrations for Flowscribe.
//!
//! Currently one provider is available: the OpenAI Responses API, which
//! serves both the text and the image capability.
//!
//! ```no_run
//! use flowscribe_core::{ReasoningEffort, TextRequest};
//! use flowscribe_interface::TextGeneration;
//! use flowscribe_models::OpenAiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env("OPENAI_API_KEY", "https://api.openai.com/v1");
//! let request = TextRequest::builder()
//!     .prompt("Say hello")
//!     .model("gpt-5")
//!     .reasoning_effort(Some(ReasoningEffort::Low))
//!     .build()?;
//! let text = client.generate_text(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ContentPart, OpenAiClient, OutputItem, ReasoningConfig, ResponsesRequest, ResponsesResponse,
    ToolSpec,
};
