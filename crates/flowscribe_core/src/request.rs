//! Request types for the external generation service.

use flowscribe_error::{ConfigError, FlowscribeResult};
use serde::{Deserialize, Serialize};

/// How much reasoning the text model should spend before answering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    /// Minimal reasoning
    #[display("minimal")]
    Minimal,
    /// Low reasoning effort
    #[default]
    #[display("low")]
    Low,
    /// Medium reasoning effort
    #[display("medium")]
    Medium,
    /// High reasoning effort
    #[display("high")]
    High,
}

impl std::str::FromStr for ReasoningEffort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ReasoningEffort::Minimal),
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            _ => Err(format!("Unknown reasoning effort: {}", s)),
        }
    }
}

/// A text generation request.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{ReasoningEffort, TextRequest};
///
/// let request = TextRequest::builder()
///     .prompt("Describe this flow")
///     .model("gpt-5")
///     .reasoning_effort(Some(ReasoningEffort::Low))
///     .build()
///     .unwrap();
/// assert_eq!(request.model(), "gpt-5");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct TextRequest {
    /// Full instruction text
    prompt: String,
    /// Model identifier
    model: String,
    /// Optional reasoning effort hint
    #[builder(default)]
    reasoning_effort: Option<ReasoningEffort>,
}

impl TextRequest {
    /// Creates a new request builder.
    pub fn builder() -> TextRequestBuilder {
        TextRequestBuilder::default()
    }
}

impl TextRequestBuilder {
    /// Build the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or model is missing.
    pub fn build(&self) -> FlowscribeResult<TextRequest> {
        self.build_internal()
            .map_err(|e| ConfigError::new(format!("Invalid text request: {}", e)).into())
    }
}

/// An image generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct ImageRequest {
    /// Full instruction text
    prompt: String,
    /// Model identifier
    model: String,
}

impl ImageRequest {
    /// Creates a new request builder.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

impl ImageRequestBuilder {
    /// Build the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or model is missing.
    pub fn build(&self) -> FlowscribeResult<ImageRequest> {
        self.build_internal()
            .map_err(|e| ConfigError::new(format!("Invalid image request: {}", e)).into())
    }
}
