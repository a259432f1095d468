//! Trait definitions for text and image generation backends.

use async_trait::async_trait;
use flowscribe_core::{ImageRequest, TextRequest};
use flowscribe_error::FlowscribeResult;

/// A backend that turns an instruction into prose.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate text for the request, returning the output verbatim.
    async fn generate_text(&self, req: &TextRequest) -> FlowscribeResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// A backend that turns an instruction into image bytes.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Generate one image and return its decoded bytes.
    async fn generate_image(&self, req: &ImageRequest) -> FlowscribeResult<Vec<u8>>;
}
