//! OpenAI client implementing both generation traits.

use super::dto::{ReasoningConfig, ResponsesRequest, ResponsesResponse, ToolSpec};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flowscribe_core::{ImageRequest, TextRequest};
use flowscribe_error::{FlowscribeResult, GenerationError, GenerationErrorKind};
use flowscribe_interface::{ImageGeneration, TextGeneration};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// OpenAI Responses API client.
///
/// The credential is optional at construction time. Requests made without
/// one fail with [`GenerationErrorKind::CredentialMissing`] before anything
/// is sent over the network.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client with an explicit credential.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key, or `None` if unavailable
    /// * `api_key_env` - Name of the variable the key is normally read from, used in diagnostics
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    pub fn new(
        api_key: Option<String>,
        api_key_env: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, has_key = api_key.is_some(), "Creating OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            api_key_env: api_key_env.into(),
            base_url,
        }
    }

    /// Creates a client reading the credential from `api_key_env`.
    ///
    /// An unset or empty variable is not an error here.
    #[instrument(skip(base_url))]
    pub fn from_env(api_key_env: &str, base_url: impl Into<String>) -> Self {
        let api_key = std::env::var(api_key_env).ok();
        Self::new(api_key, api_key_env, base_url)
    }

    /// True if a credential is available.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Name of the credential environment variable.
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    fn api_key(&self) -> FlowscribeResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::CredentialMissing(
                self.api_key_env.clone(),
            ))
            .into()
        })
    }

    /// Sends a request to `POST {base_url}/responses`.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_response(
        &self,
        request: &ResponsesRequest,
    ) -> FlowscribeResult<ResponsesResponse> {
        let api_key = self.api_key()?;
        let url = format!("{}/responses", self.base_url);
        debug!(url = %url, input_len = request.input.len(), "Sending request to OpenAI");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI");
                GenerationError::new(GenerationErrorKind::ServiceFailure(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(GenerationError::new(GenerationErrorKind::ApiStatus {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed: ResponsesResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
        })?;

        debug!(items = parsed.output.len(), "Received response from OpenAI");
        Ok(parsed)
    }
}

/// Decode the first image payload of a response.
pub(crate) fn first_image(response: &ResponsesResponse) -> FlowscribeResult<Vec<u8>> {
    let encoded = response
        .image_results()
        .next()
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::NoImage))?;

    STANDARD
        .decode(encoded.trim())
        .map_err(|e| GenerationError::new(GenerationErrorKind::Decode(e.to_string())).into())
}

#[async_trait]
impl TextGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %req.model()))]
    async fn generate_text(&self, req: &TextRequest) -> FlowscribeResult<String> {
        let request = ResponsesRequest {
            model: req.model().clone(),
            input: req.prompt().clone(),
            reasoning: req.reasoning_effort().map(|effort| ReasoningConfig { effort }),
            tools: Vec::new(),
        };

        let response = self.create_response(&request).await?;
        Ok(response.output_text())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[async_trait]
impl ImageGeneration for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %req.model()))]
    async fn generate_image(&self, req: &ImageRequest) -> FlowscribeResult<Vec<u8>> {
        let request = ResponsesRequest {
            model: req.model().clone(),
            input: req.prompt().clone(),
            reasoning: None,
            tools: vec![ToolSpec::ImageGeneration],
        };

        let response = self.create_response(&request).await?;
        let bytes = first_image(&response)?;
        debug!(bytes = bytes.len(), "Decoded generated image");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowscribe_error::FlowscribeErrorKind;
    use serde_json::json;

    fn generation_kind(err: &flowscribe_error::FlowscribeError) -> &GenerationErrorKind {
        match err.kind() {
            FlowscribeErrorKind::Generation(e) => &e.kind,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let client = OpenAiClient::new(Some("   ".to_string()), "OPENAI_API_KEY", "http://localhost");
        assert!(!client.has_credential());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OpenAiClient::new(None, "OPENAI_API_KEY", "https://api.openai.com/v1/");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn first_image_decodes_base64() {
        let response: ResponsesResponse = serde_json::from_value(json!({
            "output": [{"type": "image_generation_call", "result": "iVBORw0KGgo="}]
        }))
        .unwrap();

        let bytes = first_image(&response).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn first_image_without_result_is_no_image() {
        let response: ResponsesResponse =
            serde_json::from_value(json!({"output": [{"type": "message", "content": []}]})).unwrap();

        let err = first_image(&response).unwrap_err();
        assert_eq!(generation_kind(&err), &GenerationErrorKind::NoImage);
    }

    #[test]
    fn first_image_with_bad_payload_is_decode_error() {
        let response: ResponsesResponse = serde_json::from_value(json!({
            "output": [{"type": "image_generation_call", "result": "not base64!"}]
        }))
        .unwrap();

        let err = first_image(&response).unwrap_err();
        assert!(matches!(generation_kind(&err), GenerationErrorKind::Decode(_)));
    }
}
