//! Test utilities for narrative tests.
//!
//! Deterministic generation backends that record what they were asked.

use async_trait::async_trait;
use flowscribe_core::{ImageRequest, TextRequest};
use flowscribe_error::{FlowscribeResult, GenerationError, GenerationErrorKind};
use flowscribe_interface::{ImageGeneration, TextGeneration};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a mock backend does when called.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Return this text / these bytes
    Succeed(Vec<u8>),
    /// Fail with this error kind
    Fail(GenerationErrorKind),
}

/// Mock backend implementing both generation traits.
#[derive(Debug)]
pub struct MockGenerator {
    behavior: MockBehavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    models: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockGenerator {
    pub fn new_text(text: &str) -> Self {
        Self::new(MockBehavior::Succeed(text.as_bytes().to_vec()))
    }

    pub fn new_image(bytes: &[u8]) -> Self {
        Self::new(MockBehavior::Succeed(bytes.to_vec()))
    }

    pub fn new_error(kind: GenerationErrorKind) -> Self {
        Self::new(MockBehavior::Fail(kind))
    }

    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn models(&self) -> Vec<String> {
        self.models.lock().unwrap().clone()
    }

    fn respond(&self, prompt: &str, model: &str) -> FlowscribeResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.models.lock().unwrap().push(model.to_string());
        match &self.behavior {
            MockBehavior::Succeed(bytes) => Ok(bytes.clone()),
            MockBehavior::Fail(kind) => Err(GenerationError::new(kind.clone()).into()),
        }
    }
}

#[async_trait]
impl TextGeneration for MockGenerator {
    async fn generate_text(&self, req: &TextRequest) -> FlowscribeResult<String> {
        let bytes = self.respond(req.prompt(), req.model())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl ImageGeneration for MockGenerator {
    async fn generate_image(&self, req: &ImageRequest) -> FlowscribeResult<Vec<u8>> {
        self.respond(req.prompt(), req.model())
    }
}
