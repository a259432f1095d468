//! Test utilities for pipeline tests.

use async_trait::async_trait;
use flowscribe::{
    FlowscribeResult, GenerationError, GenerationErrorKind, ImageGeneration, ImageRequest,
    TextGeneration, TextRequest,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted generation backend that records every prompt it receives.
#[derive(Debug)]
pub struct ScriptedGenerator {
    reply: Result<Vec<u8>, GenerationErrorKind>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    pub fn replying(bytes: &[u8]) -> Self {
        Self::new(Ok(bytes.to_vec()))
    }

    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self::new(Err(kind))
    }

    fn new(reply: Result<Vec<u8>, GenerationErrorKind>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn answer(&self, prompt: &str) -> FlowscribeResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|kind| GenerationError::new(kind).into())
    }
}

#[async_trait]
impl TextGeneration for ScriptedGenerator {
    async fn generate_text(&self, req: &TextRequest) -> FlowscribeResult<String> {
        let bytes = self.answer(req.prompt())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

#[async_trait]
impl ImageGeneration for ScriptedGenerator {
    async fn generate_image(&self, req: &ImageRequest) -> FlowscribeResult<Vec<u8>> {
        self.answer(req.prompt())
    }
}
