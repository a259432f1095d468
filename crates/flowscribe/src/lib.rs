//! Flowscribe - plain-language walkthroughs of recorded product flows.
//!
//! Flowscribe reads a recorded flow (a JSON list of user-interaction steps),
//! reduces every step to the fields worth narrating, and optionally asks a
//! generation service for a written walkthrough and an illustration.
//!
//! # Architecture
//!
//! - `flowscribe_error` - Error types
//! - `flowscribe_core` - Flow model, loader and field projection
//! - `flowscribe_interface` - Generation backend traits
//! - `flowscribe_models` - OpenAI provider
//! - `flowscribe_storage` - Output artifact storage
//! - `flowscribe_narrative` - Narrative and illustration requesters
//!
//! This crate re-exports everything and adds configuration loading and the
//! [`Pipeline`] that sequences a run.

pub use flowscribe_core::*;
pub use flowscribe_error::*;
pub use flowscribe_interface::*;
pub use flowscribe_models::*;
pub use flowscribe_narrative::*;
pub use flowscribe_storage::*;

mod config;
mod pipeline;

pub use config::{FlowscribeConfig, GenerationConfig, OutputConfig, ProjectionConfig};
pub use pipeline::{Pipeline, PipelineOptions, RunReport};
