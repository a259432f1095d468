//! Core data types for Flowscribe.
//!
//! This crate holds the flow document model, the loader that reads flow files
//! from disk, and the field projector that reduces each recorded step to the
//! fields worth narrating.
//!
//! # Example
//!
//! ```
//! use flowscribe_core::{ProjectionPolicy, parse_flow, project_all};
//!
//! let flow = parse_flow(
//!     r##"{"steps":[{"type":"chapter","title":"Intro","id":"abc"}]}"##,
//!     "inline",
//! )
//! .unwrap();
//! let records = project_all(flow.steps(), ProjectionPolicy::Strict);
//! assert_eq!(
//!     serde_json::to_string(&records).unwrap(),
//!     r#"[{"type":"chapter","title":"Intro"}]"#
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod flow;
mod loader;
mod policy;
mod projector;
mod reduced;
mod request;

pub use flow::{Flow, Step};
pub use loader::{DEFAULT_FLOW_PATH, load_flow, load_or_empty, parse_flow};
pub use policy::ProjectionPolicy;
pub use projector::{project, project_all};
pub use reduced::{ClickContext, Hotspot, Projected, ReducedStep};
pub use request::{
    ImageRequest, ImageRequestBuilder, ReasoningEffort, TextRequest, TextRequestBuilder,
};
