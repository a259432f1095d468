//! Error types for Flowscribe.
//!
//! This crate provides the error types shared by every Flowscribe crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` to capture the location
//!
//! # Examples
//!
//! ```
//! use flowscribe_error::{FlowError, FlowErrorKind, FlowscribeResult};
//!
//! fn load() -> FlowscribeResult<Vec<String>> {
//!     Err(FlowError::new(FlowErrorKind::NotFound("flow.json".to_string())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod flow;
mod generation;
mod json;
mod storage;

pub use config::ConfigError;
pub use error::{FlowscribeError, FlowscribeErrorKind, FlowscribeResult};
pub use flow::{FlowError, FlowErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
