//! Output artifact storage for Flowscribe.
//!
//! Generated narratives and images are written through the [`OutputStorage`]
//! trait. The filesystem backend creates its directory on first write.
//!
//! # Example
//!
//! ```rust
//! use flowscribe_storage::{ArtifactKind, FileSystemOutput, OutputStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let output = FileSystemOutput::new("output");
//! let path = output
//!     .write(ArtifactKind::Summary, "flow_summary.md", b"1. Opened the app")
//!     .await?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use flowscribe_error::FlowscribeResult;
use std::path::PathBuf;

mod artifact;
mod filesystem;

pub use artifact::ArtifactKind;
pub use filesystem::FileSystemOutput;

/// Trait for pluggable output backends.
#[async_trait::async_trait]
pub trait OutputStorage: Send + Sync {
    /// Write an artifact under `name`, replacing any previous content.
    ///
    /// Returns the location the artifact was written to.
    async fn write(&self, kind: ArtifactKind, name: &str, data: &[u8])
    -> FlowscribeResult<PathBuf>;

    /// Location an artifact named `name` would be written to.
    fn location(&self, name: &str) -> PathBuf;

    /// Backend name (e.g., "filesystem").
    fn backend_name(&self) -> &'static str;
}
