//! Filesystem output backend.

use crate::{ArtifactKind, OutputStorage};
use flowscribe_error::{FlowscribeResult, StorageError, StorageErrorKind};
use std::path::{Component, Path, PathBuf};

/// Writes artifacts as plain files inside one directory.
///
/// The directory is created on the first write, not at construction.
#[derive(Debug, Clone)]
pub struct FileSystemOutput {
    base_path: PathBuf,
}

impl FileSystemOutput {
    /// Create a backend rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory of this backend.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Reject names that are empty or would leave the base directory.
    fn validate_name(name: &str) -> FlowscribeResult<()> {
        let path = Path::new(name);
        let plain = !name.is_empty()
            && path
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !plain {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(name.to_string())).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl OutputStorage for FileSystemOutput {
    #[tracing::instrument(skip(self, kind, data), fields(size = data.len(), kind = %kind))]
    async fn write(
        &self,
        kind: ArtifactKind,
        name: &str,
        data: &[u8],
    ) -> FlowscribeResult<PathBuf> {
        Self::validate_name(name)?;
        let path = self.location(name);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tokio::fs::write(&path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            path = %path.display(),
            mime_type = kind.mime_type(),
            "Wrote artifact"
        );
        Ok(path)
    }

    fn location(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
