//! Illustration requests.

use crate::{describe_failure, illustration_prompt};
use flowscribe_core::ImageRequest;
use flowscribe_error::FlowscribeResult;
use flowscribe_interface::ImageGeneration;
use flowscribe_storage::{ArtifactKind, OutputStorage};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Asks an image backend to illustrate a narrative and stores the result.
#[derive(Clone)]
pub struct IllustrationRequester {
    generator: Arc<dyn ImageGeneration>,
    storage: Arc<dyn OutputStorage>,
    model: String,
    image_name: String,
}

impl IllustrationRequester {
    /// Create a requester writing the image as `image_name` in `storage`.
    pub fn new(
        generator: Arc<dyn ImageGeneration>,
        storage: Arc<dyn OutputStorage>,
        model: impl Into<String>,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            storage,
            model: model.into(),
            image_name: image_name.into(),
        }
    }

    /// Where the image will be written.
    pub fn image_location(&self) -> PathBuf {
        self.storage.location(&self.image_name)
    }

    /// Generate and store the illustration, surfacing failures as typed errors.
    #[instrument(skip(self, narrative), fields(narrative_len = narrative.len(), model = %self.model))]
    pub async fn try_illustrate(&self, narrative: &str) -> FlowscribeResult<PathBuf> {
        let request = ImageRequest::builder()
            .prompt(illustration_prompt(narrative))
            .model(self.model.clone())
            .build()?;

        debug!("Requesting illustration");
        let image = self.generator.generate_image(&request).await?;
        self.storage
            .write(ArtifactKind::Image, &self.image_name, &image)
            .await
    }

    /// Generate and store the illustration.
    ///
    /// Returns `true` once the image is on disk. Every failure, including a
    /// missing credential, is logged and yields `false`.
    pub async fn illustrate(&self, narrative: &str) -> bool {
        match self.try_illustrate(narrative).await {
            Ok(path) => {
                info!(path = %path.display(), "Image saved");
                true
            }
            Err(e) => {
                error!("{}", describe_failure(&e, "Error generating image"));
                false
            }
        }
    }
}
