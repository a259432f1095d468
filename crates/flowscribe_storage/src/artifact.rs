//! Artifact kinds.

/// Kind of artifact produced by a run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ArtifactKind {
    /// Markdown narrative of the flow
    #[display("summary")]
    Summary,
    /// Illustration of the flow
    #[display("image")]
    Image,
}

impl ArtifactKind {
    /// MIME type of artifacts of this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "text/markdown",
            ArtifactKind::Image => "image/png",
        }
    }
}
