//! Projection policies.

use serde::{Deserialize, Serialize};

/// Which fields of a step survive into its reduced record.
///
/// # Examples
///
/// ```
/// use flowscribe_core::ProjectionPolicy;
///
/// assert_eq!(ProjectionPolicy::default(), ProjectionPolicy::Strict);
/// assert_eq!("passthrough".parse::<ProjectionPolicy>(), Ok(ProjectionPolicy::Passthrough));
/// assert_eq!(ProjectionPolicy::Strict.to_string(), "strict");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionPolicy {
    /// Keep `type`, `title`, `subtitle`, hotspot labels and three click-context fields
    #[default]
    #[display("strict")]
    Strict,
    /// Copy every recognized field, sub-structures included, unfiltered
    #[display("passthrough")]
    Passthrough,
}

impl ProjectionPolicy {
    /// String form used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionPolicy::Strict => "strict",
            ProjectionPolicy::Passthrough => "passthrough",
        }
    }
}

impl std::str::FromStr for ProjectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ProjectionPolicy::Strict),
            "passthrough" => Ok(ProjectionPolicy::Passthrough),
            _ => Err(format!("Unknown projection policy: {}", s)),
        }
    }
}
