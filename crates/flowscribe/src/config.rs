//! Layered configuration.
//!
//! Sources, later ones taking precedence:
//! 1. Bundled defaults (`flowscribe.toml` at the workspace root)
//! 2. `~/.config/flowscribe/flowscribe.toml`
//! 3. `./flowscribe.toml`
//! 4. A file given explicitly (the `--config` flag)

use flowscribe_core::{ProjectionPolicy, ReasoningEffort};
use flowscribe_error::{ConfigError, FlowscribeError, FlowscribeResult};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../flowscribe.toml");

/// Settings for the external generation service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API root URL
    pub base_url: String,
    /// Model used for narratives
    pub text_model: String,
    /// Model used for illustrations
    pub image_model: String,
    /// Reasoning effort for narrative requests
    pub reasoning_effort: ReasoningEffort,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            text_model: "gpt-5".to_string(),
            image_model: "gpt-5".to_string(),
            reasoning_effort: ReasoningEffort::Low,
        }
    }
}

/// Where generated artifacts are written.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created on demand
    pub directory: String,
    /// File name of the narrative
    pub summary_file: String,
    /// File name of the illustration
    pub image_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "output".to_string(),
            summary_file: "flow_summary.md".to_string(),
            image_file: "flow_image.png".to_string(),
        }
    }
}

/// Field projection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Active projection policy
    pub policy: ProjectionPolicy,
}

/// Top-level Flowscribe configuration.
///
/// # Example
///
/// ```no_run
/// use flowscribe::FlowscribeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FlowscribeConfig::load(None)?;
/// println!("Narratives use {}", config.generation.text_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct FlowscribeConfig {
    /// Generation service settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Projection settings
    #[serde(default)]
    pub projection: ProjectionConfig,
}

impl FlowscribeConfig {
    /// Load configuration from a single file, without bundled defaults.
    ///
    /// Missing fields take their built-in default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FlowscribeResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FlowscribeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FlowscribeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: explicit file > current dir > home dir > bundled.
    ///
    /// The home and current-directory files are optional; an explicit file must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> FlowscribeResult<Self> {
        debug!("Loading layered configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/flowscribe/flowscribe.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("flowscribe").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder
            .build()
            .map_err(|e| {
                FlowscribeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FlowscribeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
