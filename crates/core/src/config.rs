//! Bridge configuration via `layerdesc.toml`
//!
//! Every field is optional; a missing file section falls back to the
//! built-in defaults, which are the same values `WrapperLayer::new` uses.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LayerError, Result};
use crate::format::LayerFormat;
use crate::inner::DEFAULT_INNER_DESCRIPTION;
use crate::wrapper::DEFAULT_SELF_DESCRIPTION;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "layerdesc.toml";

/// Texts and layout used to build a wrapper.
///
/// # Example
///
/// ```toml
/// self_description = "objc-layer"
/// inner_description = "swift-layer"
///
/// [format]
/// label = ""
/// separator = " calling:\n{\n"
/// terminator = "\n}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Initial text of the wrapper layer.
    #[serde(default = "default_self_description")]
    pub self_description: String,
    /// Initial text of the inner layer.
    #[serde(default = "default_inner_description")]
    pub inner_description: String,
    /// Layout of the combined description.
    #[serde(default)]
    pub format: LayerFormat,
}

fn default_self_description() -> String {
    DEFAULT_SELF_DESCRIPTION.to_string()
}

fn default_inner_description() -> String {
    DEFAULT_INNER_DESCRIPTION.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            self_description: default_self_description(),
            inner_description: default_inner_description(),
            format: LayerFormat::default(),
        }
    }
}

impl BridgeConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# layerdesc bridge configuration
#
# Text reported by the wrapper (boundary) layer.
self_description = "objc-layer"

# Text reported by the inner (implementation) layer.
inner_description = "swift-layer"

# Layout of the combined description:
#   label + self_description + separator + inner + terminator
[format]
label = ""
separator = " calling:\n{\n"
terminator = "\n}"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| LayerError::config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LayerError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded bridge config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                LayerError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LayerError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            LayerError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
