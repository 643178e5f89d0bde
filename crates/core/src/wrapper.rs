//! Boundary-facing wrapper layer
//!
//! `WrapperLayer` owns its own identifying text and exactly one inner
//! layer. Its combined description reports both, so a caller on the far
//! side of the bridge can tell which half came from which layer.
//!
//! ## Ownership
//!
//! The inner layer is created together with the wrapper and can never be
//! swapped out afterwards; only shared access to it is handed out. The
//! default inner layer's text may still change through
//! [`WrapperLayer::set_inner_description`].
//!
//! ```compile_fail
//! use layerdesc_core::{InnerLayer, WrapperLayer};
//!
//! let mut wrapper = WrapperLayer::new();
//! let _ = std::mem::replace(wrapper.inner_mut(), InnerLayer::new("impostor"));
//! ```
//!
//! ## Nesting
//!
//! A wrapper is itself a [`Describe`] implementation, so wrappers stack:
//!
//! ```
//! use layerdesc_core::{Describe, InnerLayer, WrapperLayer};
//!
//! let package = WrapperLayer::with_inner("objc-layer", InnerLayer::new("swift-layer"));
//! let app = WrapperLayer::with_inner("app-layer", package);
//!
//! let text = app.describe().unwrap();
//! assert!(text.starts_with("app-layer"));
//! assert!(text.contains("objc-layer"));
//! assert!(text.contains("swift-layer"));
//! ```

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::format::LayerFormat;
use crate::inner::InnerLayer;
use crate::traits::Describe;

/// Default description of the wrapper layer
pub const DEFAULT_SELF_DESCRIPTION: &str = "objc-layer";

/// Wrapper that composes its own description with an inner layer's
#[derive(Debug, Clone)]
pub struct WrapperLayer<D = InnerLayer> {
    self_description: String,
    format: LayerFormat,
    inner: D,
}

impl WrapperLayer<InnerLayer> {
    /// Create a wrapper with the default description and a fresh inner layer
    pub fn new() -> Self {
        Self::with_inner(DEFAULT_SELF_DESCRIPTION, InnerLayer::default())
    }

    /// Replace the inner layer's text verbatim
    ///
    /// The inner layer itself stays the one created with the wrapper.
    pub fn set_inner_description(&mut self, value: impl Into<String>) {
        self.inner.set_description(value);
    }

    /// Build a wrapper from loaded configuration
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::with_inner(
            config.self_description.clone(),
            InnerLayer::new(config.inner_description.clone()),
        )
        .with_format(config.format.clone())
    }
}

impl Default for WrapperLayer<InnerLayer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Describe> WrapperLayer<D> {
    /// Create a wrapper around an arbitrary inner layer
    pub fn with_inner(self_description: impl Into<String>, inner: D) -> Self {
        let self_description = self_description.into();
        tracing::debug!(self_description = %self_description, "created wrapper layer");
        Self {
            self_description,
            format: LayerFormat::default(),
            inner,
        }
    }

    /// Use a different layout for the combined description
    pub fn with_format(mut self, format: LayerFormat) -> Self {
        self.format = format;
        self
    }

    /// The wrapper's own identifying text
    pub fn self_description(&self) -> &str {
        &self.self_description
    }

    /// Replace the wrapper's own text verbatim
    pub fn set_self_description(&mut self, value: impl Into<String>) {
        self.self_description = value.into();
    }

    /// Layout used by [`WrapperLayer::describe`]
    pub fn format(&self) -> &LayerFormat {
        &self.format
    }

    /// Shared access to the inner layer
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Combined description of this layer and the one it wraps
    ///
    /// # Errors
    ///
    /// Returns exactly the error produced by the inner layer, if any.
    pub fn describe(&self) -> Result<String> {
        let inner_text = self.inner.describe()?;
        tracing::trace!(
            outer_len = self.self_description.len(),
            inner_len = inner_text.len(),
            "composing description"
        );
        Ok(self.format.compose(&self.self_description, &inner_text))
    }
}

impl<D: Describe> Describe for WrapperLayer<D> {
    fn describe(&self) -> Result<String> {
        WrapperLayer::describe(self)
    }
}
