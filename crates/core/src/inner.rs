//! Default implementation layer
//!
//! `InnerLayer` is the simplest possible describer: it owns one piece of
//! text and hands it back verbatim.

use crate::error::Result;
use crate::traits::Describe;

/// Default description of the implementation layer
pub const DEFAULT_INNER_DESCRIPTION: &str = "swift-layer";

/// Implementation-layer object that renders its own description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerLayer {
    description: String,
}

impl InnerLayer {
    /// Create a layer with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Current description text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description text
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl Default for InnerLayer {
    fn default() -> Self {
        Self::new(DEFAULT_INNER_DESCRIPTION)
    }
}

impl Describe for InnerLayer {
    fn describe(&self) -> Result<String> {
        Ok(self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_description() {
        let layer = InnerLayer::default();
        assert_eq!(layer.describe().unwrap(), DEFAULT_INNER_DESCRIPTION);
    }

    #[test]
    fn test_describe_reflects_mutation() {
        let mut layer = InnerLayer::default();
        layer.set_description("This is SPM package Swift code");
        assert_eq!(layer.description(), "This is SPM package Swift code");
        assert_eq!(layer.describe().unwrap(), "This is SPM package Swift code");
    }

    #[test]
    fn test_empty_description() {
        let layer = InnerLayer::new("");
        assert_eq!(layer.describe().unwrap(), "");
    }
}
