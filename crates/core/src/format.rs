//! Layout of a composed description
//!
//! A composed description is `label + own + separator + inner + terminator`.
//! The inner text is inserted verbatim, never re-indented, so it can always
//! be found as a substring of the result.

use serde::{Deserialize, Serialize};

/// Default text between the outer description and the inner one
pub const DEFAULT_SEPARATOR: &str = " calling:\n{\n";

/// Default text closing a composed description
pub const DEFAULT_TERMINATOR: &str = "\n}";

/// Literal pieces surrounding the two descriptions
///
/// # Example
///
/// ```
/// use layerdesc_core::LayerFormat;
///
/// let format = LayerFormat::default();
/// assert_eq!(
///     format.compose("objc-layer", "swift-layer"),
///     "objc-layer calling:\n{\nswift-layer\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerFormat {
    /// Introductory label placed before the outer description
    pub label: String,
    /// Text between the outer and inner descriptions
    pub separator: String,
    /// Text after the inner description
    pub terminator: String,
}

impl Default for LayerFormat {
    fn default() -> Self {
        Self {
            label: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}

impl LayerFormat {
    /// Join an outer and an inner description
    pub fn compose(&self, own: &str, inner: &str) -> String {
        let mut out = String::with_capacity(
            self.label.len()
                + own.len()
                + self.separator.len()
                + inner.len()
                + self.terminator.len(),
        );
        out.push_str(&self.label);
        out.push_str(own);
        out.push_str(&self.separator);
        out.push_str(inner);
        out.push_str(&self.terminator);
        out
    }

    /// Byte length of everything the format contributes around `own`
    ///
    /// The outer portion of a composed description is
    /// `result[..outer_len(own)]`; the remainder is the inner portion.
    pub fn outer_len(&self, own: &str) -> usize {
        self.label.len() + own.len() + self.separator.len()
    }
}
