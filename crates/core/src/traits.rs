//! Core traits for the layers on either side of the bridge
//!
//! This module defines the Describe and NumberGenerator traits. Wrappers
//! depend on these capabilities rather than on concrete layers, so any
//! implementation (a nested wrapper, a test double) can sit underneath.

use crate::error::Result;

/// Capability of rendering an identifying description
///
/// Implementations must be deterministic for a fixed internal state and
/// free of side effects: calling `describe` twice without mutating the
/// layer yields the same text.
///
/// # Examples
///
/// ```
/// use layerdesc_core::{Describe, InnerLayer};
///
/// let inner = InnerLayer::new("swift-layer");
/// assert_eq!(inner.describe().unwrap(), "swift-layer");
/// ```
pub trait Describe {
    /// Render this layer's description
    ///
    /// # Errors
    ///
    /// Returns an error if the layer cannot produce its text. Callers that
    /// compose descriptions propagate it unchanged.
    fn describe(&self) -> Result<String>;
}

impl<D: Describe + ?Sized> Describe for &D {
    fn describe(&self) -> Result<String> {
        (**self).describe()
    }
}

impl<D: Describe + ?Sized> Describe for Box<D> {
    fn describe(&self) -> Result<String> {
        (**self).describe()
    }
}

/// Source of integers in an inclusive range
pub trait NumberGenerator {
    /// Produce a value in `min..=max`
    ///
    /// # Errors
    ///
    /// Returns `LayerError::InvalidRange` when `min > max`.
    fn generate(&mut self, min: i64, max: i64) -> Result<i64>;
}

impl<G: NumberGenerator + ?Sized> NumberGenerator for Box<G> {
    fn generate(&mut self, min: i64, max: i64) -> Result<i64> {
        (**self).generate(min, max)
    }
}
