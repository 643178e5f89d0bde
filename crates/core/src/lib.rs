//! Core types and traits for layerdesc
//!
//! This crate defines the two layers of the description bridge and how
//! their texts are combined:
//! - Describe: capability of rendering an identifying description
//! - InnerLayer: default implementation layer
//! - WrapperLayer: boundary layer composing its own text with an inner layer's
//! - LayerFormat: literal layout of a composed description
//! - BridgeConfig: TOML configuration for texts and layout
//! - NumberGenerator / GeneratorWrapper: random number bridge
//! - LayerError: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod inner;
pub mod traits;
pub mod wrapper;

pub use config::{BridgeConfig, CONFIG_FILE_NAME};
pub use error::{LayerError, Result};
pub use format::{LayerFormat, DEFAULT_SEPARATOR, DEFAULT_TERMINATOR};
pub use generator::{GeneratorWrapper, SeededGenerator, ThreadRandomGenerator};
pub use inner::{InnerLayer, DEFAULT_INNER_DESCRIPTION};
pub use traits::{Describe, NumberGenerator};
pub use wrapper::{WrapperLayer, DEFAULT_SELF_DESCRIPTION};
