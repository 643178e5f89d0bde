//! layerdesc - cross-language description bridge
//!
//! A boundary object reports a single identity string composed from two
//! layers: the wrapper that faces the foreign caller and the implementation
//! layer it wraps.
//!
//! # Quick Start
//!
//! ```
//! use layerdesc::WrapperLayer;
//!
//! let mut wrapper = WrapperLayer::new();
//! wrapper.set_self_description("objc-layer");
//!
//! let text = wrapper.describe().unwrap();
//! assert!(text.contains("objc-layer"));
//! assert!(text.contains("swift-layer"));
//! ```
//!
//! # Architecture
//!
//! The Rust API lives in `layerdesc-core` and is re-exported here. The C
//! ABI for foreign runtimes is available under [`ffi`].

pub use layerdesc_core::*;

/// C ABI surface (opaque handles, status codes, owned C strings).
pub mod ffi {
    pub use layerdesc_ffi::*;
}
