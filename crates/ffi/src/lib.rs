//! C ABI for the layerdesc description bridge.
//!
//! Bindings are thin FFI wrappers; all semantics come from
//! `layerdesc-core`.
//!
//! ## Architecture
//!
//! ```text
//! foreign runtime → C ABI functions → WrapperLayer::describe() → InnerLayer
//! ```
//!
//! ## Conventions
//!
//! - Objects cross the boundary as opaque handles created by `*_new` and
//!   released by `*_free`.
//! - Fallible calls return a [`LayerdescStatus`]; results come back through
//!   out-pointers.
//! - Strings handed out by this library are released with
//!   [`layerdesc_string_free`].
//! - After a non-`Ok` status, [`layerdesc_last_error_message`] explains it.
//! - Every call that returns a [`LayerdescStatus`] catches panics and
//!   reports them as `Panic`. Constructors and `*_free` functions do no
//!   fallible work and return no status.
//!
//! ## Usage (C side)
//!
//! ```c
//! LayerdescWrapper *w = layerdesc_wrapper_new();
//! char *text = NULL;
//! if (layerdesc_wrapper_describe(w, &text) == 0) {
//!     puts(text);
//!     layerdesc_string_free(text);
//! }
//! layerdesc_wrapper_free(w);
//! ```

#![warn(clippy::all)]

mod generator;
mod status;
mod strings;
mod wrapper;

use std::ffi::{c_char, CString};

use once_cell::sync::OnceCell;

pub use generator::{
    layerdesc_generator_free, layerdesc_generator_generate, layerdesc_generator_new,
    layerdesc_generator_new_seeded, LayerdescGenerator,
};
pub use status::LayerdescStatus;
pub use wrapper::{
    layerdesc_wrapper_describe, layerdesc_wrapper_free, layerdesc_wrapper_get_inner_description,
    layerdesc_wrapper_get_self_description, layerdesc_wrapper_new,
    layerdesc_wrapper_set_inner_description, layerdesc_wrapper_set_self_description,
    LayerdescWrapper,
};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Safe to call any number of times. If the host process already installed
/// a global subscriber, that one is kept.
#[no_mangle]
pub extern "C" fn layerdesc_init_logging() -> LayerdescStatus {
    status::guard("init_logging", || {
        LOGGING.get_or_init(|| {
            let installed = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
            match installed {
                Ok(()) => tracing::debug!("tracing initialized"),
                Err(e) => tracing::debug!(error = %e, "keeping existing tracing subscriber"),
            }
        });
        Ok(())
    })
}

/// Free a string returned by layerdesc functions. Passing null is a no-op.
///
/// # Safety
///
/// Only call this on strings returned by other `layerdesc_*` functions, and
/// at most once per string.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Message for the most recent failed call on this thread.
///
/// Returns null if the last call on this thread that returns a
/// [`LayerdescStatus`] succeeded. Constructors, `*_free` functions and this
/// function neither set nor clear the message. A non-null result is owned by
/// the caller and released with [`layerdesc_string_free`].
#[no_mangle]
pub extern "C" fn layerdesc_last_error_message() -> *mut c_char {
    status::last_error()
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Version of the layerdesc library as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn layerdesc_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}
