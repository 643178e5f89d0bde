//! Status codes and error plumbing for the C ABI.
//!
//! Nothing that unwinds or carries Rust types crosses the boundary: every
//! entry point reports a [`LayerdescStatus`] and, for failures, leaves a
//! message in a thread-local slot readable through
//! `layerdesc_last_error_message`.

use std::cell::RefCell;
use std::ffi::{CString, NulError};
use std::panic::{self, AssertUnwindSafe};
use std::str::Utf8Error;

use layerdesc_core::LayerError;
use thiserror::Error;

/// Result code returned by every fallible entry point.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerdescStatus {
    /// The call succeeded.
    Ok = 0,
    /// A required pointer argument was null.
    NullPointer = 1,
    /// An input string was not valid UTF-8.
    InvalidUtf8 = 2,
    /// An output string contained an interior NUL byte.
    InteriorNul = 3,
    /// The inner layer failed to describe itself.
    InnerFailure = 4,
    /// A generator was asked for an empty range.
    InvalidRange = 5,
    /// A Rust panic was caught at the boundary.
    Panic = 6,
}

/// Failures raised while servicing a C call.
#[derive(Debug, Error)]
pub(crate) enum FfiError {
    #[error("null pointer passed for `{0}`")]
    NullPointer(&'static str),

    #[error("invalid UTF-8 in `{what}`: {source}")]
    InvalidUtf8 {
        what: &'static str,
        #[source]
        source: Utf8Error,
    },

    #[error("string cannot cross the boundary: {0}")]
    InteriorNul(#[from] NulError),

    #[error(transparent)]
    Layer(#[from] LayerError),
}

impl FfiError {
    pub(crate) fn status(&self) -> LayerdescStatus {
        match self {
            FfiError::NullPointer(_) => LayerdescStatus::NullPointer,
            FfiError::InvalidUtf8 { .. } => LayerdescStatus::InvalidUtf8,
            FfiError::InteriorNul(_) => LayerdescStatus::InteriorNul,
            FfiError::Layer(LayerError::InvalidRange { .. }) => LayerdescStatus::InvalidRange,
            FfiError::Layer(_) => LayerdescStatus::InnerFailure,
        }
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(message: String) {
    // Interior NULs are replaced so the message itself can always be returned.
    let message = CString::new(message.replace('\0', "\u{FFFD}")).ok();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Copy of the last error message recorded on this thread, if any.
pub(crate) fn last_error() -> Option<CString> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Run one entry point body, translating errors and panics into a status.
pub(crate) fn guard<F>(op: &'static str, body: F) -> LayerdescStatus
where
    F: FnOnce() -> Result<(), FfiError>,
{
    // Handles hold parking_lot mutexes, which do not poison; a panic mid-call
    // leaves the guarded value in whatever state it had reached.
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => {
            clear_last_error();
            LayerdescStatus::Ok
        }
        Ok(Err(e)) => {
            let status = e.status();
            tracing::warn!(op, ?status, error = %e, "layerdesc call failed");
            set_last_error(e.to_string());
            status
        }
        Err(_) => {
            tracing::error!(op, "panic caught at layerdesc boundary");
            set_last_error(format!("panic during {}", op));
            LayerdescStatus::Panic
        }
    }
}
