//! C entry points for the description wrapper.
//!
//! A `LayerdescWrapper` is an opaque handle owning one `WrapperLayer` and
//! its inner layer. The handle serializes access with a mutex so a foreign
//! runtime may share it between threads.

use std::ffi::c_char;

use layerdesc_core::WrapperLayer;
use parking_lot::Mutex;

use crate::status::{guard, LayerdescStatus};
use crate::strings::{handle, read_str, require_out, write_string};

/// Opaque wrapper handle.
pub struct LayerdescWrapper {
    layer: Mutex<WrapperLayer>,
}

impl LayerdescWrapper {
    fn new(layer: WrapperLayer) -> Self {
        Self {
            layer: Mutex::new(layer),
        }
    }
}

/// Create a wrapper with the default description and a fresh inner layer.
///
/// Release it with [`layerdesc_wrapper_free`].
#[no_mangle]
pub extern "C" fn layerdesc_wrapper_new() -> *mut LayerdescWrapper {
    Box::into_raw(Box::new(LayerdescWrapper::new(WrapperLayer::new())))
}

/// Release a wrapper handle. Passing null is a no-op.
///
/// # Safety
///
/// `wrapper` must be null or a handle from [`layerdesc_wrapper_new`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_free(wrapper: *mut LayerdescWrapper) {
    if !wrapper.is_null() {
        drop(Box::from_raw(wrapper));
    }
}

/// Read the wrapper's own description into `*out`.
///
/// On success `*out` holds a new string owned by the caller, released with
/// `layerdesc_string_free`.
///
/// # Safety
///
/// `wrapper` must be a live handle and `out` a writable pointer.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_get_self_description(
    wrapper: *const LayerdescWrapper,
    out: *mut *mut c_char,
) -> LayerdescStatus {
    guard("get_self_description", || {
        let wrapper = handle(wrapper, "wrapper")?;
        require_out(out, "out")?;
        let value = wrapper.layer.lock().self_description().to_string();
        write_string(out, value)
    })
}

/// Replace the wrapper's own description with a copy of `value`.
///
/// # Safety
///
/// `wrapper` must be a live handle and `value` a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_set_self_description(
    wrapper: *const LayerdescWrapper,
    value: *const c_char,
) -> LayerdescStatus {
    guard("set_self_description", || {
        let wrapper = handle(wrapper, "wrapper")?;
        let value = read_str(value, "value")?;
        wrapper.layer.lock().set_self_description(value);
        Ok(())
    })
}

/// Write the combined description of both layers into `*out`.
///
/// Handles from [`layerdesc_wrapper_new`] wrap the default inner layer,
/// which cannot fail, so `InnerFailure` is never returned for them. The
/// status is reserved for inner layers that can fail; in that case `*out`
/// is left untouched and the inner layer's message is available from
/// `layerdesc_last_error_message`.
///
/// # Safety
///
/// `wrapper` must be a live handle and `out` a writable pointer.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_describe(
    wrapper: *const LayerdescWrapper,
    out: *mut *mut c_char,
) -> LayerdescStatus {
    guard("describe", || {
        let wrapper = handle(wrapper, "wrapper")?;
        require_out(out, "out")?;
        let text = wrapper.layer.lock().describe()?;
        write_string(out, text)
    })
}

/// Read the inner layer's description into `*out`.
///
/// # Safety
///
/// `wrapper` must be a live handle and `out` a writable pointer.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_get_inner_description(
    wrapper: *const LayerdescWrapper,
    out: *mut *mut c_char,
) -> LayerdescStatus {
    guard("get_inner_description", || {
        let wrapper = handle(wrapper, "wrapper")?;
        require_out(out, "out")?;
        let value = wrapper.layer.lock().inner().description().to_string();
        write_string(out, value)
    })
}

/// Replace the inner layer's description with a copy of `value`.
///
/// # Safety
///
/// `wrapper` must be a live handle and `value` a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn layerdesc_wrapper_set_inner_description(
    wrapper: *const LayerdescWrapper,
    value: *const c_char,
) -> LayerdescStatus {
    guard("set_inner_description", || {
        let wrapper = handle(wrapper, "wrapper")?;
        let value = read_str(value, "value")?;
        wrapper.layer.lock().set_inner_description(value);
        Ok(())
    })
}
