//! C string and pointer helpers shared by the entry points.

use std::ffi::{c_char, CStr, CString};

use crate::status::FfiError;

/// Borrow a handle from a raw pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a live `T` for the duration of `'a`.
pub(crate) unsafe fn handle<'a, T>(ptr: *const T, what: &'static str) -> Result<&'a T, FfiError> {
    // SAFETY: upheld by the caller; null is reported instead of dereferenced.
    unsafe { ptr.as_ref() }.ok_or(FfiError::NullPointer(what))
}

/// Borrow a UTF-8 string from a NUL-terminated C string.
///
/// # Safety
///
/// `ptr` must be null or a valid NUL-terminated string live for `'a`.
pub(crate) unsafe fn read_str<'a>(
    ptr: *const c_char,
    what: &'static str,
) -> Result<&'a str, FfiError> {
    if ptr.is_null() {
        return Err(FfiError::NullPointer(what));
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|source| FfiError::InvalidUtf8 { what, source })
}

/// Check that an out-pointer can be written before doing any work.
pub(crate) fn require_out<T>(out: *mut T, what: &'static str) -> Result<(), FfiError> {
    if out.is_null() {
        return Err(FfiError::NullPointer(what));
    }
    Ok(())
}

/// Hand an owned string to the caller through `out`.
///
/// The caller releases it with `layerdesc_string_free`.
///
/// # Safety
///
/// `out` must be non-null and valid for a single pointer write.
pub(crate) unsafe fn write_string(out: *mut *mut c_char, value: String) -> Result<(), FfiError> {
    let value = CString::new(value)?;
    // SAFETY: `out` was checked by `require_out` and is writable per the caller.
    unsafe { *out = value.into_raw() };
    Ok(())
}
