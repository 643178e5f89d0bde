//! Scenarios driven through the C ABI re-exported by the facade

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use layerdesc::ffi::{
    layerdesc_string_free, layerdesc_wrapper_describe, layerdesc_wrapper_free,
    layerdesc_wrapper_new, layerdesc_wrapper_set_self_description, LayerdescStatus,
};
use layerdesc::WrapperLayer;

fn describe_via_abi(value: &str) -> String {
    let wrapper = layerdesc_wrapper_new();
    let value = CString::new(value).unwrap();
    let mut out: *mut c_char = ptr::null_mut();

    unsafe {
        assert_eq!(
            layerdesc_wrapper_set_self_description(wrapper, value.as_ptr()),
            LayerdescStatus::Ok
        );
        assert_eq!(
            layerdesc_wrapper_describe(wrapper, &mut out),
            LayerdescStatus::Ok
        );
        let text = CStr::from_ptr(out).to_str().unwrap().to_string();
        layerdesc_string_free(out);
        layerdesc_wrapper_free(wrapper);
        text
    }
}

#[test]
fn abi_and_rust_api_agree() {
    for value in ["objc-layer", "", "multi\nline", "ünïcödé"] {
        let mut wrapper = WrapperLayer::new();
        wrapper.set_self_description(value);
        assert_eq!(describe_via_abi(value), wrapper.describe().unwrap());
    }
}
