//! Bridge Comprehensive Test Suite
//!
//! End-to-end coverage of the description bridge through the `layerdesc`
//! facade.
//!
//! ## Areas Covered
//!
//! - `layering`: stacking wrappers and substituting inner layers
//! - `config_flow`: building wrappers from `layerdesc.toml`
//! - `boundary`: the same scenarios driven through the C ABI
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test bridge_comprehensive
//! cargo test --test bridge_comprehensive layering::
//! ```

mod boundary;
mod config_flow;
mod layering;
