//! Glob-importable set of everything a test body usually needs.
//!
//! ```rust
//! use die_stdlib::prelude::*;
//!
//! assert_ne(1, 2);
//! ```

pub use crate::errors::{raise, raise_error, raise_kind, raise_logic_error, raise_runtime_error};
pub use crate::testing::{
    assert, assert_eq, assert_eq_opaque, assert_false, assert_ne, assert_ne_opaque, assert_true, fail,
};
pub use die_core::{ErrorKind, Exception};
