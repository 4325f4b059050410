//! Runtime helpers for code running inside `die` test bodies.
//!
//! Two families of functions live here, and both signal by unwinding with a typed payload from `die_core`:
//!
//! - [`testing`]: assertion primitives. A predicate that does not hold raises an
//!   [`AssertionFailure`](die_core::AssertionFailure), the only signal the harness treats as an *expected failure*.
//! - [`errors`]: raise helpers for bodies that throw on purpose. These raise a kind-tagged
//!   [`Exception`](die_core::Exception).

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod prelude;
pub mod testing;

pub use errors::{kind_name_of, raise, raise_error, raise_kind, raise_logic_error, raise_runtime_error};
pub use testing::{assert, assert_eq, assert_eq_opaque, assert_false, assert_ne, assert_ne_opaque, assert_true, fail};
