//! Assertion primitives for test bodies.
//!
//! Every primitive raises [`AssertionFailure`] via [`std::panic::panic_any`] and is `#[track_caller]`, so the recorded
//! location is the call site inside the test body rather than this module.

use std::fmt::Debug;
use std::panic::{self, Location};

use die_core::AssertionFailure;

#[cold]
#[track_caller]
fn raise_assertion(message: String) -> ! {
    let location = Location::caller();
    panic::panic_any(AssertionFailure::new(message).at(location.to_string()))
}

/// Assert that a condition is true.
///
/// # Panics
///
/// Raises an [`AssertionFailure`] if `condition` is false.
#[track_caller]
pub fn assert(condition: bool) {
    if !condition {
        raise_assertion("assertion failed".to_string());
    }
}

/// Assert that two values are equal.
///
/// # Panics
///
/// Raises an [`AssertionFailure`] if `left != right`.
#[track_caller]
pub fn assert_eq<L, R>(left: L, right: R)
where
    L: PartialEq<R> + Debug,
    R: Debug,
{
    if left != right {
        raise_assertion(format!(
            "assertion failed: left == right\n  left:  {:?}\n  right: {:?}",
            left, right
        ));
    }
}

/// Assert that two values are not equal.
///
/// # Panics
///
/// Raises an [`AssertionFailure`] if `left == right`.
#[track_caller]
pub fn assert_ne<L, R>(left: L, right: R)
where
    L: PartialEq<R> + Debug,
    R: Debug,
{
    if left == right {
        raise_assertion(format!(
            "assertion failed: left != right\n  left:  {:?}\n  right: {:?}",
            left, right
        ));
    }
}

/// [`assert_eq`] for values without a `Debug` rendering.
///
/// # Panics
///
/// Raises an [`AssertionFailure`] reading `values differ` if `left != right`.
#[track_caller]
pub fn assert_eq_opaque<L: PartialEq<R>, R>(left: L, right: R) {
    if left != right {
        raise_assertion("assertion failed: values differ".to_string());
    }
}

/// [`assert_ne`] for values without a `Debug` rendering.
///
/// # Panics
///
/// Raises an [`AssertionFailure`] reading `values are equal` if `left == right`.
#[track_caller]
pub fn assert_ne_opaque<L: PartialEq<R>, R>(left: L, right: R) {
    if left == right {
        raise_assertion("assertion failed: values are equal".to_string());
    }
}

/// Assert that a condition is true.
#[track_caller]
pub fn assert_true(condition: bool) {
    assert(condition);
}

/// Assert that a condition is false.
#[track_caller]
pub fn assert_false(condition: bool) {
    assert(!condition);
}

/// Explicitly fail a test with a message.
///
/// # Panics
///
/// Always raises an [`AssertionFailure`] carrying `msg`.
#[track_caller]
pub fn fail(msg: impl Into<String>) -> ! {
    raise_assertion(msg.into())
}
