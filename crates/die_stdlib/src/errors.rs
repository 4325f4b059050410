//! Raise helpers for test bodies that throw on purpose.
//!
//! The kind taxonomy and the `Kind: message` formatting are owned by `die_core`; this module only turns those values
//! into unwinds the harness can catch and classify.

use std::any::type_name;
use std::error::Error;
use std::panic::{self, Location};

use die_core::{ErrorKind, Exception};

/// Throw an exception. The raise site is recorded unless the exception already carries a location.
#[cold]
#[track_caller]
pub fn raise(exception: Exception) -> ! {
    let exception = match exception.location {
        Some(_) => exception,
        None => exception.at(Location::caller().to_string()),
    };
    panic::panic_any(exception)
}

/// Throw an exception of a builtin kind.
#[cold]
#[track_caller]
pub fn raise_kind(kind: ErrorKind, msg: impl Into<String>) -> ! {
    raise(Exception::of(kind, msg))
}

/// Throw a `std::runtime_error`.
#[cold]
#[track_caller]
pub fn raise_runtime_error(msg: impl Into<String>) -> ! {
    raise_kind(ErrorKind::RuntimeError, msg)
}

/// Throw a `std::logic_error`.
#[cold]
#[track_caller]
pub fn raise_logic_error(msg: impl Into<String>) -> ! {
    raise_kind(ErrorKind::LogicError, msg)
}

/// Throw an arbitrary error value.
///
/// The kind is the unqualified type name of `E` (see [`kind_name_of`]) and the message is its `Display` output, so
/// `raise_error("x".parse::<u8>().unwrap_err())` throws kind `ParseIntError`.
#[cold]
#[track_caller]
pub fn raise_error<E: Error>(err: E) -> ! {
    raise(Exception::new(kind_name_of::<E>(), err.to_string()))
}

/// Return the kind name used for errors of type `T`: the last path segment of its type name, without generics.
///
/// ```rust
/// assert_eq!(die_stdlib::kind_name_of::<std::num::ParseIntError>(), "ParseIntError");
/// assert_eq!(die_stdlib::kind_name_of::<Vec<String>>(), "Vec");
/// ```
pub fn kind_name_of<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
