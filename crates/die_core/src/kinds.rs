//! Builtin exception-kind vocabulary.
//!
//! Registry-first: every builtin [`ErrorKind`] has exactly one entry in [`EXCEPTIONS`], and the entry order matches
//! the enum declaration order so lookups are a plain index.
//!
//! ## Notes
//! - Canonical spellings use the `std::snake_case` names callers already write when declaring an expected kind,
//!   e.g. `"std::runtime_error"`.
//! - Matching is case-sensitive and exact. There are no aliases: a kind name either is a canonical spelling or it is
//!   a custom kind.

use crate::errors::ErrorKind;

/// Metadata for a builtin exception kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionInfo {
    pub id: ErrorKind,
    /// Canonical spelling, compared verbatim against expected kind names.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of builtin exception kinds, in [`ErrorKind`] declaration order.
pub const EXCEPTIONS: &[ExceptionInfo] = &[
    info(
        ErrorKind::RuntimeError,
        "std::runtime_error",
        "Raised for errors that can only be detected while the program runs.",
    ),
    info(
        ErrorKind::LogicError,
        "std::logic_error",
        "Raised when a precondition or class invariant of the program is violated.",
    ),
    info(
        ErrorKind::InvalidArgument,
        "std::invalid_argument",
        "Raised when an argument value is not accepted by the callee.",
    ),
    info(
        ErrorKind::OutOfRange,
        "std::out_of_range",
        "Raised when an index or key lies outside the valid range.",
    ),
    info(
        ErrorKind::Overflow,
        "std::overflow_error",
        "Raised when an arithmetic result does not fit its destination type.",
    ),
    info(
        ErrorKind::LengthError,
        "std::length_error",
        "Raised when a requested size exceeds what the container can hold.",
    ),
];

/// Return the canonical spelling for an exception kind (e.g. `"std::runtime_error"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an exception kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Resolve a spelling to a builtin exception kind.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    EXCEPTIONS.iter().find(|e| e.canonical == name).map(|e| e.id)
}

/// Return full metadata for an exception kind.
#[inline]
pub fn info_for(kind: ErrorKind) -> &'static ExceptionInfo {
    &EXCEPTIONS[kind as usize]
}

const fn info(id: ErrorKind, canonical: &'static str, description: &'static str) -> ExceptionInfo {
    ExceptionInfo {
        id,
        canonical,
        description,
    }
}
