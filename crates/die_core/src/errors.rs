//! Failure signals raised from inside test bodies.
//!
//! Two payload types cross the unwind boundary between a test body and the harness:
//!
//! - [`AssertionFailure`]: raised **only** by the assertion primitives. This is the "expected failure" signal.
//! - [`Exception`]: anything a body throws on purpose, tagged with a kind name so the harness can match it against an
//!   expected kind without inspecting Rust types at run time.
//!
//! Keeping them as distinct types is what lets the harness tell "an assertion did not hold" apart from "the body
//! threw".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::kinds;

/// Kind assigned to a plain `panic!` (a `&str` or `String` payload).
pub const PANIC_KIND: &str = "panic";

/// Kind assigned to a panic payload of a type the harness cannot name.
pub const UNKNOWN_KIND: &str = "<unknown>";

/// Message used for payloads that carry no printable text.
pub const OPAQUE_PAYLOAD_MSG: &str = "opaque panic payload";

/// The signal raised by an assertion primitive whose predicate did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Human-readable description of the failed comparison.
    pub message: String,
    /// `file:line:column` of the failing call, when known.
    pub location: Option<String>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Attach the source location of the failing call.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}

/// A kind-tagged object thrown by a test body.
///
/// The canonical rendering is `Kind: message`, or just `Kind` when the message is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    /// Name of the exception category, compared verbatim against an expected kind.
    pub kind: String,
    pub message: String,
    /// `file:line:column` of the raise site, when known.
    pub location: Option<String>,
}

impl Exception {
    /// Create an exception with an arbitrary kind name.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create an exception of a builtin kind.
    pub fn of(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind.as_str(), message)
    }

    pub fn runtime_error(message: impl Into<String>) -> Self {
        Self::of(ErrorKind::RuntimeError, message)
    }

    pub fn logic_error(message: impl Into<String>) -> Self {
        Self::of(ErrorKind::LogicError, message)
    }

    /// Attach the source location of the raise site.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Resolve the kind against the builtin vocabulary.
    ///
    /// ## Returns
    /// - `Some(kind)` if the kind name is a builtin canonical spelling, `None` for custom or foreign kinds.
    pub fn builtin_kind(&self) -> Option<ErrorKind> {
        kinds::from_str(&self.kind)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for Exception {}

/// Builtin exception kinds.
///
/// Test bodies are free to throw any kind name; these are the ones the harness ships with a canonical spelling and
/// description (see [`crate::kinds::EXCEPTIONS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RuntimeError,
    LogicError,
    InvalidArgument,
    OutOfRange,
    Overflow,
    LengthError,
}

impl ErrorKind {
    /// Return the canonical spelling (e.g. `"std::runtime_error"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        kinds::as_str(self)
    }

    /// Return the one-line description.
    #[inline]
    pub fn description(self) -> &'static str {
        kinds::description(self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl AsRef<str> for ErrorKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returned when parsing a name that is not a builtin exception kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown exception kind `{0}`")]
pub struct UnknownErrorKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        kinds::from_str(s).ok_or_else(|| UnknownErrorKind(s.to_string()))
    }
}
