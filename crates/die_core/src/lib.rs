//! Provide the pure semantic core of the `die` test harness.
//!
//! This crate is intentionally small and dependency-light. It holds the types that both sides of a test run agree on:
//! - the runtime primitives (`die_stdlib`) use them to *signal* an assertion failure or a thrown exception, and
//! - the harness (`die`) uses them to *classify* what happened against what was expected.
//!
//! ## Notes
//!
//! - **No IO**, no global state, no panics. Catching unwinds and printing reports live in the harness crate.
//! - Classification is a pure function from `(Expectation, ExecutionOutcome)` to `Verdict`, see [`classify`].

pub mod errors;
pub mod kinds;
pub mod summary;
pub mod verdict;

pub use errors::{AssertionFailure, ErrorKind, Exception, UnknownErrorKind};
pub use summary::{FailureRecord, Summary};
pub use verdict::{ExecutionOutcome, Expectation, FailReason, Verdict, classify};
