#![forbid(unsafe_code)]
//! die: a minimal in-process test harness
//!
//! Register named test cases with an expected outcome, run them, and get a pass/fail summary.
//! The workspace is split like this:
//!
//! - `die_core`: failure signals, exception kinds, expectation/outcome/verdict types and the pure classifier.
//! - `die_stdlib`: assertion primitives and raise helpers, called from inside test bodies.
//! - `die` (this crate): the [`Harness`] that registers, isolates, classifies and reports, plus the CLI.
//!
//! ## Panic Policy
//!
//! Unwinding is the *signal* inside test bodies, and nowhere else:
//!
//! - **Test bodies**: failing primitives unwind with typed payloads (`AssertionFailure`, `Exception`); the harness
//!   catches every one of them.
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `harness` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod harness;

pub use config::{ColorChoice, ReportConfig};
pub use harness::{ConsoleReporter, Harness, HarnessState, ReportError, Reporter, TestCase};

pub use die_core::{ErrorKind, Exception, ExecutionOutcome, Expectation, FailReason, Summary, Verdict};
