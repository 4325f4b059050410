//! Expectations, observed outcomes and the verdict that relates them.

use thiserror::Error;

use crate::errors::{AssertionFailure, Exception};

/// What a registered test case declares will happen when its body runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The body runs to completion.
    NoFailure,
    /// The body raises an [`AssertionFailure`].
    Failure,
    /// The body throws an [`Exception`] whose kind equals `kind`.
    Exception {
        /// Human-readable description of what was expected (never compared).
        exemplar: String,
        kind: String,
    },
}

impl Expectation {
    /// Build an exception expectation from an exemplar value and an expected kind name.
    pub fn exception(exemplar: impl Into<String>, kind: impl Into<String>) -> Self {
        Expectation::Exception {
            exemplar: exemplar.into(),
            kind: kind.into(),
        }
    }
}

/// What actually happened when a test body ran.
///
/// Aborts (double panics, stack overflow) never produce a value: the process is gone before anything could be
/// classified, so there is no variant for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Completed,
    AssertionFailed(AssertionFailure),
    ExceptionThrown(Exception),
}

/// Why a test case failed: its expectation did not match its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailReason {
    #[error("expected no failure, but an assertion failed: {0}")]
    UnexpectedAssertion(AssertionFailure),

    #[error("expected no failure, but an exception was thrown: {0}")]
    UnexpectedException(Exception),

    #[error("expected an assertion failure, but the test completed")]
    MissingAssertion,

    #[error("expected an assertion failure, but an exception was thrown instead: {0}")]
    WrongFailureMode(Exception),

    #[error("expected exception of kind `{expected_kind}` ({exemplar}), but the test completed")]
    MissingException { exemplar: String, expected_kind: String },

    #[error("expected exception of kind `{expected_kind}`, but an assertion failed: {failure}")]
    AssertionInsteadOfException {
        expected_kind: String,
        failure: AssertionFailure,
    },

    #[error("expected exception of kind `{expected_kind}`, but `{}` was thrown: {}", .actual.kind, .actual.message)]
    KindMismatch { expected_kind: String, actual: Exception },
}

/// Pass/fail classification of one executed test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(FailReason),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Return the failure reason, if any.
    pub fn reason(&self) -> Option<&FailReason> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(reason) => Some(reason),
        }
    }
}

/// Classify an observed outcome against a declared expectation.
///
/// ## Parameters
/// - `expectation`: what the test case was registered with.
/// - `outcome`: what happened when its body ran.
///
/// ## Returns
/// - (`Verdict`): `Pass` when the outcome is the expected one, otherwise `Fail` with a reason naming the mismatch.
///
/// ## Notes
/// - Exception kinds are compared by exact name; the message and the exemplar never take part.
/// - Total over all inputs: classification itself cannot fail.
pub fn classify(expectation: &Expectation, outcome: &ExecutionOutcome) -> Verdict {
    use ExecutionOutcome::*;

    let reason = match (expectation, outcome) {
        (Expectation::NoFailure, Completed) => return Verdict::Pass,
        (Expectation::NoFailure, AssertionFailed(failure)) => FailReason::UnexpectedAssertion(failure.clone()),
        (Expectation::NoFailure, ExceptionThrown(e)) => FailReason::UnexpectedException(e.clone()),

        (Expectation::Failure, AssertionFailed(_)) => return Verdict::Pass,
        (Expectation::Failure, Completed) => FailReason::MissingAssertion,
        (Expectation::Failure, ExceptionThrown(e)) => FailReason::WrongFailureMode(e.clone()),

        (Expectation::Exception { kind, .. }, ExceptionThrown(e)) if e.kind == *kind => return Verdict::Pass,
        (Expectation::Exception { exemplar, kind }, Completed) => FailReason::MissingException {
            exemplar: exemplar.clone(),
            expected_kind: kind.clone(),
        },
        (Expectation::Exception { kind, .. }, AssertionFailed(failure)) => FailReason::AssertionInsteadOfException {
            expected_kind: kind.clone(),
            failure: failure.clone(),
        },
        (Expectation::Exception { kind, .. }, ExceptionThrown(e)) => FailReason::KindMismatch {
            expected_kind: kind.clone(),
            actual: e.clone(),
        },
    };

    Verdict::Fail(reason)
}
