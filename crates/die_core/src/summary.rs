//! Aggregate counters over a test run.

use crate::verdict::{FailReason, Verdict};

/// One failing test case, as listed in a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub name: String,
    pub reason: FailReason,
}

/// Pass/fail totals for a harness, computed on demand from its cases and verdicts.
///
/// Invariant: `executed == passed + failed` and `executed <= registered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub registered: usize,
    /// Cases that have a verdict.
    pub executed: usize,
    pub passed: usize,
    pub failed: usize,
    /// Failing cases in registration order.
    pub failures: Vec<FailureRecord>,
}

impl Summary {
    /// Build a summary from `(name, verdict)` pairs in registration order.
    ///
    /// ## Parameters
    /// - `cases`: every registered case; `None` marks a case that has not been executed yet.
    pub fn from_verdicts<'a, I>(cases: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a Verdict>)>,
    {
        let mut summary = Summary::default();

        for (name, verdict) in cases {
            summary.registered += 1;
            match verdict {
                None => {}
                Some(Verdict::Pass) => {
                    summary.executed += 1;
                    summary.passed += 1;
                }
                Some(Verdict::Fail(reason)) => {
                    summary.executed += 1;
                    summary.failed += 1;
                    summary.failures.push(FailureRecord {
                        name: name.to_string(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        summary
    }

    /// Registered cases without a verdict.
    pub fn not_run(&self) -> usize {
        self.registered - self.executed
    }

    /// `true` when at least one case ran and none failed.
    pub fn is_success(&self) -> bool {
        self.executed > 0 && self.failed == 0
    }
}
