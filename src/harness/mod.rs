//! The test harness: registration, isolated execution, classification and reporting.
//!
//! ```rust
//! use die::Harness;
//! use die::config::ReportConfig;
//! use die::harness::ConsoleReporter;
//! use die_stdlib::prelude::*;
//!
//! let mut tests = Harness::with_reporter("kitty", "", ConsoleReporter::new(Vec::new(), ReportConfig::new()));
//! tests.add_should_not_panic("smart kitty", || assert_eq(1 + 1, 2));
//! tests.add_should_panic("kitty panic", || assert_ne(1, 1));
//! tests.add_should_throw("kitty throws up", Exception::runtime_error("burps"), ErrorKind::RuntimeError, || {
//!     raise_runtime_error("burps")
//! });
//! tests.exec();
//!
//! let summary = tests.summary();
//! assert_eq!((summary.passed, summary.failed), (3, 0));
//! ```
//!
//! ## Execution model
//!
//! Cases run one at a time on the calling thread, in registration order. A body that never returns blocks the
//! harness; there is no timeout.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod isolation;
pub mod report;

use std::fmt::{self, Display};

use die_core::{Expectation, Summary, Verdict, classify};

use crate::config::ReportConfig;
pub use report::{ConsoleReporter, ReportError, Reporter};

/// Lifecycle of a harness. Each state is entered only through the matching call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    /// Nothing registered yet.
    Empty,
    /// At least one case has no verdict yet.
    Populated,
    /// Every case has a verdict.
    Executed,
    /// The summary of an executed run has been displayed.
    Reported,
}

/// One registered unit of work: a name, an expectation and the body that is checked against it.
pub struct TestCase {
    name: String,
    expectation: Expectation,
    body: Box<dyn FnMut()>,
    verdict: Option<Verdict>,
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// The verdict of the latest `exec()`, or `None` if the case has not run yet.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("expectation", &self.expectation)
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of test cases plus the reporter that renders them.
pub struct Harness {
    title: String,
    description: String,
    cases: Vec<TestCase>,
    state: HarnessState,
    reporter: Box<dyn Reporter>,
}

impl Harness {
    /// Create an empty harness that reports to stdout, colored when stdout is a terminal.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_reporter(title, description, ConsoleReporter::stdout(ReportConfig::from_env()))
    }

    /// Create an empty harness with a custom reporter.
    pub fn with_reporter(
        title: impl Into<String>,
        description: impl Into<String>,
        reporter: impl Reporter + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            cases: Vec::new(),
            state: HarnessState::Empty,
            reporter: Box::new(reporter),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Registered cases in registration order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// `(name, verdict)` for every case in registration order; the verdict is `None` until the case has run.
    pub fn results(&self) -> impl Iterator<Item = (&str, Option<&Verdict>)> + '_ {
        self.cases.iter().map(|case| (case.name(), case.verdict()))
    }

    /// Totals over the current verdicts.
    pub fn summary(&self) -> Summary {
        Summary::from_verdicts(self.results())
    }

    /// Print the title and description.
    pub fn display_greetings(&mut self) -> Result<(), ReportError> {
        self.reporter.on_greetings(&self.title, &self.description)?;
        Ok(())
    }

    /// Register a case whose body is expected to run to completion.
    pub fn add_should_not_panic(&mut self, name: impl Into<String>, body: impl FnMut() + 'static) {
        self.register(name.into(), Expectation::NoFailure, Box::new(body));
    }

    /// Register a case whose body is expected to fail an assertion.
    pub fn add_should_panic(&mut self, name: impl Into<String>, body: impl FnMut() + 'static) {
        self.register(name.into(), Expectation::Failure, Box::new(body));
    }

    /// Register a case whose body is expected to throw an exception of `expected_kind`.
    ///
    /// `exemplar` only describes what was expected in failure reports; it is never compared against what was thrown.
    pub fn add_should_throw(
        &mut self,
        name: impl Into<String>,
        exemplar: impl Display,
        expected_kind: impl AsRef<str>,
        body: impl FnMut() + 'static,
    ) {
        let expectation = Expectation::exception(exemplar.to_string(), expected_kind.as_ref());
        self.register(name.into(), expectation, Box::new(body));
    }

    fn register(&mut self, name: String, expectation: Expectation, body: Box<dyn FnMut()>) {
        if self.cases.iter().any(|case| case.name == name) {
            tracing::warn!(case = %name, "test case name registered more than once");
        }
        tracing::debug!(case = %name, ?expectation, "registered test case");

        self.cases.push(TestCase {
            name,
            expectation,
            body,
            verdict: None,
        });
        self.state = HarnessState::Populated;
    }

    /// Run every registered case in order and store its verdict, replacing any verdict from a previous run.
    ///
    /// Assertion failures and thrown exceptions never escape this call.
    pub fn exec(&mut self) {
        let _span = tracing::info_span!("exec", harness = %self.title).entered();

        for case in &mut self.cases {
            tracing::debug!(case = %case.name, "running test case");
            let outcome = isolation::run_isolated(&mut *case.body);
            let verdict = classify(&case.expectation, &outcome);
            match &verdict {
                Verdict::Pass => tracing::debug!(case = %case.name, "passed"),
                Verdict::Fail(reason) => tracing::debug!(case = %case.name, %reason, "failed"),
            }
            case.verdict = Some(verdict);
        }

        if !self.cases.is_empty() {
            self.state = HarnessState::Executed;
        }

        let summary = self.summary();
        tracing::info!(
            total = summary.registered,
            passed = summary.passed,
            failed = summary.failed,
            "test run complete"
        );
    }

    /// Print per-case progress, the failing cases with their reasons, and the totals.
    ///
    /// Before `exec()` this reports that no cases were executed.
    pub fn display_summary(&mut self) -> Result<(), ReportError> {
        let summary = self.summary();
        self.reporter.on_summary(&self.cases, &summary)?;
        if self.state == HarnessState::Executed {
            self.state = HarnessState::Reported;
        }
        Ok(())
    }
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("cases", &self.cases)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
