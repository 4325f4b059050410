//! Integration tests for registration, execution and classification.

use std::cell::Cell;
use std::rc::Rc;

use die::{ConsoleReporter, FailReason, Harness, ReportConfig, Verdict};
use die_stdlib::prelude::*;

fn quiet() -> Harness {
    Harness::with_reporter("integration", "", ConsoleReporter::new(Vec::new(), ReportConfig::new()))
}

fn verdicts(h: &Harness) -> Vec<(String, Option<Verdict>)> {
    h.results()
        .map(|(name, verdict)| (name.to_string(), verdict.cloned()))
        .collect()
}

fn only_verdict(h: &Harness) -> Verdict {
    let results = verdicts(h);
    assert_eq!(results.len(), 1);
    results[0].1.clone().expect("case should have been executed")
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn example_should_not_panic_with_holding_assertion_passes() {
    let mut h = quiet();
    h.add_should_not_panic("a", || assert_eq(1, 1));
    h.exec();
    assert_eq!(only_verdict(&h), Verdict::Pass);
}

#[test]
fn example_should_panic_with_failing_assert_ne_passes() {
    let mut h = quiet();
    h.add_should_panic("b", || assert_ne(1, 1));
    h.exec();
    assert_eq!(only_verdict(&h), Verdict::Pass);
}

#[test]
fn example_should_throw_with_matching_kind_passes() {
    let mut h = quiet();
    h.add_should_throw("c", Exception::runtime_error("burps"), "std::runtime_error", || {
        raise_runtime_error("burps")
    });
    h.exec();
    assert_eq!(only_verdict(&h), Verdict::Pass);
}

#[test]
fn example_should_throw_with_other_kind_fails_citing_mismatch() {
    let mut h = quiet();
    h.add_should_throw("d", Exception::runtime_error("burps"), "std::runtime_error", || {
        raise_logic_error("oops")
    });
    h.exec();

    let verdict = only_verdict(&h);
    let Verdict::Fail(FailReason::KindMismatch { expected_kind, actual }) = &verdict else {
        panic!("expected a kind mismatch, got {verdict:?}");
    };
    assert_eq!(expected_kind, "std::runtime_error");
    assert_eq!(actual.kind, "std::logic_error");
    assert!(verdict.reason().unwrap().to_string().contains("`std::logic_error` was thrown"));
}

#[test]
fn builtin_kind_and_its_spelling_are_interchangeable() {
    let mut h = quiet();
    h.add_should_throw("by enum", "burps", ErrorKind::RuntimeError, || {
        raise(Exception::new("std::runtime_error", "burps"))
    });
    h.add_should_throw("by name", "oops", "std::logic_error", || raise_kind(ErrorKind::LogicError, "oops"));
    h.add_should_throw("unqualified", "burps", "runtime_error", || raise_runtime_error("burps"));
    h.exec();

    let results = verdicts(&h);
    assert_eq!(results[0].1, Some(Verdict::Pass));
    assert_eq!(results[1].1, Some(Verdict::Pass));
    assert!(matches!(results[2].1, Some(Verdict::Fail(FailReason::KindMismatch { .. }))));
}

#[test]
fn custom_kind_names_match_verbatim() {
    let mut h = quiet();
    h.add_should_throw("custom", "a hairball", "HairballError", || {
        raise(Exception::new("HairballError", "cough"))
    });
    h.exec();
    assert_eq!(only_verdict(&h), Verdict::Pass);
}

// ============================================================================
// Classification of each expectation against each outcome
// ============================================================================

#[test]
fn should_not_panic_fails_on_assertion_and_exception() {
    let mut h = quiet();
    h.add_should_not_panic("assertion", || assert_eq(1, 2));
    h.add_should_not_panic("exception", || raise_runtime_error("burps"));
    h.exec();

    let results = verdicts(&h);
    assert!(matches!(results[0].1, Some(Verdict::Fail(FailReason::UnexpectedAssertion(_)))));
    assert!(matches!(results[1].1, Some(Verdict::Fail(FailReason::UnexpectedException(_)))));
}

#[test]
fn should_panic_fails_on_completion_and_wrong_failure_mode() {
    let mut h = quiet();
    h.add_should_panic("completes", || assert_ne(1, 2));
    h.add_should_panic("throws", || raise_logic_error("oops"));
    h.exec();

    let results = verdicts(&h);
    assert_eq!(results[0].1, Some(Verdict::Fail(FailReason::MissingAssertion)));
    assert!(matches!(results[1].1, Some(Verdict::Fail(FailReason::WrongFailureMode(_)))));
}

#[test]
fn should_throw_fails_on_completion_and_assertion() {
    let mut h = quiet();
    h.add_should_throw("completes", "burps", ErrorKind::RuntimeError, || {});
    h.add_should_throw("asserts", "burps", ErrorKind::RuntimeError, || assert(false));
    h.exec();

    let results = verdicts(&h);
    assert!(matches!(results[0].1, Some(Verdict::Fail(FailReason::MissingException { .. }))));
    assert!(matches!(
        results[1].1,
        Some(Verdict::Fail(FailReason::AssertionInsteadOfException { .. }))
    ));
}

#[test]
fn std_assert_macros_are_not_assertion_failures() {
    let mut h = quiet();
    h.add_should_panic("std assert", || std::assert_eq!(1, 2));
    h.add_should_throw("as panic", "a panic", "panic", || std::assert_eq!(1, 2));
    h.exec();

    let results = verdicts(&h);
    assert!(matches!(
        &results[0].1,
        Some(Verdict::Fail(FailReason::WrongFailureMode(e))) if e.kind == "panic"
    ));
    assert_eq!(results[1].1, Some(Verdict::Pass));
}

#[test]
fn foreign_errors_are_tagged_by_type_name() {
    let mut h = quiet();
    h.add_should_throw("parse", "a parse failure", "ParseIntError", || {
        match "kitty".parse::<u32>() {
            Ok(_) => {}
            Err(e) => raise_error(e),
        }
    });
    h.exec();
    assert_eq!(only_verdict(&h), Verdict::Pass);
}

// ============================================================================
// Harness-level properties
// ============================================================================

#[test]
fn failing_bodies_do_not_stop_later_cases() {
    let ran_last = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran_last);

    let mut h = quiet();
    h.add_should_not_panic("boom", || panic!("boom"));
    h.add_should_not_panic("assert", || assert_eq("a", "b"));
    h.add_should_not_panic("throw", || raise_runtime_error("burps"));
    h.add_should_not_panic("last", move || flag.set(true));
    h.exec();

    assert!(ran_last.get());
    let summary = h.summary();
    assert_eq!(summary.executed, 4);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 3);
}

#[test]
fn cases_run_in_registration_order() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));

    let mut h = quiet();
    for name in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        h.add_should_not_panic(name, move || order.borrow_mut().push(name));
    }
    h.exec();

    assert_eq!(*order.borrow(), ["first", "second", "third"]);
}

#[test]
fn exec_twice_reruns_bodies_and_reproduces_verdicts() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);

    let mut h = quiet();
    h.add_should_not_panic("counted", move || counter.set(counter.get() + 1));
    h.add_should_panic("fails", || assert_ne(1, 1));
    h.add_should_throw("kind", "burps", ErrorKind::RuntimeError, || raise_logic_error("oops"));

    h.exec();
    let first = verdicts(&h);
    h.exec();
    let second = verdicts(&h);

    assert_eq!(runs.get(), 2);
    assert_eq!(first, second);
}

#[test]
fn summary_before_exec_reports_zero_executed() {
    let mut h = quiet();
    h.add_should_not_panic("a", || {});
    h.add_should_panic("b", || assert_ne(1, 1));

    let summary = h.summary();
    assert_eq!(summary.registered, 2);
    assert_eq!(summary.executed, 0);
    assert!(h.display_summary().is_ok());
}

#[test]
fn failures_are_listed_in_registration_order() {
    let mut h = quiet();
    h.add_should_not_panic("zeta", || assert(false));
    h.add_should_not_panic("ok", || {});
    h.add_should_panic("alpha", || {});
    h.add_should_throw("mid", "x", ErrorKind::OutOfRange, || {});
    h.exec();

    let names: Vec<_> = h.summary().failures.into_iter().map(|f| f.name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn nested_harness_inside_a_body() {
    let mut outer = quiet();
    outer.add_should_not_panic("runs an inner harness", || {
        let mut inner = quiet();
        inner.add_should_panic("inner", || assert_eq(1, 2));
        inner.exec();
        assert_eq(inner.summary().passed, 1);
    });
    outer.exec();
    assert_eq!(only_verdict(&outer), Verdict::Pass);
}
