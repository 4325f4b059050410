//! Property-based tests for the harness
//!
//! These tests use proptest to register random mixes of expectations and body
//! behaviours, then check the harness against a small independent model.

use die::{ConsoleReporter, ErrorKind, Harness, ReportConfig, Verdict};
use die_stdlib::prelude::{assert_eq as die_assert_eq, raise_kind};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behaviour {
    Complete,
    Assert,
    Throw(ErrorKind),
    Panic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    NoFailure,
    Failure,
    Throw(ErrorKind),
}

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::RuntimeError),
        Just(ErrorKind::LogicError),
        Just(ErrorKind::OutOfRange),
    ]
}

fn behaviour_strategy() -> impl Strategy<Value = Behaviour> {
    prop_oneof![
        Just(Behaviour::Complete),
        Just(Behaviour::Assert),
        kind_strategy().prop_map(Behaviour::Throw),
        Just(Behaviour::Panic),
    ]
}

fn expect_strategy() -> impl Strategy<Value = Expect> {
    prop_oneof![
        Just(Expect::NoFailure),
        Just(Expect::Failure),
        kind_strategy().prop_map(Expect::Throw),
    ]
}

/// The expected verdict, computed without the harness.
fn model_passes(expect: Expect, behaviour: Behaviour) -> bool {
    match (expect, behaviour) {
        (Expect::NoFailure, Behaviour::Complete) => true,
        (Expect::Failure, Behaviour::Assert) => true,
        (Expect::Throw(expected), Behaviour::Throw(thrown)) => expected == thrown,
        _ => false,
    }
}

fn build(cases: &[(Expect, Behaviour)]) -> Harness {
    let mut h = Harness::with_reporter("prop", "", ConsoleReporter::new(Vec::new(), ReportConfig::new()));

    for (index, &(expect, behaviour)) in cases.iter().enumerate() {
        let name = format!("case {index}");
        let body = move || match behaviour {
            Behaviour::Complete => {}
            Behaviour::Assert => die_assert_eq(1, 2),
            Behaviour::Throw(kind) => raise_kind(kind, "thrown"),
            Behaviour::Panic => panic!("plain panic"),
        };
        match expect {
            Expect::NoFailure => h.add_should_not_panic(name, body),
            Expect::Failure => h.add_should_panic(name, body),
            Expect::Throw(kind) => h.add_should_throw(name, "exemplar", kind, body),
        }
    }

    h
}

fn case_strategy() -> impl Strategy<Value = Vec<(Expect, Behaviour)>> {
    prop::collection::vec((expect_strategy(), behaviour_strategy()), 0..12)
}

#[cfg(test)]
mod harness_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: every case gets exactly one verdict, and it matches the model
        #[test]
        fn verdicts_follow_the_model(cases in case_strategy()) {
            let mut h = build(&cases);
            h.exec();

            let results: Vec<_> = h.results().collect();
            prop_assert_eq!(results.len(), cases.len());
            for ((_, verdict), &(expect, behaviour)) in results.iter().zip(&cases) {
                let verdict = verdict.expect("every case has a verdict after exec");
                prop_assert_eq!(verdict.is_pass(), model_passes(expect, behaviour));
            }
        }

        /// Property: totals add up (executed == passed + failed == registered)
        #[test]
        fn totals_add_up(cases in case_strategy()) {
            let mut h = build(&cases);
            h.exec();

            let summary = h.summary();
            prop_assert_eq!(summary.registered, cases.len());
            prop_assert_eq!(summary.executed, summary.passed + summary.failed);
            prop_assert_eq!(summary.executed, summary.registered);
            prop_assert_eq!(summary.failures.len(), summary.failed);
        }

        /// Property: failing cases are listed in registration order
        #[test]
        fn failures_keep_registration_order(cases in case_strategy()) {
            let mut h = build(&cases);
            h.exec();

            let expected: Vec<String> = cases
                .iter()
                .enumerate()
                .filter(|&(_, &(expect, behaviour))| !model_passes(expect, behaviour))
                .map(|(index, _)| format!("case {index}"))
                .collect();
            let actual: Vec<String> = h.summary().failures.into_iter().map(|f| f.name).collect();
            prop_assert_eq!(actual, expected);
        }

        /// Property: exec is idempotent for deterministic bodies
        #[test]
        fn exec_is_idempotent(cases in case_strategy()) {
            let mut h = build(&cases);
            h.exec();
            let first: Vec<Option<Verdict>> = h.results().map(|(_, v)| v.cloned()).collect();
            h.exec();
            let second: Vec<Option<Verdict>> = h.results().map(|(_, v)| v.cloned()).collect();
            prop_assert_eq!(first, second);
        }
    }
}
