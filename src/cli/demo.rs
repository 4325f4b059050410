//! The built-in "hello kitty" demonstration suite run by `die run`.

use die_stdlib::prelude::*;

use crate::config::ReportConfig;
use crate::harness::{ConsoleReporter, Harness};

pub const TITLE: &str = "hello kitty";
pub const DESCRIPTION: &str = "Testing the powers of Hello Kitty!";

/// Build the demonstration suite, reporting to stdout with `config`.
pub fn hello_kitty(config: ReportConfig) -> Harness {
    let mut tests = Harness::with_reporter(TITLE, DESCRIPTION, ConsoleReporter::stdout(config));

    tests.add_should_not_panic("smart kitty", || {
        let mut i = 0;
        i += 1;
        assert_eq(i, 1);
    });
    tests.add_should_panic("kitty panic", || {
        let mut i = 0;
        i += 1;
        assert_ne(i, 1);
    });
    tests.add_should_throw(
        "kitty throws up",
        Exception::runtime_error("burps"),
        "std::runtime_error",
        || raise_runtime_error("burps"),
    );

    tests
}
