//! Fault isolation for test bodies.
//!
//! A body runs inside [`panic::catch_unwind`]; whatever unwinds out of it is turned into an [`ExecutionOutcome`] by
//! downcasting the payload:
//!
//! | payload                | outcome                                      |
//! |------------------------|----------------------------------------------|
//! | `AssertionFailure`     | `AssertionFailed`                            |
//! | `Exception`            | `ExceptionThrown` with the exception's kind  |
//! | `&'static str`/`String`| `ExceptionThrown`, kind [`PANIC_KIND`]       |
//! | anything else          | `ExceptionThrown`, kind [`UNKNOWN_KIND`]     |
//!
//! While a body runs, the panic hook stays quiet on this thread: the harness reports the failure itself, so the
//! default "thread panicked at" message would only be noise. Other threads keep the previous hook.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use die_core::errors::{OPAQUE_PAYLOAD_MSG, PANIC_KIND, UNKNOWN_KIND};
use die_core::{AssertionFailure, Exception, ExecutionOutcome};

thread_local! {
    static ISOLATED: Cell<bool> = const { Cell::new(false) };
    static LAST_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static QUIET_HOOK: Once = Once::new();

/// Install the process-wide hook once. It chains to whatever hook was installed before it.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &panic::PanicHookInfo<'_>| {
            if ISOLATED.with(Cell::get) {
                let location = info.location().map(ToString::to_string);
                tracing::trace!(location = location.as_deref().unwrap_or("<unknown>"), "test body unwound");
                LAST_LOCATION.with(|slot| *slot.borrow_mut() = location);
            } else {
                previous(info);
            }
        }));
    });
}

/// Marks the current thread as running an isolated body; restores the previous mark on drop so nested harnesses
/// behave.
struct IsolationGuard {
    was_isolated: bool,
}

impl IsolationGuard {
    fn enter() -> Self {
        let was_isolated = ISOLATED.with(|flag| flag.replace(true));
        Self { was_isolated }
    }
}

impl Drop for IsolationGuard {
    fn drop(&mut self) {
        ISOLATED.with(|flag| flag.set(self.was_isolated));
    }
}

/// Run `body` to completion or unwind, and report which.
pub(crate) fn run_isolated(body: &mut dyn FnMut()) -> ExecutionOutcome {
    install_quiet_hook();
    LAST_LOCATION.with(|slot| slot.borrow_mut().take());

    let result = {
        let _guard = IsolationGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(|| body()))
    };

    match result {
        Ok(()) => ExecutionOutcome::Completed,
        Err(payload) => {
            let location = LAST_LOCATION.with(|slot| slot.borrow_mut().take());
            outcome_from_payload(payload, location)
        }
    }
}

/// Classify a panic payload. Never fails: unknown payload types get [`UNKNOWN_KIND`].
pub(crate) fn outcome_from_payload(payload: Box<dyn Any + Send>, location: Option<String>) -> ExecutionOutcome {
    let payload = match payload.downcast::<AssertionFailure>() {
        Ok(failure) => {
            let mut failure = *failure;
            if failure.location.is_none() {
                failure.location = location;
            }
            return ExecutionOutcome::AssertionFailed(failure);
        }
        Err(other) => other,
    };

    let payload = match payload.downcast::<Exception>() {
        Ok(exception) => {
            let mut exception = *exception;
            if exception.location.is_none() {
                exception.location = location;
            }
            return ExecutionOutcome::ExceptionThrown(exception);
        }
        Err(other) => other,
    };

    let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some((*s).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    };

    let mut exception = match message {
        Some(message) => Exception::new(PANIC_KIND, message),
        None => Exception::new(UNKNOWN_KIND, OPAQUE_PAYLOAD_MSG),
    };
    exception.location = location;
    ExecutionOutcome::ExceptionThrown(exception)
}
