//! Panics as failures.
//!
//! These constructors catch a panic raised while running a computation and
//! report its payload as the failure, so a panicking thunk or future can be
//! classified, swallowed or tapped like any other failing one. Payloads are
//! classified with [`Is`](crate::classify::Is), usually
//! `Is<&'static str>` or `Is<String>`.
//!
//! The wrapped computation is asserted unwind-safe: state it shares with the
//! caller may be observed half-updated after a caught panic.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Immediate;
use crate::classify::PanicPayload;

/// Wraps a thunk whose panics become failures.
///
/// # Examples
///
/// ```rust
/// use itry::computation::{immediate_unwind, panic_message};
///
/// let computation = immediate_unwind(|| -> i32 { panic!("boom") });
/// let payload = computation.run().unwrap_err();
///
/// assert_eq!(panic_message(&payload), Some("boom"));
/// ```
pub fn immediate_unwind<F, R>(thunk: F) -> Immediate<impl FnOnce() -> Result<R, PanicPayload>>
where
    F: FnOnce() -> R,
{
    Immediate::new(move || catch_unwind(AssertUnwindSafe(thunk)))
}

/// Wraps a future whose panics become failures.
///
/// # Examples
///
/// ```rust
/// use itry::computation::deferred_unwind;
///
/// let computation = deferred_unwind(async { 7 });
/// assert_eq!(futures::executor::block_on(computation).ok(), Some(7));
/// ```
#[cfg(feature = "deferred")]
pub fn deferred_unwind<I>(
    future: I,
) -> super::Deferred<futures::future::CatchUnwind<AssertUnwindSafe<I::IntoFuture>>>
where
    I: std::future::IntoFuture,
{
    use futures::FutureExt;

    super::Deferred::new(AssertUnwindSafe(future.into_future()).catch_unwind())
}

/// Extracts the message of a panic payload.
///
/// Returns `None` for payloads that are neither `&'static str` nor `String`,
/// which is what `panic!` produces for a formatted or literal message.
pub fn panic_message(payload: &PanicPayload) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
