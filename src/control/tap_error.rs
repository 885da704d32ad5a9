//! Tap - observe a failure without handling it.

#[cfg(feature = "deferred")]
use std::future::Future;
#[cfg(feature = "deferred")]
use std::pin::Pin;
#[cfg(feature = "deferred")]
use std::task::{Context, Poll, ready};

#[cfg(feature = "deferred")]
use pin_project_lite::pin_project;
use tracing::trace;

#[cfg(feature = "deferred")]
use crate::computation::Deferred;
use crate::computation::{Computation, Immediate};

/// Runs a computation, letting a side effect observe its failure before the
/// failure is re-surfaced unchanged.
pub trait TapError<H>: Computation {
    /// `Result<Value, Failure>`, or a future resolving to it.
    type Output;

    /// Runs the computation; on failure, calls `on_failure` with a reference
    /// to the failure, then propagates it.
    fn tap_error(self, on_failure: H) -> Self::Output;
}

impl<F, T, E, H> TapError<H> for Immediate<F>
where
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(&E),
{
    type Output = Result<T, E>;

    fn tap_error(self, on_failure: H) -> Self::Output {
        self.run().inspect_err(|failure| {
            trace!("failure observed before propagation");
            on_failure(failure);
        })
    }
}

#[cfg(feature = "deferred")]
impl<Fut, T, E, H> TapError<H> for Deferred<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(&E),
{
    type Output = TapErrorFuture<Fut, H>;

    fn tap_error(self, on_failure: H) -> Self::Output {
        TapErrorFuture {
            future: self.into_inner(),
            on_failure: Some(on_failure),
        }
    }
}

#[cfg(feature = "deferred")]
pin_project! {
    /// Future returned by [`tap_error`] on a [`Deferred`] computation.
    ///
    /// Resolves to exactly what the wrapped future resolves to; on failure
    /// the side effect runs first.
    ///
    /// # Panics
    ///
    /// Panics if polled after it has completed.
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct TapErrorFuture<Fut, H> {
        #[pin]
        future: Fut,
        on_failure: Option<H>,
    }
}

#[cfg(feature = "deferred")]
const SIDE_EFFECT_CONSUMED: &str = concat!(
    "TapErrorFuture internal error: side effect was already consumed. ",
    "This indicates the future was polled after completion.",
);

#[cfg(feature = "deferred")]
impl<Fut, T, E, H> Future for TapErrorFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(&E),
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(this.on_failure.is_some(), "{SIDE_EFFECT_CONSUMED}");
        let outcome = ready!(this.future.poll(context));
        // INVARIANT: the side effect is consumed only on the poll that completes
        let on_failure = this.on_failure.take().expect(SIDE_EFFECT_CONSUMED);
        if let Err(failure) = &outcome {
            trace!("failure observed before propagation");
            on_failure(failure);
        }
        Poll::Ready(outcome)
    }
}

/// Runs `computation`; if it fails, calls `on_failure` with the failure and
/// then propagates the same failure.
///
/// On success `on_failure` is never called and the value is returned as is.
///
/// # Errors
///
/// Returns the computation's failure unchanged (for a [`Deferred`]
/// computation, the future resolves to it).
///
/// # Examples
///
/// ```rust
/// use itry::prelude::*;
///
/// let mut logged = Vec::new();
/// let result = tap_error(immediate(|| Err::<(), _>("x")), |failure: &&str| {
///     logged.push(failure.to_string());
/// });
///
/// assert_eq!(result, Err("x"));
/// assert_eq!(logged, vec!["x".to_string()]);
/// ```
pub fn tap_error<C, H>(computation: C, on_failure: H) -> <C as TapError<H>>::Output
where
    C: TapError<H>,
{
    computation.tap_error(on_failure)
}
