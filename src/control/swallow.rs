//! Swallow - replace any failure with a fallback value.

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

/// Runs a computation, replacing any failure with a fallback.
///
/// The computation's own failure never escapes: on failure the optional side
/// effect receives it, and the fallback is returned (or resolved) in its place.
pub trait Swallow<H>: Computation {
    /// `Value`, or a future resolving to it.
    type Output;

    /// Runs the computation; on failure, hands the failure to `on_failure`
    /// (when given) and yields `fallback`.
    fn swallow_with(self, fallback: Self::Value, on_failure: Option<H>) -> Self::Output;
}

impl<F, T, E, H> Swallow<H> for Immediate<F>
where
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(E),
{
    type Output = T;

    fn swallow_with(self, fallback: T, on_failure: Option<H>) -> Self::Output {
        match self.run() {
            Ok(value) => value,
            Err(failure) => {
                trace!(side_effect = on_failure.is_some(), "failure swallowed");
                if let Some(on_failure) = on_failure {
                    on_failure(failure);
                }
                fallback
            }
        }
    }
}

#[cfg(feature = "deferred")]
impl<Fut, T, E, H> Swallow<H> for Deferred<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E),
{
    type Output = SwallowFuture<Fut, T, H>;

    fn swallow_with(self, fallback: T, on_failure: Option<H>) -> Self::Output {
        SwallowFuture {
            future: self.into_inner(),
            fallback: Some(fallback),
            on_failure,
        }
    }
}

#[cfg(feature = "deferred")]
pin_project! {
    /// Future returned by [`swallow`] and [`swallow_with`] on a [`Deferred`]
    /// computation.
    ///
    /// Always resolves: to the wrapped future's value, or to the fallback
    /// once the side effect (if any) has seen the failure.
    ///
    /// # Panics
    ///
    /// Panics if polled after it has completed.
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct SwallowFuture<Fut, T, H> {
        #[pin]
        future: Fut,
        fallback: Option<T>,
        on_failure: Option<H>,
    }
}

#[cfg(feature = "deferred")]
const FALLBACK_CONSUMED: &str = concat!(
    "SwallowFuture internal error: fallback was already consumed. ",
    "This indicates the future was polled after completion.",
);

#[cfg(feature = "deferred")]
impl<Fut, T, E, H> Future for SwallowFuture<Fut, T, H>
where
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(E),
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(this.fallback.is_some(), "{FALLBACK_CONSUMED}");
        let outcome = ready!(this.future.poll(context));
        // INVARIANT: the fallback is consumed only on the poll that completes
        let fallback = this.fallback.take().expect(FALLBACK_CONSUMED);
        match outcome {
            Ok(value) => Poll::Ready(value),
            Err(failure) => {
                trace!(side_effect = this.on_failure.is_some(), "failure swallowed");
                if let Some(on_failure) = this.on_failure.take() {
                    on_failure(failure);
                }
                Poll::Ready(fallback)
            }
        }
    }
}

/// Runs `computation`, returning `fallback` if it fails.
///
/// # Examples
///
/// ```rust
/// use itry::prelude::*;
///
/// assert_eq!(swallow(immediate(|| Err::<&str, _>("x")), "fallback"), "fallback");
/// assert_eq!(swallow(immediate(|| Ok::<_, &str>("ok")), "fallback"), "ok");
/// ```
pub fn swallow<C>(
    computation: C,
    fallback: <C as Computation>::Value,
) -> <C as Swallow<fn(<C as Computation>::Failure)>>::Output
where
    C: Computation + Swallow<fn(<C as Computation>::Failure)>,
{
    computation.swallow_with(fallback, None)
}

/// Runs `computation`; if it fails, calls `on_failure` with the failure and
/// returns `fallback`.
///
/// `on_failure` runs exactly once on the failure path and never on success.
///
/// # Examples
///
/// ```rust
/// use itry::prelude::*;
///
/// let mut failures = Vec::new();
/// let value = swallow_with(immediate(|| Err::<i32, _>("boom")), -1, |failure| {
///     failures.push(failure);
/// });
///
/// assert_eq!(value, -1);
/// assert_eq!(failures, vec!["boom"]);
/// ```
pub fn swallow_with<C, H>(
    computation: C,
    fallback: <C as Computation>::Value,
    on_failure: H,
) -> <C as Swallow<H>>::Output
where
    C: Swallow<H>,
{
    computation.swallow_with(fallback, Some(on_failure))
}
