//! Try-and-classify.

#[cfg(feature = "deferred")]
use std::future::Future;
#[cfg(feature = "deferred")]
use std::pin::Pin;
#[cfg(feature = "deferred")]
use std::task::{Context, Poll, ready};

#[cfg(feature = "deferred")]
use pin_project_lite::pin_project;

use crate::classify::{Classified, FailureKinds, classify};
#[cfg(feature = "deferred")]
use crate::computation::Deferred;
use crate::computation::{Computation, Immediate};

/// Runs a computation and classifies its failure against a list of kinds.
///
/// # Result
///
/// - success with `v`: `Ok([Value(v)])`, whatever the list holds
/// - failure, empty list: `Ok([Empty, Failure(e)])`
/// - failure matched first by the kind at index `i`: `Ok` with `i + 2`
///   positions, `Failure(e)` last
/// - failure matched by no kind of a non-empty list: `Err(e)`, unchanged
///
/// Immediate and deferred computations produce results of the same shape.
pub trait TryClassify<K>: Computation {
    /// `Result<Classified<Value, Failure>, Failure>`, or a future resolving to it.
    type Output;

    /// Runs the computation, classifying a failure against `failure_kinds`.
    fn try_classify(self, failure_kinds: K) -> Self::Output;
}

impl<F, T, E, K> TryClassify<K> for Immediate<F>
where
    F: FnOnce() -> Result<T, E>,
    K: FailureKinds<E>,
{
    type Output = Result<Classified<T, E>, E>;

    fn try_classify(self, failure_kinds: K) -> Self::Output {
        match self.run() {
            Ok(value) => Ok(Classified::success(value)),
            Err(failure) => classify(&failure_kinds, failure),
        }
    }
}

#[cfg(feature = "deferred")]
impl<Fut, T, E, K> TryClassify<K> for Deferred<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    K: FailureKinds<E>,
{
    type Output = TryClassifyFuture<Fut, K>;

    fn try_classify(self, failure_kinds: K) -> Self::Output {
        TryClassifyFuture {
            future: self.into_inner(),
            failure_kinds: Some(failure_kinds),
        }
    }
}

#[cfg(feature = "deferred")]
pin_project! {
    /// Future returned by [`try_classify`] on a [`Deferred`] computation.
    ///
    /// Resolves to `Ok(classified)` when the wrapped future resolves or its
    /// failure is recognized, and to `Err(failure)` when it is not.
    ///
    /// # Panics
    ///
    /// Panics if polled after it has completed.
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct TryClassifyFuture<Fut, K> {
        #[pin]
        future: Fut,
        failure_kinds: Option<K>,
    }
}

#[cfg(feature = "deferred")]
const CONSUMED: &str = concat!(
    "TryClassifyFuture internal error: failure kinds were already consumed. ",
    "This indicates the future was polled after completion.",
);

#[cfg(feature = "deferred")]
impl<Fut, T, E, K> Future for TryClassifyFuture<Fut, K>
where
    Fut: Future<Output = Result<T, E>>,
    K: FailureKinds<E>,
{
    type Output = Result<Classified<T, E>, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(this.failure_kinds.is_some(), "{CONSUMED}");
        let outcome = ready!(this.future.poll(context));
        // INVARIANT: the failure kinds are consumed only on the poll that completes
        let failure_kinds = this.failure_kinds.take().expect(CONSUMED);
        Poll::Ready(match outcome {
            Ok(value) => Ok(Classified::success(value)),
            Err(failure) => classify(&failure_kinds, failure),
        })
    }
}

/// Runs `computation`, capturing its failure at the position of the first
/// matching kind in `failure_kinds`.
///
/// `failure_kinds` is either a tuple (`(a, b, c)`, `()` for none) or a
/// sequence (`[a, b, c]`, a slice, a `Vec`, or [`kinds!`](crate::kinds)); both
/// forms classify identically.
///
/// # Errors
///
/// For an [`Immediate`] computation, returns `Err(failure)` unchanged when
/// `failure_kinds` is non-empty and none of its kinds matches. A
/// [`Deferred`] computation resolves to that `Err` instead.
///
/// # Examples
///
/// ```rust
/// use itry::prelude::*;
/// use std::num::{ParseIntError, TryFromIntError};
///
/// let ok = try_classify(immediate(|| Ok::<_, BoxError>("foo")), ()).unwrap();
/// assert!(matches!(ok.as_slice(), [Slot::Value("foo")]));
///
/// let failed = try_classify(
///     immediate(|| -> Result<i32, BoxError> { Ok("x".parse::<i32>()?) }),
///     (is::<TryFromIntError>(), is::<ParseIntError>()),
/// )
/// .unwrap();
/// assert_eq!(failed.len(), 3);
/// assert!(failed[2].is_failure());
///
/// let unrecognized = try_classify(
///     immediate(|| -> Result<i32, BoxError> { Ok("x".parse::<i32>()?) }),
///     (is::<TryFromIntError>(),),
/// );
/// assert!(unrecognized.unwrap_err().is::<ParseIntError>());
/// ```
pub fn try_classify<C, K>(computation: C, failure_kinds: K) -> C::Output
where
    C: TryClassify<K>,
{
    computation.try_classify(failure_kinds)
}
