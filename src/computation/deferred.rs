//! Deferred computations over futures.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::Computation;

pin_project! {
    /// An asynchronous computation: a future resolving to `Result<T, E>`.
    ///
    /// `Deferred` is itself a future with the same output, so it can be
    /// awaited directly when no operation is applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itry::computation::deferred;
    ///
    /// let computation = deferred(async { Ok::<_, String>(1) });
    /// assert_eq!(futures::executor::block_on(computation), Ok(1));
    /// ```
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Deferred<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> Deferred<Fut> {
    /// Wraps anything convertible into a future.
    pub fn new<I>(future: I) -> Self
    where
        I: IntoFuture<IntoFuture = Fut>,
    {
        Self {
            future: future.into_future(),
        }
    }

    /// Returns the wrapped future.
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<Fut, T, E> Computation for Deferred<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Value = T;
    type Failure = E;
}

impl<Fut: Future> Future for Deferred<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

/// Wraps a future as a [`Deferred`] computation.
pub fn deferred<I, T, E>(future: I) -> Deferred<I::IntoFuture>
where
    I: IntoFuture<Output = Result<T, E>>,
{
    Deferred::new(future)
}

static_assertions::assert_impl_all!(
    Deferred<std::future::Ready<Result<i32, String>>>: Send, Sync, Unpin
);
