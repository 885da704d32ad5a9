//! Failure kinds shared by the integration tests.

#![allow(dead_code)]

use std::error::Error;
use std::fmt;

use itry::classify::BoxError;

macro_rules! define_failure {
    ($($name:ident => $message:literal),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl fmt::Display for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, $message)
                }
            }

            impl Error for $name {}
        )+
    };
}

define_failure! {
    TypeError => "type error",
    RangeError => "range error",
    SyntaxError => "syntax error",
    EvalError => "eval error",
}

/// An error that is a more specific kind of [`TypeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrowTypeError {
    pub base: TypeError,
}

impl fmt::Display for NarrowTypeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "narrow type error")
    }
}

impl Error for NarrowTypeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.base)
    }
}

/// A thunk that fails with `failure`.
pub fn failing<E>(failure: E) -> impl FnOnce() -> Result<&'static str, BoxError>
where
    E: Error + Send + Sync + 'static,
{
    move || Err(failure.into())
}

/// A thunk that succeeds with `"foo"`.
pub fn succeeding() -> impl FnOnce() -> Result<&'static str, BoxError> {
    || Ok("foo")
}

/// A future that yields once, then fails with `failure`.
pub async fn failing_later<E>(failure: E) -> Result<&'static str, BoxError>
where
    E: Error + Send + Sync + 'static,
{
    tokio::task::yield_now().await;
    Err(failure.into())
}

/// A future that yields once, then succeeds with `"foo"`.
pub async fn succeeding_later() -> Result<&'static str, BoxError> {
    tokio::task::yield_now().await;
    Ok("foo")
}
