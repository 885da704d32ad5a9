//! Computations - the two execution models accepted by every operation.
//!
//! - [`Immediate`]: a thunk, `FnOnce() -> Result<T, E>`, run on the caller's
//!   thread as soon as an operation is applied. `Err` is the "raise".
//! - [`Deferred`]: a future resolving to `Result<T, E>`. `Err` is the
//!   "reject". Operations on a deferred computation return futures of their
//!   own that attach continuations to it; nothing runs until they are polled.
//!
//! The two are distinguished by the wrapper type, so an operation's output
//! type (a plain value or a future of that value) is known at compile time.
//!
//! # Examples
//!
//! ```rust
//! use itry::computation::{Computation, immediate};
//!
//! fn failure_type_name<C: Computation>(_: &C) -> &'static str {
//!     std::any::type_name::<C::Failure>()
//! }
//!
//! let computation = immediate(|| "42".parse::<u8>());
//! assert!(failure_type_name(&computation).ends_with("ParseIntError"));
//! ```

#[cfg(feature = "deferred")]
mod deferred;
#[cfg(feature = "unwind")]
mod unwind;

#[cfg(feature = "deferred")]
pub use deferred::{Deferred, deferred};
#[cfg(feature = "unwind")]
pub use unwind::{immediate_unwind, panic_message};
#[cfg(all(feature = "unwind", feature = "deferred"))]
pub use unwind::deferred_unwind;

/// A computation that eventually succeeds with a [`Value`](Self::Value) or
/// fails with a [`Failure`](Self::Failure).
pub trait Computation {
    /// The success type.
    type Value;
    /// The failure type.
    type Failure;
}

/// A synchronous computation: a thunk evaluated eagerly, exactly once.
///
/// # Examples
///
/// ```rust
/// use itry::computation::Immediate;
///
/// let computation = Immediate::new(|| Ok::<_, String>(1));
/// assert_eq!(computation.run(), Ok(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Immediate<F> {
    thunk: F,
}

impl<F> Immediate<F> {
    /// Wraps a thunk.
    pub const fn new(thunk: F) -> Self {
        Self { thunk }
    }

    /// Runs the thunk.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the thunk raised.
    pub fn run<T, E>(self) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        (self.thunk)()
    }
}

impl<F, T, E> Computation for Immediate<F>
where
    F: FnOnce() -> Result<T, E>,
{
    type Value = T;
    type Failure = E;
}

/// Wraps a thunk as an [`Immediate`] computation.
pub const fn immediate<F, T, E>(thunk: F) -> Immediate<F>
where
    F: FnOnce() -> Result<T, E>,
{
    Immediate::new(thunk)
}
