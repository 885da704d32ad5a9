//! Failure classification.
//!
//! This module provides the pieces that decide where a failure lands in a
//! positional result:
//!
//! - [`Discriminator`]: tests whether a failure belongs to a kind
//! - [`FailureKinds`]: an ordered list of discriminators, given either as a
//!   tuple (the positional form) or as an array, slice or `Vec` (the sequence form)
//! - [`Classified`]: the positional result, built from [`Slot`]s
//! - [`classify`]: the ordered, first-match-wins classification algorithm
//!
//! # Result Shape
//!
//! Position 0 always belongs to the success value. A failure matched by the
//! kind at index `i` is stored at position `i + 1`, every position before it
//! is [`Slot::Empty`], and the result has exactly `i + 2` positions.
//!
//! ```text
//! success                  => [Value(v)]
//! no kinds supplied        => [Empty, Failure(e)]
//! matched kind at index i  => [Empty; i + 1] ++ [Failure(e)]
//! nothing matched          => propagate e
//! ```
//!
//! # Examples
//!
//! ```rust
//! use itry::classify::{Classified, Slot, classify};
//!
//! let kinds = (|code: &u16| *code >= 500, |code: &u16| *code >= 400);
//!
//! let server: Classified<(), u16> = classify(&kinds, 503).unwrap();
//! assert_eq!(server.as_slice(), &[Slot::Empty, Slot::Failure(503)]);
//!
//! let client: Classified<(), u16> = classify(&kinds, 404).unwrap();
//! assert_eq!(client.as_slice(), &[Slot::Empty, Slot::Empty, Slot::Failure(404)]);
//!
//! let unknown = classify::<(), _, _>(&kinds, 302);
//! assert_eq!(unknown, Err(302));
//! ```

mod classified;
mod discriminator;
mod failure_kinds;

pub use classified::{Classified, Slot};
pub use discriminator::{
    Anything, BoxError, Discriminator, InChain, Is, Kind, PanicPayload, anything, in_chain, is,
};
pub use failure_kinds::FailureKinds;

use tracing::trace;

/// Classifies `failure` against an ordered list of failure kinds.
///
/// Kinds are tested in list order and the first match wins, even if a later
/// kind would also match. Duplicate kinds are allowed; the earliest one is
/// reported.
///
/// # Errors
///
/// Returns `Err(failure)`, unchanged, when `failure_kinds` is non-empty and
/// none of its kinds matches. An empty list never fails: the failure is
/// reported unclassified at position 1.
///
/// # Examples
///
/// ```rust
/// use itry::classify::{Classified, classify};
///
/// // No kinds: catch everything.
/// let caught: Classified<i32, &str> = classify(&(), "boom").unwrap();
/// assert_eq!(caught.len(), 2);
/// assert_eq!(caught.failure(), Some(&"boom"));
/// ```
pub fn classify<T, E, K>(failure_kinds: &K, failure: E) -> Result<Classified<T, E>, E>
where
    K: FailureKinds<E> + ?Sized,
{
    if failure_kinds.is_empty() {
        trace!("no failure kinds supplied, reporting failure unclassified");
        return Ok(Classified::unclassified(failure));
    }

    match failure_kinds.position(&failure) {
        Some(index) => {
            trace!(index, kinds = failure_kinds.len(), "failure classified");
            Ok(Classified::matched(index, failure))
        }
        None => {
            trace!(kinds = failure_kinds.len(), "failure unrecognized, propagating");
            Err(failure)
        }
    }
}
