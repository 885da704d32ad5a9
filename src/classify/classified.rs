//! Positional classification results.
//!
//! A [`Classified<T, E>`] is an ordered sequence of [`Slot`]s. Absence is
//! spelled out as [`Slot::Empty`] rather than left implicit, so callers can
//! match on the shape directly:
//!
//! ```rust
//! use itry::classify::{Classified, Slot};
//!
//! let classified: Classified<&str, &str> = Classified::matched(1, "range");
//!
//! match classified.as_slice() {
//!     [Slot::Value(value)] => println!("ok: {value}"),
//!     [_, Slot::Failure(first)] => println!("first kind: {first}"),
//!     [_, _, Slot::Failure(second)] => println!("second kind: {second}"),
//!     _ => unreachable!(),
//! }
//! ```

use std::ops::Index;

use smallvec::SmallVec;

/// Number of positions stored inline before spilling to the heap.
///
/// Covers a success, an unclassified failure, and a match on any of the
/// first three kinds.
const INLINE_SLOTS: usize = 4;

/// One position of a [`Classified`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T, E> {
    /// No value at this position.
    Empty,
    /// The success value. Only ever found at position 0.
    Value(T),
    /// The failure. Only ever found at the last position.
    Failure(E),
}

impl<T, E> Slot<T, E> {
    /// Returns `true` if this position holds nothing.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this position holds the success value.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this position holds the failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success value, if present.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the failure, if present.
    pub const fn failure(&self) -> Option<&E> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Converts from `&Slot<T, E>` to `Slot<&T, &E>`.
    pub const fn as_ref(&self) -> Slot<&T, &E> {
        match self {
            Self::Empty => Slot::Empty,
            Self::Value(value) => Slot::Value(value),
            Self::Failure(failure) => Slot::Failure(failure),
        }
    }
}

/// The positional outcome of a try-and-classify run.
///
/// Position 0 is reserved for the success value. When the computation
/// failed, position 0 is [`Slot::Empty`] and the failure sits at the last
/// position, one past the index of the kind that matched it.
///
/// | outcome                     | shape                              | `len()` |
/// |-----------------------------|------------------------------------|---------|
/// | success `v`                 | `[Value(v)]`                       | 1       |
/// | failure, no kinds supplied  | `[Empty, Failure(e)]`              | 2       |
/// | failure matched at index `i`| `[Empty; i + 1] ++ [Failure(e)]`   | `i + 2` |
///
/// A failure matched by the first kind and an unclassified failure have the
/// same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classified<T, E> {
    slots: SmallVec<[Slot<T, E>; INLINE_SLOTS]>,
}

impl<T, E> Classified<T, E> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates the result of a successful computation: `[Value(value)]`.
    pub fn success(value: T) -> Self {
        let mut slots = SmallVec::new();
        slots.push(Slot::Value(value));
        Self { slots }
    }

    /// Creates the result of a failure with no kinds supplied:
    /// `[Empty, Failure(failure)]`.
    pub fn unclassified(failure: E) -> Self {
        Self::matched(0, failure)
    }

    /// Creates the result of a failure matched by the kind at `index`:
    /// `index + 1` empty positions followed by `Failure(failure)`.
    pub fn matched(index: usize, failure: E) -> Self {
        let slots = std::iter::repeat_with(|| Slot::Empty)
            .take(index + 1)
            .chain(std::iter::once(Slot::Failure(failure)))
            .collect();
        Self { slots }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of positions.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the computation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.slots.first(), Some(Slot::Value(_)))
    }

    /// Returns `true` if the computation failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, if the computation succeeded.
    pub fn value(&self) -> Option<&T> {
        self.slots.first().and_then(Slot::value)
    }

    /// Returns the failure, if the computation failed.
    pub fn failure(&self) -> Option<&E> {
        self.slots.last().and_then(Slot::failure)
    }

    /// Returns the position holding the failure.
    ///
    /// For a failure matched by the kind at index `i` this is `i + 1`.
    pub fn failure_position(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_failure)
    }

    /// Returns the slot at `position`, or `None` if out of bounds.
    pub fn get(&self, position: usize) -> Option<&Slot<T, E>> {
        self.slots.get(position)
    }

    /// Returns all positions as a slice, for positional matching.
    pub fn as_slice(&self) -> &[Slot<T, E>] {
        &self.slots
    }

    /// Returns an iterator over the positions.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot<T, E>> {
        self.slots.iter()
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Consumes the result, returning the success value if present.
    pub fn into_value(self) -> Option<T> {
        match self.slots.into_iter().next() {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Consumes the result, returning the failure if present.
    pub fn into_failure(self) -> Option<E> {
        match self.slots.into_iter().last() {
            Some(Slot::Failure(failure)) => Some(failure),
            _ => None,
        }
    }

    /// Collapses the positional result back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the failure if the computation failed.
    ///
    /// # Panics
    ///
    /// Never panics for results built by this crate; a result holds either a
    /// value or a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self.slots.into_iter().find(|slot| !slot.is_empty()) {
            Some(Slot::Value(value)) => Ok(value),
            Some(Slot::Failure(failure)) => Err(failure),
            Some(Slot::Empty) | None => {
                unreachable!("Classified internal error: result holds no value and no failure")
            }
        }
    }

    /// Consumes the result, returning its positions.
    pub fn into_slots(self) -> Vec<Slot<T, E>> {
        self.slots.into_vec()
    }
}

impl<T, E> Index<usize> for Classified<T, E> {
    type Output = Slot<T, E>;

    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

impl<T, E> IntoIterator for Classified<T, E> {
    type Item = Slot<T, E>;
    type IntoIter = smallvec::IntoIter<[Slot<T, E>; INLINE_SLOTS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Classified<T, E> {
    type Item = &'a Slot<T, E>;
    type IntoIter = std::slice::Iter<'a, Slot<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for Slot<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
            Self::Failure(failure) => failure.serialize(serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for Classified<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut sequence = serializer.serialize_seq(Some(self.slots.len()))?;
        for slot in &self.slots {
            sequence.serialize_element(slot)?;
        }
        sequence.end()
    }
}
