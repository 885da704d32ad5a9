//! Ordered lists of failure kinds.
//!
//! A list can be passed in two equivalent forms:
//!
//! - **Positional**: a tuple, `(a, b, c)`, whose entries may all have
//!   different discriminator types. `()` is the empty list.
//! - **Sequence**: an array, slice or `Vec` of one discriminator type,
//!   usually [`Kind`](super::Kind) (see [`kinds!`](crate::kinds)).
//!
//! Both forms number their entries from 0 in the order written.

use super::Discriminator;

/// An ordered list of failure kinds.
///
/// # Examples
///
/// ```rust
/// use itry::classify::FailureKinds;
///
/// let positional = (|value: &i32| *value < 0, |value: &i32| *value == 0);
///
/// assert_eq!(FailureKinds::<i32>::len(&positional), 2);
/// assert_eq!(positional.position(&0), Some(1));
/// assert_eq!(positional.position(&5), None);
/// ```
pub trait FailureKinds<E: ?Sized> {
    /// Returns the number of kinds in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no kinds.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index of the first kind matching `failure`.
    fn position(&self, failure: &E) -> Option<usize>;
}

impl<E: ?Sized> FailureKinds<E> for () {
    fn len(&self) -> usize {
        0
    }

    fn position(&self, _failure: &E) -> Option<usize> {
        None
    }
}

impl<E, K> FailureKinds<E> for &K
where
    E: ?Sized,
    K: FailureKinds<E> + ?Sized,
{
    fn len(&self) -> usize {
        (**self).len()
    }

    fn position(&self, failure: &E) -> Option<usize> {
        (**self).position(failure)
    }
}

impl<E, D> FailureKinds<E> for [D]
where
    E: ?Sized,
    D: Discriminator<E>,
{
    fn len(&self) -> usize {
        <[D]>::len(self)
    }

    fn position(&self, failure: &E) -> Option<usize> {
        self.iter()
            .position(|discriminator| discriminator.matches(failure))
    }
}

impl<E, D, const N: usize> FailureKinds<E> for [D; N]
where
    E: ?Sized,
    D: Discriminator<E>,
{
    fn len(&self) -> usize {
        N
    }

    fn position(&self, failure: &E) -> Option<usize> {
        FailureKinds::position(self.as_slice(), failure)
    }
}

impl<E, D> FailureKinds<E> for Vec<D>
where
    E: ?Sized,
    D: Discriminator<E>,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn position(&self, failure: &E) -> Option<usize> {
        FailureKinds::position(self.as_slice(), failure)
    }
}

macro_rules! impl_failure_kinds_for_tuple {
    ($length:expr; $($index:tt => $kind:ident),+) => {
        impl<E, $($kind),+> FailureKinds<E> for ($($kind,)+)
        where
            E: ?Sized,
            $($kind: Discriminator<E>,)+
        {
            fn len(&self) -> usize {
                $length
            }

            fn position(&self, failure: &E) -> Option<usize> {
                $(
                    if self.$index.matches(failure) {
                        return Some($index);
                    }
                )+
                None
            }
        }
    };
}

impl_failure_kinds_for_tuple!(1; 0 => D0);
impl_failure_kinds_for_tuple!(2; 0 => D0, 1 => D1);
impl_failure_kinds_for_tuple!(3; 0 => D0, 1 => D1, 2 => D2);
impl_failure_kinds_for_tuple!(4; 0 => D0, 1 => D1, 2 => D2, 3 => D3);
impl_failure_kinds_for_tuple!(5; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4);
impl_failure_kinds_for_tuple!(6; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5);
impl_failure_kinds_for_tuple!(7; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6);
impl_failure_kinds_for_tuple!(
    8; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6, 7 => D7
);
impl_failure_kinds_for_tuple!(
    9; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6, 7 => D7, 8 => D8
);
impl_failure_kinds_for_tuple!(
    10; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6, 7 => D7, 8 => D8,
    9 => D9
);
impl_failure_kinds_for_tuple!(
    11; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6, 7 => D7, 8 => D8,
    9 => D9, 10 => D10
);
impl_failure_kinds_for_tuple!(
    12; 0 => D0, 1 => D1, 2 => D2, 3 => D3, 4 => D4, 5 => D5, 6 => D6, 7 => D7, 8 => D8,
    9 => D9, 10 => D10, 11 => D11
);

/// Builds a sequence-form list of failure kinds from discriminators of
/// different types.
///
/// Each entry is wrapped in a [`Kind`](crate::classify::Kind), producing an
/// array that numbers its entries exactly like the equivalent tuple.
///
/// # Examples
///
/// ```rust
/// use itry::classify::{BoxError, FailureKinds, Kind, anything, is};
/// use itry::kinds;
///
/// let failure: BoxError = Box::new(std::fmt::Error);
/// let sequence: [Kind<'_, BoxError>; 2] = kinds![is::<std::io::Error>(), anything()];
/// let positional = (is::<std::io::Error>(), anything());
///
/// assert_eq!(sequence.position(&failure), Some(1));
/// assert_eq!(positional.position(&failure), Some(1));
/// ```
#[macro_export]
macro_rules! kinds {
    () => {
        []
    };
    ($($discriminator:expr),+ $(,)?) => {
        [$($crate::classify::Kind::new($discriminator)),+]
    };
}
