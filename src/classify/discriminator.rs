//! Discriminators - tests deciding whether a failure belongs to a kind.
//!
//! A [`Discriminator<E>`] answers one question about a failure of type `E`:
//! "is this failure one of mine?". Several forms are provided:
//!
//! - any `Fn(&E) -> bool` closure, for concrete error types (typically a
//!   `matches!` on an enum variant)
//! - [`Is<T>`], a nominal type tag for type-erased failures
//! - [`InChain<T>`], a type tag that also matches errors wrapping a `T`
//! - [`Anything`], which matches every failure
//! - [`Kind`], a boxed discriminator for building homogeneous lists
//!
//! # Examples
//!
//! ```rust
//! use itry::classify::{BoxError, Discriminator, is};
//!
//! let failure: BoxError = Box::new(std::fmt::Error);
//!
//! assert!(is::<std::fmt::Error>().matches(&failure));
//! assert!(!is::<std::io::Error>().matches(&failure));
//! ```

use std::any::{Any, type_name};
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

/// A type-erased, thread-safe error.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The payload carried by a panic.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// A test deciding whether a failure belongs to a failure kind.
///
/// Implementations must be pure: the same failure always yields the same
/// answer, and testing never modifies it.
///
/// # Examples
///
/// ```rust
/// use itry::classify::Discriminator;
///
/// #[derive(Debug)]
/// enum Fault {
///     NotFound,
///     Denied,
/// }
///
/// let not_found = |fault: &Fault| matches!(fault, Fault::NotFound);
///
/// assert!(not_found.matches(&Fault::NotFound));
/// assert!(!not_found.matches(&Fault::Denied));
/// ```
pub trait Discriminator<E: ?Sized> {
    /// Returns `true` if `failure` belongs to this kind.
    fn matches(&self, failure: &E) -> bool;
}

impl<E, F> Discriminator<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> bool,
{
    fn matches(&self, failure: &E) -> bool {
        self(failure)
    }
}

// =============================================================================
// Is
// =============================================================================

/// A nominal type tag: matches a type-erased failure whose concrete type is `T`.
///
/// `Is<T>` is implemented for the usual erased error and panic payload
/// representations: `dyn Error`, `dyn Error + Send`, `dyn Error + Send + Sync`,
/// `dyn Any`, `dyn Any + Send`, `dyn Any + Send + Sync`, and `Box`es of each.
///
/// # Examples
///
/// ```rust
/// use itry::classify::{Discriminator, PanicPayload, is};
///
/// let payload: PanicPayload = Box::new("index out of bounds");
///
/// assert!(is::<&'static str>().matches(&payload));
/// assert!(!is::<String>().matches(&payload));
/// ```
pub struct Is<T: ?Sized> {
    marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> Is<T> {
    /// Creates a type tag for `T`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Is<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Is<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Is<T> {}

impl<T: ?Sized> fmt::Debug for Is<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Is<{}>", type_name::<T>())
    }
}

/// Creates an [`Is<T>`] type tag.
pub const fn is<T: ?Sized>() -> Is<T> {
    Is::new()
}

macro_rules! impl_is_for_error_objects {
    ($($object:ty),+ $(,)?) => {
        $(
            impl<T: Error + 'static> Discriminator<$object> for Is<T> {
                fn matches(&self, failure: &$object) -> bool {
                    failure.is::<T>()
                }
            }

            impl<T: Error + 'static> Discriminator<Box<$object>> for Is<T> {
                fn matches(&self, failure: &Box<$object>) -> bool {
                    (**failure).is::<T>()
                }
            }
        )+
    };
}

macro_rules! impl_is_for_any_objects {
    ($($object:ty),+ $(,)?) => {
        $(
            impl<T: Any> Discriminator<$object> for Is<T> {
                fn matches(&self, failure: &$object) -> bool {
                    failure.is::<T>()
                }
            }

            impl<T: Any> Discriminator<Box<$object>> for Is<T> {
                fn matches(&self, failure: &Box<$object>) -> bool {
                    (**failure).is::<T>()
                }
            }
        )+
    };
}

impl_is_for_error_objects!(
    dyn Error + 'static,
    dyn Error + Send + 'static,
    dyn Error + Send + Sync + 'static,
);

impl_is_for_any_objects!(
    dyn Any + 'static,
    dyn Any + Send + 'static,
    dyn Any + Send + Sync + 'static,
);

// =============================================================================
// InChain
// =============================================================================

/// A subtype-aware type tag: matches an error that is a `T` or wraps one.
///
/// The failure itself is tested first, then each error reachable through
/// [`Error::source`], so a wrapper error counts as a kind of every error
/// it was built from.
///
/// # Examples
///
/// ```rust
/// use itry::classify::{BoxError, Discriminator, in_chain, is};
/// use std::error::Error;
///
/// #[derive(Debug)]
/// struct RenderFailed(std::fmt::Error);
///
/// impl std::fmt::Display for RenderFailed {
///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(formatter, "render failed")
///     }
/// }
///
/// impl Error for RenderFailed {
///     fn source(&self) -> Option<&(dyn Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// let wrapped: BoxError = Box::new(RenderFailed(std::fmt::Error));
///
/// assert!(in_chain::<RenderFailed>().matches(&wrapped));
/// assert!(in_chain::<std::fmt::Error>().matches(&wrapped));
/// assert!(!is::<std::fmt::Error>().matches(&wrapped));
/// ```
pub struct InChain<T: ?Sized> {
    marker: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> InChain<T> {
    /// Creates a chain-walking type tag for `T`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for InChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for InChain<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for InChain<T> {}

impl<T: ?Sized> fmt::Debug for InChain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "InChain<{}>", type_name::<T>())
    }
}

/// Creates an [`InChain<T>`] type tag.
pub const fn in_chain<T: ?Sized>() -> InChain<T> {
    InChain::new()
}

fn chain_contains<T: Error + 'static>(failure: &(dyn Error + 'static)) -> bool {
    let mut current = Some(failure);
    while let Some(error) = current {
        if error.is::<T>() {
            return true;
        }
        current = error.source();
    }
    false
}

macro_rules! impl_in_chain_for_error_objects {
    ($($object:ty),+ $(,)?) => {
        $(
            impl<T: Error + 'static> Discriminator<$object> for InChain<T> {
                fn matches(&self, failure: &$object) -> bool {
                    chain_contains::<T>(failure)
                }
            }

            impl<T: Error + 'static> Discriminator<Box<$object>> for InChain<T> {
                fn matches(&self, failure: &Box<$object>) -> bool {
                    chain_contains::<T>(&**failure)
                }
            }
        )+
    };
}

impl_in_chain_for_error_objects!(
    dyn Error + 'static,
    dyn Error + Send + 'static,
    dyn Error + Send + Sync + 'static,
);

// =============================================================================
// Anything
// =============================================================================

/// Matches every failure.
///
/// Useful as the last entry of a list, to give "everything else" its own
/// position instead of propagating it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anything;

/// Creates the [`Anything`] discriminator.
pub const fn anything() -> Anything {
    Anything
}

impl<E: ?Sized> Discriminator<E> for Anything {
    fn matches(&self, _failure: &E) -> bool {
        true
    }
}

// =============================================================================
// Kind
// =============================================================================

/// A boxed, type-erased discriminator.
///
/// Different discriminator types cannot share an array or `Vec`; wrapping
/// each in a `Kind` gives them one type. See also the [`kinds!`](crate::kinds)
/// macro.
///
/// # Examples
///
/// ```rust
/// use itry::classify::{BoxError, Kind, anything, is};
///
/// let kinds: Vec<Kind<'_, BoxError>> =
///     vec![Kind::new(is::<std::fmt::Error>()), Kind::new(anything())];
/// assert_eq!(kinds.len(), 2);
/// ```
pub struct Kind<'a, E: ?Sized> {
    discriminator: Box<dyn Discriminator<E> + 'a>,
}

impl<'a, E: ?Sized> Kind<'a, E> {
    /// Erases the type of `discriminator`.
    pub fn new<D>(discriminator: D) -> Self
    where
        D: Discriminator<E> + 'a,
    {
        Self {
            discriminator: Box::new(discriminator),
        }
    }
}

impl<E: ?Sized> Discriminator<E> for Kind<'_, E> {
    fn matches(&self, failure: &E) -> bool {
        self.discriminator.matches(failure)
    }
}

impl<E: ?Sized> fmt::Debug for Kind<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Kind").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Is<String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(InChain<std::io::Error>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Anything: Send, Sync, Copy);
