//! Control-flow helpers over immediate and deferred computations.
//!
//! - [`try_classify`]: turn a failure into a positional [`Classified`](crate::classify::Classified)
//!   result, propagating only failures no listed kind recognizes
//! - [`swallow`] / [`swallow_with`]: replace any failure with a fallback
//! - [`tap_error`]: observe a failure, then re-surface it unchanged
//!
//! Each operation is a trait implemented once for [`Immediate`](crate::computation::Immediate)
//! and once for [`Deferred`](crate::computation::Deferred). On an immediate
//! computation the operation returns its result directly; on a deferred one
//! it returns a future resolving to the same result.
//!
//! # Propagation
//!
//! | operation      | classifiable failure | unrecognized failure | side effect                 |
//! |----------------|----------------------|----------------------|-----------------------------|
//! | `try_classify` | captured             | propagated           | none                        |
//! | `swallow`      | replaced by fallback | replaced by fallback | optional, gets the failure  |
//! | `tap_error`    | propagated           | propagated           | always, before propagation  |
//!
//! A side effect that panics unwinds through the operation; nothing here
//! catches it.
//!
//! # Examples
//!
//! ```rust
//! use itry::prelude::*;
//!
//! let parsed = swallow(immediate(|| "x".parse::<i32>()), 0);
//! assert_eq!(parsed, 0);
//!
//! let mut seen = None;
//! let tapped = tap_error(immediate(|| "x".parse::<i32>()), |error: &std::num::ParseIntError| {
//!     seen = Some(error.to_string());
//! });
//! assert!(tapped.is_err());
//! assert!(seen.is_some());
//! ```

mod swallow;
mod tap_error;
mod try_classify;

pub use swallow::{Swallow, swallow, swallow_with};
pub use tap_error::{TapError, tap_error};
pub use try_classify::{TryClassify, try_classify};

#[cfg(feature = "deferred")]
pub use swallow::SwallowFuture;
#[cfg(feature = "deferred")]
pub use tap_error::TapErrorFuture;
#[cfg(feature = "deferred")]
pub use try_classify::TryClassifyFuture;
