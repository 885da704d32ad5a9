//! # itry
//!
//! Control-flow helpers that turn failures into inspectable values, for
//! immediate (synchronous) and deferred (asynchronous) computations alike.
//!
//! ## Overview
//!
//! - **Classification**: [`classify`](classify::classify) maps a failure onto the
//!   position of the first matching failure kind.
//! - **Try-and-classify**: [`try_classify`](control::try_classify) runs a
//!   computation and returns a positional [`Classified`](classify::Classified)
//!   result instead of an error, propagating only failures no kind recognizes.
//! - **Swallow**: [`swallow`](control::swallow) replaces any failure with a fallback.
//! - **Tap**: [`tap_error`](control::tap_error) observes a failure and re-surfaces it.
//!
//! [`try_classify`](control::try_classify) is the single try-and-classify entry
//! point; there is no separate alias for deferred computations.
//!
//! ## Feature Flags
//!
//! - `deferred`: [`Deferred`](computation::Deferred) computations over futures
//! - `unwind`: capture panics as failures
//! - `serde`: `Serialize` for classification results
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use itry::prelude::*;
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(formatter, "timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//!
//! let classified = try_classify(
//!     immediate(|| -> Result<u32, BoxError> { Err(Box::new(Timeout)) }),
//!     (is::<std::fmt::Error>(), is::<Timeout>()),
//! )
//! .unwrap();
//!
//! assert_eq!(classified.len(), 3);
//! assert_eq!(classified.failure_position(), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use itry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::*;
    pub use crate::computation::*;
    pub use crate::control::*;
    pub use crate::kinds;
}

pub mod classify;
pub mod computation;
pub mod control;
