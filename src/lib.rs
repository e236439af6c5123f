//! Tally - count the elements of a sequence while visiting each one
//!
//! # Overview
//!
//! Tally walks any finite, ordered sequence (anything that implements
//! `IntoIterator`, or a `Stream` with the `async` feature), calls a visitor
//! on every element in order, and returns how many elements there were.
//! The sequence is never modified; pass `&collection` to keep ownership.
//!
//! # Quick Start
//!
//! ```
//! use tally::count;
//!
//! let mut seen = Vec::new();
//! assert_eq!(count(&[7, 3, 9], |x| seen.push(*x)), 3);
//! assert_eq!(seen, [7, 3, 9]);
//! ```
//!
//! # Failing visitors
//!
//! [`try_count`] stops at the first error and hands it back unchanged:
//!
//! ```
//! use tally::try_count;
//!
//! let res = try_count(["a", "b", "c", "d"], |s: &str| {
//!     if s == "c" { Err("no c allowed") } else { Ok(()) }
//! });
//! assert_eq!(res, Err("no c allowed"));
//! ```
//!
//! # Configured runs
//!
//! A [`Traversal`] adds a failure policy, an element limit and cooperative
//! cancellation:
//!
//! ```
//! use tally::{CancellationToken, FailurePolicy, Tally, Traversal, TraversalError, TraversalOptions};
//!
//! let traversal = Traversal::new(TraversalOptions {
//!     on_failure: FailurePolicy::Skip,
//!     max_items: Some(1_000),
//! });
//! let tally = traversal.run(["4", "x", "2"], |s: &str| s.parse::<u8>().map(drop)).unwrap();
//! assert_eq!(tally, Tally { visited: 3, skipped: 1 });
//!
//! let token = CancellationToken::new();
//! token.cancel();
//! let err = Traversal::default()
//!     .with_cancellation(token)
//!     .run(0..10, |_| Ok::<(), String>(()))
//!     .unwrap_err();
//! assert!(matches!(err, TraversalError::Cancelled));
//! ```

pub use tally_core::api::{self, FailurePolicy, TraversalError, TraversalOptions, TraversalOptionsOverride};
pub use tally_core::traversal::{
    self, ByRef, CancellationToken, Noop, Tally, Traversal, Visit, count, try_count,
};

#[cfg(feature = "async")]
pub use tally_core::traversal::{count_async, try_count_async, try_count_stream};
