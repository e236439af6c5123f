//! Counting traversals over sequences.
//!
//! This module provides three layers:
//! - [`count`] and [`try_count`]: walk a sequence, call a visitor on every
//!   element in order, and return how many elements there were
//! - [`Traversal`]: the same walk with a failure policy, an element limit
//!   and cooperative cancellation, reporting a [`Tally`]
//! - with the `async` feature, counterparts that await each visitor call
//!
//! # Example
//!
//! ```
//! use tally_core::traversal::{Noop, count, try_count};
//!
//! assert_eq!(count(&[7, 3, 9], |_| {}), 3);
//! assert_eq!(try_count(Vec::<u8>::new(), Noop), Ok(0));
//! ```

mod count;
mod runner;
#[cfg(feature = "async")]
mod stream;
mod visit;

pub use count::{count, try_count};
pub use runner::{Tally, Traversal};
#[cfg(feature = "async")]
pub use stream::{count_async, try_count_async, try_count_stream};
pub use visit::{ByRef, Noop, Visit};

pub use tokio_util::sync::CancellationToken;
