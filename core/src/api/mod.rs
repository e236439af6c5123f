//! Public configuration and error types for traversals.
//!
//! The free functions in [`crate::traversal`] need neither: they return the
//! visitor's own error unchanged. These types belong to the configurable
//! [`Traversal`](crate::traversal::Traversal) runner.

pub mod error;
pub mod options;

pub use error::TraversalError;
pub use options::{FailurePolicy, TraversalOptions, TraversalOptionsOverride};
