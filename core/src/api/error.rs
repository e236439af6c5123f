//! Error type returned by [`Traversal`](crate::traversal::Traversal) runs.

use thiserror::Error;

/// Why a traversal stopped without producing a [`Tally`](crate::traversal::Tally).
///
/// A failed run never carries a partial count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraversalError<E> {
    /// The visitor failed and the failure policy is
    /// [`FailurePolicy::Abort`](crate::api::FailurePolicy::Abort).
    ///
    /// `index` is the 0-based position of the failing element and `error`
    /// is exactly what the visitor returned.
    #[error("visitor failed on element {index}: {error}")]
    Visitor { index: usize, error: E },

    /// The cancellation token was triggered before the next element.
    #[error("traversal cancelled")]
    Cancelled,

    /// The sequence has more elements than `max_items` allows.
    #[error("sequence exceeds the limit of {limit} elements")]
    LimitExceeded { limit: usize },
}

impl<E> TraversalError<E> {
    /// Take the visitor's error out, if this is a visitor failure.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            TraversalError::Visitor { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Index of the failing element for visitor failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            TraversalError::Visitor { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, TraversalError::Cancelled)
    }
}
