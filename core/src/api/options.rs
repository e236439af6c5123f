//! Runner configuration.
//!
//! Options follow a two-layer scheme: a [`TraversalOptions`] value holds the
//! defaults for a [`Traversal`](crate::traversal::Traversal), and a
//! [`TraversalOptionsOverride`] replaces only the fields it sets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when the visitor fails on an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// Stop at the failing element and report the visitor's error.
    #[default]
    Abort,
    /// Log the failure, count it as skipped and keep going.
    Skip,
}

/// Options for a [`Traversal`](crate::traversal::Traversal).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraversalOptions {
    pub on_failure: FailurePolicy,
    /// Maximum number of elements a sequence may have. `None` means unbounded.
    pub max_items: Option<usize>,
}

/// Per-run overrides. Unset fields keep the value from [`TraversalOptions`].
///
/// ```
/// use tally_core::{FailurePolicy, TraversalOptions, TraversalOptionsOverride};
///
/// let base = TraversalOptions { max_items: Some(100), ..Default::default() };
/// let opts = base.override_with(&TraversalOptionsOverride {
///     on_failure: Some(FailurePolicy::Skip),
///     ..Default::default()
/// });
/// assert_eq!(opts.on_failure, FailurePolicy::Skip);
/// assert_eq!(opts.max_items, Some(100));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraversalOptionsOverride {
    pub on_failure: Option<FailurePolicy>,
    pub max_items: Option<usize>,
}

impl TraversalOptions {
    pub fn override_with(&self, ovr: &TraversalOptionsOverride) -> TraversalOptions {
        TraversalOptions {
            on_failure: ovr.on_failure.unwrap_or(self.on_failure),
            max_items: ovr.max_items.or(self.max_items),
        }
    }
}
