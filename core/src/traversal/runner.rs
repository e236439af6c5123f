//! Configurable traversal runner.

use core::fmt::Display;
use core::marker::PhantomData;

use tokio_util::sync::CancellationToken;

use super::visit::Visit;
use crate::api::{FailurePolicy, TraversalError, TraversalOptions, TraversalOptionsOverride};

/// Result of a successful [`Traversal`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Number of elements the visitor was called on.
    pub visited: usize,
    /// Elements whose visitor call failed under [`FailurePolicy::Skip`].
    /// Always `0` under [`FailurePolicy::Abort`].
    pub skipped: usize,
}

/// A traversal with a failure policy, an optional element limit and
/// optional cooperative cancellation.
///
/// # Example
///
/// ```
/// use tally_core::{FailurePolicy, Tally, Traversal, TraversalOptions};
///
/// let traversal = Traversal::new(TraversalOptions {
///     on_failure: FailurePolicy::Skip,
///     ..Default::default()
/// });
///
/// let tally = traversal
///     .run(["1", "two", "3"], |s: &str| s.parse::<i32>().map(|_| ()))
///     .unwrap();
/// assert_eq!(tally, Tally { visited: 3, skipped: 1 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    options: TraversalOptions,
    cancel: Option<CancellationToken>,
}

impl Traversal {
    pub fn new(options: TraversalOptions) -> Self {
        Self {
            options,
            cancel: None,
        }
    }

    /// Stop at the next element once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// A copy of this traversal with some options replaced.
    pub fn with_override(&self, ovr: &TraversalOptionsOverride) -> Self {
        Self {
            options: self.options.override_with(ovr),
            cancel: self.cancel.clone(),
        }
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.options
    }

    /// Visit every element of `sequence` in order.
    ///
    /// Cancellation is checked before each element is pulled from the
    /// sequence, so a cancelled run never advances it again. The element
    /// limit is checked once an element is in hand. A visitor failure either ends the run or is logged and skipped,
    /// depending on [`TraversalOptions::on_failure`].
    pub fn run<I, V>(&self, sequence: I, mut visitor: V) -> Result<Tally, TraversalError<V::Error>>
    where
        I: IntoIterator,
        V: Visit<I::Item>,
        V::Error: Display,
    {
        let mut progress = Progress::start(self);
        let mut iter = sequence.into_iter();
        loop {
            progress.check_cancelled()?;
            let Some(item) = iter.next() else { break };
            progress.check_limit()?;
            let result = visitor.visit(item);
            progress.record(result)?;
        }
        Ok(progress.finish())
    }
}

/// Bookkeeping shared by the sync and async runners.
pub(crate) struct Progress<'a, E> {
    traversal: &'a Traversal,
    tally: Tally,
    _error: PhantomData<E>,
}

impl<'a, E: Display> Progress<'a, E> {
    pub(crate) fn start(traversal: &'a Traversal) -> Self {
        tracing::debug!(
            on_failure = ?traversal.options.on_failure,
            max_items = ?traversal.options.max_items,
            "Starting traversal"
        );
        Progress {
            traversal,
            tally: Tally::default(),
            _error: PhantomData,
        }
    }

    pub(crate) fn token(&self) -> Option<&'a CancellationToken> {
        self.traversal.cancel.as_ref()
    }

    /// Called before pulling the next element.
    pub(crate) fn check_cancelled(&self) -> Result<(), TraversalError<E>> {
        match self.token() {
            Some(token) if token.is_cancelled() => Err(self.cancelled()),
            _ => Ok(()),
        }
    }

    pub(crate) fn cancelled(&self) -> TraversalError<E> {
        tracing::debug!(visited = self.tally.visited, "Traversal cancelled");
        TraversalError::Cancelled
    }

    /// Called once the next element has been pulled, before visiting it.
    pub(crate) fn check_limit(&self) -> Result<(), TraversalError<E>> {
        if let Some(limit) = self.traversal.options.max_items {
            if self.tally.visited >= limit {
                tracing::debug!(limit, "Element limit exceeded");
                return Err(TraversalError::LimitExceeded { limit });
            }
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, result: Result<(), E>) -> Result<(), TraversalError<E>> {
        let index = self.tally.visited;
        tracing::trace!(index, ok = result.is_ok(), "Visited element");
        self.tally.visited += 1;
        match result {
            Ok(()) => Ok(()),
            Err(error) => match self.traversal.options.on_failure {
                FailurePolicy::Abort => Err(TraversalError::Visitor { index, error }),
                FailurePolicy::Skip => {
                    tracing::warn!(index, error = %error, "Visitor failed, skipping element");
                    self.tally.skipped += 1;
                    Ok(())
                }
            },
        }
    }

    pub(crate) fn finish(self) -> Tally {
        tracing::debug!(
            visited = self.tally.visited,
            skipped = self.tally.skipped,
            "Traversal finished"
        );
        self.tally
    }
}
