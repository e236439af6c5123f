//! Traversals with asynchronous visitors.
//!
//! Each visitor future runs to completion before the next element is taken,
//! so at most one visit is ever in flight. Nothing here spawns tasks.

use core::fmt::Display;
use core::future::Future;
use core::pin::pin;

use futures::{Stream, StreamExt};

use super::runner::{Progress, Tally, Traversal};
use crate::api::TraversalError;

/// Async counterpart of [`count`](super::count).
pub async fn count_async<I, F, Fut>(sequence: I, mut visitor: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut n = 0;
    for item in sequence {
        visitor(item).await;
        n += 1;
    }
    n
}

/// Async counterpart of [`try_count`](super::try_count). The first error
/// ends the traversal and is returned unchanged.
pub async fn try_count_async<I, F, Fut, E>(sequence: I, mut visitor: F) -> Result<usize, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut n = 0;
    for item in sequence {
        visitor(item).await?;
        n += 1;
    }
    Ok(n)
}

/// Like [`try_count_async`], but the sequence itself is a [`Stream`].
pub async fn try_count_stream<S, F, Fut, E>(stream: S, mut visitor: F) -> Result<usize, E>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut stream = pin!(stream);
    let mut n = 0;
    while let Some(item) = stream.next().await {
        visitor(item).await?;
        n += 1;
    }
    Ok(n)
}

impl Traversal {
    /// [`Traversal::run`] with an asynchronous visitor.
    pub async fn run_async<I, F, Fut, E>(
        &self,
        sequence: I,
        mut visitor: F,
    ) -> Result<Tally, TraversalError<E>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let mut progress = Progress::start(self);
        let mut iter = sequence.into_iter();
        loop {
            progress.check_cancelled()?;
            let Some(item) = iter.next() else { break };
            progress.check_limit()?;
            let result = visitor(item).await;
            progress.record(result)?;
        }
        Ok(progress.finish())
    }

    /// [`Traversal::run`] over a [`Stream`] with an asynchronous visitor.
    ///
    /// Waiting on the stream for the next element is raced against the
    /// cancellation token, so a stalled stream does not hold up a cancelled run.
    pub async fn run_stream<S, F, Fut, E>(
        &self,
        stream: S,
        mut visitor: F,
    ) -> Result<Tally, TraversalError<E>>
    where
        S: Stream,
        F: FnMut(S::Item) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let mut stream = pin!(stream);
        let mut progress = Progress::start(self);
        loop {
            progress.check_cancelled()?;
            let next = match progress.token() {
                Some(token) => match token.run_until_cancelled(stream.next()).await {
                    Some(next) => next,
                    None => return Err(progress.cancelled()),
                },
                None => stream.next().await,
            };
            let Some(item) = next else { break };
            progress.check_limit()?;
            let result = visitor(item).await;
            progress.record(result)?;
        }
        Ok(progress.finish())
    }
}
