//! Race combinator: the first source to settle wins.
//!
//! Thin adapter over the runtime's first-to-settle primitive
//! (`futures::future::select_all`). The winner's output is produced as-is,
//! success or failure alike; the losing sources are dropped, not drained.
//!
//! An empty input never settles, matching the underlying primitive's
//! semantics for an empty field.

use std::future::Future;

use futures::future::{pending, select_all};

/// Produces the output of whichever source settles first.
///
/// The output is the winner's own result: a winning failure is returned as
/// a failure. Losing sources are dropped as soon as the winner settles.
///
/// An empty input suspends forever.
///
/// # Example
/// ```
/// use settle::combinator::race::first_settled;
/// use std::future::ready;
///
/// let winner = futures_lite::future::block_on(first_settled(vec![
///     ready(Ok::<_, &str>("first")),
///     ready(Ok("second")),
/// ]));
/// assert_eq!(winner.unwrap(), "first");
/// ```
pub async fn first_settled<I, T, E>(sources: I) -> Result<T, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    let sources: Vec<_> = sources.into_iter().map(Box::pin).collect();
    if sources.is_empty() {
        return pending().await;
    }
    let (winner, _index, _losers) = select_all(sources).await;
    winner
}
