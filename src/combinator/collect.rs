//! Collect combinator: await all sources, fail fast on the first failure.
//!
//! Thin adapter over the runtime's all-or-nothing primitive
//! (`futures::future::try_join_all`). On success the values arrive in
//! input order. On failure the run fails with the first failure's rendered
//! message; the failure value itself is not propagated.

use core::fmt;
use std::future::Future;

use futures::future::try_join_all;

/// Error type for a failed collect run.
///
/// Carries the first failure's rendered message rather than the failure
/// value itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CollectError {
    message: String,
}

impl CollectError {
    /// Returns the rendered message of the failure that ended the run.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Awaits all sources and collects their values in input order.
///
/// Fails fast: the first source failure ends the run with a
/// [`CollectError`] carrying that failure's rendered message. An empty
/// input succeeds with an empty vector.
///
/// # Example
/// ```
/// use settle::combinator::collect::collect_all;
/// use std::future::ready;
///
/// let values = futures_lite::future::block_on(collect_all(vec![
///     ready(Ok::<_, &str>(1)),
///     ready(Ok(3)),
///     ready(Ok(12)),
/// ]));
/// assert_eq!(values.unwrap(), vec![1, 3, 12]);
/// ```
pub async fn collect_all<I, T, E>(sources: I) -> Result<Vec<T>, CollectError>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    try_join_all(sources).await.map_err(|reason| CollectError {
        message: reason.to_string(),
    })
}
