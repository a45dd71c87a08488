//! Fold combinator: sequential settling with partial-failure tolerance.
//!
//! The fold combinator awaits a sequence of sources strictly in input
//! order, one at a time, collects the values of sources that settle
//! successfully, records the reasons of sources that fail, and finally
//! folds the collected values left-to-right with a binary operation.
//!
//! # Semantics
//!
//! `fold_settled([s0, s1, ..., sn], op)`:
//! 1. Await each source in input order (never concurrently)
//! 2. Success: append the value to the accumulator
//! 3. Failure: append the reason to the failure log and continue
//! 4. Fold the accumulator: `op(op(op(v0, v1), v2), ...)`
//!
//! # Distinction from Collect
//!
//! - **collect**: all sources must succeed; the first failure fails the run
//! - **fold**: failures are absorbed; only the surviving values matter
//!
//! Sequential settling is deliberate: a failing source never cancels or
//! skips sibling work, unlike an all-or-nothing combinator.
//!
//! # Ordering
//!
//! Sources settle in exact input order, so the accumulator is always the
//! subsequence of successful values in original order. The fold is a left
//! fold over that subsequence, which makes non-associative operations
//! behave predictably.
//!
//! # Empty and single-element accumulators
//!
//! When no value survives, there is nothing to fold: the run reports
//! [`FoldError::Empty`] if no sources were given at all, and
//! [`FoldError::AllFailed`] if every source failed. A sole surviving value
//! is returned unfolded; the operation is never invoked for it.
//!
//! A panic raised by the operation itself propagates to the caller.

use core::fmt;
use std::future::Future;

/// Report from one fold run.
///
/// Contains the folded value (if any value survived), the failure log, and
/// counts describing the run. The accumulator itself is consumed by the
/// fold and is not retained.
#[derive(Debug)]
pub struct FoldReport<T, E> {
    /// The folded value, or `None` when no source succeeded.
    pub folded: Option<T>,
    /// Number of sources that settled successfully.
    pub success_count: usize,
    /// Failure reasons with their input indices, in input order.
    pub failures: Vec<(usize, E)>,
    /// Total number of sources awaited.
    pub total: usize,
}

impl<T, E> FoldReport<T, E> {
    /// Returns true if every source settled successfully.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty() && self.success_count == self.total
    }

    /// Returns the number of sources that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if a folded value is available.
    #[must_use]
    pub const fn has_folded(&self) -> bool {
        self.folded.is_some()
    }
}

/// Error type for fail-fast fold handling.
///
/// A source failure alone never produces this error; it is reported only
/// when the accumulator ends the run with nothing to fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldError<E> {
    /// No sources were provided.
    Empty,
    /// Every source failed; no value survived to the fold step.
    AllFailed {
        /// Failure reasons with their input indices, in input order.
        failures: Vec<(usize, E)>,
        /// Total number of sources awaited.
        total: usize,
    },
}

impl<E> FoldError<E> {
    /// Returns true if the input sequence was empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if every source failed.
    #[must_use]
    pub const fn is_all_failed(&self) -> bool {
        matches!(self, Self::AllFailed { .. })
    }
}

impl<E: fmt::Display> fmt::Display for FoldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no sources provided"),
            Self::AllFailed { failures, total } => {
                write!(f, "all {total} sources failed: {} recorded", failures.len())
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for FoldError<E> {}

/// Partitions settled outcomes and folds the successful values in order.
///
/// This is the semantic core of the fold combinator. Successful values are
/// collected into the accumulator in input order; failure reasons go to
/// the failure log with their input indices. The accumulator is then
/// consumed by a left fold.
///
/// # Arguments
/// * `outcomes` - The settled outcomes of all sources, in input order
/// * `op` - Binary operation combining two values into one
///
/// # Example
/// ```
/// use settle::combinator::fold::fold_outcomes;
///
/// let outcomes: Vec<Result<i32, &str>> = vec![Ok(1), Err("x"), Ok(3)];
/// let report = fold_outcomes(outcomes, |a, b| a + b);
/// assert_eq!(report.folded, Some(4)); // 1 + 3, the failure is skipped
/// assert_eq!(report.failures, vec![(1, "x")]);
/// ```
#[must_use]
pub fn fold_outcomes<T, E, F>(outcomes: Vec<Result<T, E>>, op: F) -> FoldReport<T, E>
where
    F: FnMut(T, T) -> T,
{
    let total = outcomes.len();
    let mut accumulator: Vec<T> = Vec::new();
    let mut failures: Vec<(usize, E)> = Vec::new();

    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => accumulator.push(value),
            Err(reason) => failures.push((index, reason)),
        }
    }

    let success_count = accumulator.len();

    // Left fold in input order; a sole value is returned unfolded.
    let mut values = accumulator.into_iter();
    let folded = values.next().map(|first| values.fold(first, op));

    FoldReport {
        folded,
        success_count,
        failures,
        total,
    }
}

/// Awaits each source in input order and reports the full run.
///
/// Sources are awaited strictly sequentially: a source is not polled
/// before its predecessor has settled. Each absorbed failure emits a
/// `tracing` debug event carrying the input index.
///
/// This is the lenient entry point: it never fails, and the failure log is
/// available on the report. For fail-fast handling use [`fold_settled`].
pub async fn fold_settled_report<I, T, E, F>(sources: I, op: F) -> FoldReport<T, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    let mut outcomes = Vec::new();
    for (index, source) in sources.into_iter().enumerate() {
        // One suspension point per source; order is the input order.
        let outcome = source.await;
        if outcome.is_err() {
            tracing::debug!(index, "source failed; recording and continuing");
        }
        outcomes.push(outcome);
    }
    fold_outcomes(outcomes, op)
}

/// Converts a [`FoldReport`] to a `Result` for fail-fast handling.
///
/// Returns the folded value when at least one source succeeded. An empty
/// input maps to [`FoldError::Empty`]; a run in which every source failed
/// maps to [`FoldError::AllFailed`] carrying the failure log.
pub fn fold_report_to_result<T, E>(report: FoldReport<T, E>) -> Result<T, FoldError<E>> {
    if report.total == 0 {
        return Err(FoldError::Empty);
    }
    match report.folded {
        Some(value) => Ok(value),
        None => Err(FoldError::AllFailed {
            failures: report.failures,
            total: report.total,
        }),
    }
}

/// Awaits each source in input order and folds the surviving values.
///
/// The headline entry point. Per-source failures are absorbed: they are
/// recorded and logged, never propagated. The run fails only when nothing
/// survives to the fold step (see [`FoldError`]). A panic raised by `op`
/// propagates to the caller.
///
/// # Example
/// ```
/// use settle::combinator::fold::fold_settled;
/// use std::future::ready;
///
/// let result = futures_lite::future::block_on(fold_settled(
///     vec![ready(Ok::<_, &str>(1)), ready(Ok(2)), ready(Ok(3))],
///     |a, b| a + b,
/// ));
/// assert_eq!(result.unwrap(), 6);
/// ```
pub async fn fold_settled<I, T, E, F>(sources: I, op: F) -> Result<T, FoldError<E>>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
    F: FnMut(T, T) -> T,
{
    fold_report_to_result(fold_settled_report(sources, op).await)
}
