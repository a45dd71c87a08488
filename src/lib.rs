//! Settle: combinators for settling sequences of asynchronous sources.
//!
//! # Overview
//!
//! A *source* is any future producing `Result<T, E>`: a success value or a
//! failure reason. This crate composes sequences of sources into a single
//! asynchronous result, with three different settling disciplines:
//!
//! - [`collect_all`]: await every source, succeed with all values in input
//!   order, or fail fast with the first failure's rendered message
//! - [`first_settled`]: produce the output of whichever source settles
//!   first, success or failure alike
//! - [`fold_settled`]: await sources strictly in input order, one at a
//!   time, swallow per-source failures, and left-fold the surviving values
//!   with a binary operation
//!
//! The fold runner is the interesting one: it is the only combinator here
//! that tolerates partial failure. A failing source never cancels or skips
//! its siblings; its reason is recorded and the run continues.
//!
//! # Core Guarantees
//!
//! - **Input-order settling**: [`fold_settled`] never awaits a source
//!   before its predecessor has settled
//! - **Failure isolation**: a source failure is absorbed locally; the fold
//!   result never fails because of a source failure alone
//! - **Deterministic fold**: surviving values are folded left-to-right in
//!   input order, so non-associative operations behave predictably
//! - **No hidden state**: accumulator and failure log live and die inside
//!   one run; only the folded value (or a typed error) escapes
//!
//! # Module Structure
//!
//! - [`answer`]: settle a yes/no answer into an immediately-settled source
//! - [`combinator`]: the collect-all, first-settled, and fold combinators
//!
//! # Example
//!
//! ```
//! use settle::fold_settled;
//! use std::future::ready;
//!
//! let result = futures_lite::future::block_on(fold_settled(
//!     vec![ready(Ok::<_, &str>(1)), ready(Err("skipped")), ready(Ok(3))],
//!     |a, b| a + b,
//! ));
//! assert_eq!(result.unwrap(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod answer;
pub mod combinator;

#[cfg(test)]
pub(crate) mod test_utils;

pub use answer::{settle_answer, WrongParameter, ANSWER_NO, ANSWER_YES};
pub use combinator::{
    collect_all, first_settled, fold_outcomes, fold_report_to_result, fold_settled,
    fold_settled_report, CollectError, FoldError, FoldReport,
};
