//! Combinators for settling a sequence of sources into one result.
//!
//! This module provides the three settling disciplines:
//!
//! - [`collect`]: await all sources, fail fast on the first failure
//! - [`race`]: first source to settle wins
//! - [`fold`]: sequential settling with partial-failure tolerance and a
//!   left-fold of the surviving values
//!
//! `collect` and `race` are thin adapters over the runtime's own
//! primitives. `fold` carries the actual control flow: one await per
//! source, strictly in input order, failures absorbed rather than
//! propagated.

pub mod collect;
pub mod fold;
pub mod race;

pub use collect::{collect_all, CollectError};
pub use fold::{
    fold_outcomes, fold_report_to_result, fold_settled, fold_settled_report, FoldError, FoldReport,
};
pub use race::first_settled;
