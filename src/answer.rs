//! Settle a yes/no answer into an immediately-settled source.
//!
//! The returned future is already settled when it is created: awaiting it
//! never suspends. `Some(true)` and `Some(false)` settle successfully with
//! one of two fixed messages; `None` (no boolean was given) settles as a
//! failure with a fixed error message.

use std::future::{ready, Ready};

/// Fixed success message for an affirmative answer.
pub const ANSWER_YES: &str = "Hooray!!! She said \"Yes\"!";

/// Fixed success message for a negative answer.
pub const ANSWER_NO: &str = "Oh no, she said \"No\".";

/// Error produced when no boolean answer was given.
///
/// Renders as the fixed message `Wrong parameter is passed! Ask her again.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Wrong parameter is passed! Ask her again.")]
pub struct WrongParameter;

/// Settles a yes/no answer into an asynchronous result.
///
/// The returned future is already settled; awaiting it never suspends.
///
/// - `Some(true)` succeeds with [`ANSWER_YES`]
/// - `Some(false)` succeeds with [`ANSWER_NO`]
/// - `None` fails with [`WrongParameter`]
///
/// # Example
/// ```
/// use settle::answer::{settle_answer, ANSWER_YES};
///
/// let answer = futures_lite::future::block_on(settle_answer(Some(true)));
/// assert_eq!(answer.unwrap(), ANSWER_YES);
/// ```
pub fn settle_answer(answer: Option<bool>) -> Ready<Result<&'static str, WrongParameter>> {
    ready(match answer {
        Some(true) => Ok(ANSWER_YES),
        Some(false) => Ok(ANSWER_NO),
        None => Err(WrongParameter),
    })
}
