//! Condition assertions for test code.

use crate::actions::Actions;
use crate::conditions::Condition;
use crate::result::{ActuarError, ActuarResult};
use crate::timeout::Timeout;

/// Wait for `condition` and turn a miss into an assertion failure.
///
/// The returned error carries the caller's `message` plus the condition
/// description, so a failing test names both the intent and the probe.
///
/// # Errors
///
/// Returns [`ActuarError::AssertionFailed`] when the condition does not hold
/// within the timeout, or when probing it fails outright.
pub async fn assert_condition(
    actions: &Actions,
    condition: &dyn Condition,
    timeout: Timeout,
    message: &str,
) -> ActuarResult<()> {
    match actions.wait_for_with(condition, timeout).await {
        Ok(()) => Ok(()),
        Err(err) => Err(ActuarError::AssertionFailed {
            message: format!("{message} ({}): {err}", condition.description()),
        }),
    }
}
