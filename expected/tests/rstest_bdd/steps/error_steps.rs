//! Steps exercising captured errors, propagation and usage errors.

use crate::fixtures::ExpectedContext;
use anyhow::{Result, anyhow, ensure};
use expected::{BadExpectedType, ExpectedError, ExpectedValue};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{
    errors::{self, LogicError},
    panic,
};

#[given("an expected integer holding a logic error with message {message}")]
fn integer_holding_error(expected_context: &ExpectedContext, message: String) {
    expected_context
        .int_value
        .set(ExpectedValue::from_error(errors::logic_error(&message)));
}

#[when("the integer container is dereferenced")]
fn dereference(expected_context: &ExpectedContext) -> Result<()> {
    let outcome = expected_context
        .int_value
        .with_ref(|container| panic::catch_propagated(|| **container))
        .ok_or_else(|| anyhow!("integer container missing"))?;
    let propagated = outcome
        .err()
        .ok_or_else(|| anyhow!("dereference did not propagate an error"))?;
    expected_context.propagated.set(propagated);
    Ok(())
}

#[when("the integer container is raised")]
fn raise(expected_context: &ExpectedContext) -> Result<()> {
    let Err(raised) = expected_context
        .int_value
        .with_ref(ExpectedValue::raise)
        .ok_or_else(|| anyhow!("integer container missing"))?;
    expected_context.raised.set(raised);
    Ok(())
}

#[then("the integer container holds an error")]
fn integer_holds_error(expected_context: &ExpectedContext) -> Result<()> {
    let holds = expected_context
        .int_value
        .with_ref(ExpectedValue::has_error)
        .ok_or_else(|| anyhow!("integer container missing"))?;
    ensure!(holds, "expected the integer container to hold an error");
    Ok(())
}

#[then("the held logic error has message {message}")]
fn held_logic_error(expected_context: &ExpectedContext, message: String) -> Result<()> {
    let held = expected_context
        .int_value
        .with_ref(ExpectedValue::expect_error::<LogicError>)
        .ok_or_else(|| anyhow!("integer container missing"))??;
    ensure!(held.0 == message, "expected {message:?}, got {:?}", held.0);
    Ok(())
}

#[then("a logic error with message {message} is propagated")]
fn logic_error_propagated(expected_context: &ExpectedContext, message: String) -> Result<()> {
    let propagated = expected_context
        .propagated
        .take()
        .ok_or_else(|| anyhow!("no propagated error recorded"))?;
    let logic = propagated
        .downcast_ref::<LogicError>()
        .ok_or_else(|| anyhow!("propagated error is not a LogicError: {propagated}"))?;
    ensure!(logic.0 == message, "expected {message:?}, got {:?}", logic.0);
    Ok(())
}

#[then("a wrong-state error is reported")]
fn wrong_state_reported(expected_context: &ExpectedContext) -> Result<()> {
    let raised = expected_context
        .raised
        .take()
        .ok_or_else(|| anyhow!("no raise outcome recorded"))?;
    ensure!(
        matches!(
            raised,
            ExpectedError::WrongState(BadExpectedType::RaiseOnValue)
        ),
        "unexpected raise outcome: {raised:?}"
    );
    Ok(())
}

#[then("the raised error is a logic error with message {message}")]
fn raised_logic_error(expected_context: &ExpectedContext, message: String) -> Result<()> {
    let raised = expected_context
        .raised
        .take()
        .ok_or_else(|| anyhow!("no raise outcome recorded"))?;
    let capture = raised
        .propagated()
        .ok_or_else(|| anyhow!("raise reported a usage error: {raised}"))?;
    let logic = capture
        .extract::<LogicError>()
        .map_err(|err| anyhow!("propagated error has the wrong type: {err}"))?;
    ensure!(logic.0 == message, "expected {message:?}, got {:?}", logic.0);
    Ok(())
}
