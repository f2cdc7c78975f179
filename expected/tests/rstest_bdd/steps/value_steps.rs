//! Steps constructing containers and inspecting held values.

use crate::fixtures::ExpectedContext;
use anyhow::{Result, anyhow, ensure};
use expected::ExpectedValue;
use rstest_bdd_macros::{given, then, when};

#[given("an expected integer holding {value:i32}")]
fn integer_holding(expected_context: &ExpectedContext, value: i32) {
    expected_context.int_value.set(ExpectedValue::new(value));
}

#[given("a default expected integer")]
fn default_integer(expected_context: &ExpectedContext) {
    expected_context.int_value.set(ExpectedValue::default());
}

#[given("the source string {text}")]
fn source_string(expected_context: &ExpectedContext, text: String) -> Result<()> {
    ensure!(
        expected_context.source_text.is_empty(),
        "source string already initialised"
    );
    expected_context.source_text.set(text);
    Ok(())
}

#[when("the source string is moved into a container")]
fn move_into_container(expected_context: &ExpectedContext) -> Result<()> {
    let mut text = expected_context
        .source_text
        .take()
        .ok_or_else(|| anyhow!("source string missing"))?;
    let container = ExpectedValue::new(std::mem::take(&mut text));
    expected_context.source_text.set(text);
    expected_context.text_value.set(container);
    Ok(())
}

#[when("the string container is moved from")]
fn move_from_container(expected_context: &ExpectedContext) -> Result<()> {
    let mut container = expected_context
        .text_value
        .take()
        .ok_or_else(|| anyhow!("string container missing"))?;
    let moved = container.take();
    expected_context.text_value.set(container);
    expected_context.moved_text.set(moved);
    Ok(())
}

#[then("the integer container holds a value")]
fn integer_holds_value(expected_context: &ExpectedContext) -> Result<()> {
    let holds = expected_context
        .int_value
        .with_ref(ExpectedValue::has_value)
        .ok_or_else(|| anyhow!("integer container missing"))?;
    ensure!(holds, "expected the integer container to hold a value");
    Ok(())
}

#[then("the integer value is {expected:i32}")]
fn integer_value_is(expected_context: &ExpectedContext, expected: i32) -> Result<()> {
    let actual = expected_context
        .int_value
        .with_ref(|container| container.value().copied())
        .ok_or_else(|| anyhow!("integer container missing"))??;
    ensure!(actual == expected, "expected {expected}, got {actual}");
    Ok(())
}

#[then("the source string is empty")]
fn source_is_empty(expected_context: &ExpectedContext) -> Result<()> {
    let empty = expected_context
        .source_text
        .with_ref(String::is_empty)
        .ok_or_else(|| anyhow!("source string missing"))?;
    ensure!(empty, "moved-from source string should be empty");
    Ok(())
}

#[then("the string value is {expected}")]
fn string_value_is(expected_context: &ExpectedContext, expected: String) -> Result<()> {
    let actual = expected_context
        .text_value
        .with_ref(|container| container.value().cloned())
        .ok_or_else(|| anyhow!("string container missing"))??;
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}

#[then("the string container still holds a value")]
fn string_still_holds_value(expected_context: &ExpectedContext) -> Result<()> {
    let moved_from_empty = expected_context
        .text_value
        .with_ref(|container| container.value().map(String::is_empty))
        .ok_or_else(|| anyhow!("string container missing"))??;
    ensure!(
        moved_from_empty,
        "moved-from container should hold an empty string"
    );
    Ok(())
}

#[then("the moved string value is {expected}")]
fn moved_string_value_is(expected_context: &ExpectedContext, expected: String) -> Result<()> {
    let actual = expected_context
        .moved_text
        .with_ref(|container| container.value().cloned())
        .ok_or_else(|| anyhow!("moved container missing"))??;
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}
