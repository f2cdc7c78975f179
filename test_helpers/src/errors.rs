//! Sample domain errors used to exercise propagation.
//!
//! The two types are deliberately distinct so tests can check that a
//! propagated error keeps its dynamic type, not just its message.

use expected::ErrorCapture;
use thiserror::Error;

/// Error signalling a violated precondition in the computation under test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LogicError(pub String);

/// Error signalling a failure only detectable at run time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RuntimeError(pub String);

/// Capture a fresh [`LogicError`] carrying `message`.
#[must_use]
pub fn logic_error(message: &str) -> ErrorCapture {
    ErrorCapture::new(LogicError(message.to_owned()))
}

/// Capture a fresh [`RuntimeError`] carrying `message`.
#[must_use]
pub fn runtime_error(message: &str) -> ErrorCapture {
    ErrorCapture::new(RuntimeError(message.to_owned()))
}
