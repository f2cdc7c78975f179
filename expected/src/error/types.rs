//! Usage errors and propagated domain errors.

use std::fmt;

use thiserror::Error;

use crate::ErrorCapture;

/// Wrong-state condition raised when the container is used against its
/// contract.
///
/// These are programmer errors and never stand in for the error a
/// computation failed with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BadExpectedType {
    /// `raise()` was called while a value was held.
    #[error("raise() called on an expected value that holds a value")]
    RaiseOnValue,

    /// An error of type `requested` was asked for while a value was held.
    #[error("expected an error of type `{requested}` but a value is held")]
    ExpectOnValue {
        /// Name of the requested error type.
        requested: &'static str,
    },

    /// The held error is not of the requested type.
    #[error("held error is not a `{requested}`: {actual}")]
    TypeMismatch {
        /// Name of the requested error type.
        requested: &'static str,
        /// Message of the error actually held.
        actual: String,
    },
}

/// Failure surfaced by [`crate::ExpectedValue::raise`].
///
/// Callers can always tell a misuse of the container apart from the
/// original computation's failure by matching on the variant.
///
/// A propagated error displays as the captured error and reports it as its
/// [`source`](std::error::Error::source), so error chains walked by callers
/// (for example `anyhow::Error::chain`) reach the original concrete type.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ExpectedError {
    /// The captured domain error, propagated unchanged.
    Propagated(ErrorCapture),

    /// The container was used in the wrong state.
    WrongState(BadExpectedType),
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagated(error) => fmt::Display::fmt(error, f),
            Self::WrongState(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for ExpectedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Propagated(error) => Some(error.as_error()),
            Self::WrongState(_) => None,
        }
    }
}

/// Domain error synthesised from a panic payload that was not itself an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PanicError {
    /// Message carried by the panic.
    pub message: String,
}

/// Error alternative read back from a serialized container.
///
/// Only the message survives serialization; the original dynamic type does
/// not.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DeserializedError {
    /// Message recorded when the container was serialized.
    pub message: String,
}
