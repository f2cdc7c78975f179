//! Accessors, dereference propagation and `raise`.

use std::{
    any::type_name,
    convert::Infallible,
    error::Error,
    ops::{Deref, DerefMut},
    panic,
};

use super::{ExpectedValue, State};
use crate::{BadExpectedType, ErrorCapture, ExpectedError};

impl<T> ExpectedValue<T> {
    /// Borrow the held value.
    ///
    /// # Errors
    ///
    /// Returns the held [`ErrorCapture`] when the container holds an error.
    /// The handle refers to the original error, so its dynamic type and
    /// message are unchanged.
    pub fn value(&self) -> Result<&T, ErrorCapture> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => error.rethrow(),
        }
    }

    /// Mutably borrow the held value.
    ///
    /// # Errors
    ///
    /// Returns the held [`ErrorCapture`] when the container holds an error.
    pub fn value_mut(&mut self) -> Result<&mut T, ErrorCapture> {
        match &mut self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => error.rethrow(),
        }
    }

    /// Consume the container and return the held value.
    ///
    /// # Errors
    ///
    /// Returns the held [`ErrorCapture`] when the container holds an error.
    pub fn into_value(self) -> Result<T, ErrorCapture> {
        self.into_result()
    }

    /// Consume the container, returning the held value or `default`.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self.state {
            State::Value(value) => value,
            State::Error(_) => default,
        }
    }

    /// Consume the container, returning the held value or computing one from
    /// the held error.
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(ErrorCapture) -> T,
    {
        match self.state {
            State::Value(value) => value,
            State::Error(error) => f(error),
        }
    }

    /// Borrow the held error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorCapture> {
        match &self.state {
            State::Value(_) => None,
            State::Error(error) => Some(error),
        }
    }

    /// Borrow the active alternative as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns a reference to the held [`ErrorCapture`] when the container
    /// holds an error.
    pub const fn as_result(&self) -> Result<&T, &ErrorCapture> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => Err(error),
        }
    }

    /// Convert into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the held [`ErrorCapture`] when the container holds an error.
    pub fn into_result(self) -> Result<T, ErrorCapture> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => Err(error),
        }
    }

    /// Extract a copy of the held error as an `E`.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedType::ExpectOnValue`] when a value is held and
    /// [`BadExpectedType::TypeMismatch`] when the held error is not an `E`.
    pub fn expect_error<E>(&self) -> Result<E, BadExpectedType>
    where
        E: Error + Clone + 'static,
    {
        match &self.state {
            State::Value(_) => Err(BadExpectedType::ExpectOnValue {
                requested: type_name::<E>(),
            }),
            State::Error(error) => error.extract::<E>().inspect_err(|err| {
                tracing::debug!(%err, "held error did not match the requested type");
            }),
        }
    }

    /// Re-raise the held error.
    ///
    /// # Errors
    ///
    /// Always returns `Err`: [`ExpectedError::Propagated`] carrying the
    /// original error when one is held, or
    /// [`ExpectedError::WrongState`] when a value is held.
    pub fn raise(&self) -> Result<Infallible, ExpectedError> {
        match &self.state {
            State::Value(_) => Err(BadExpectedType::RaiseOnValue.into()),
            State::Error(error) => {
                tracing::debug!(%error, "raising held error");
                Err(ExpectedError::Propagated(error.clone()))
            }
        }
    }
}

/// Unwind with the held error as the panic payload.
fn propagate(error: &ErrorCapture) -> ! {
    tracing::debug!(%error, "propagating held error through dereference");
    panic::panic_any(error.clone())
}

/// Dereferencing yields the held value.
///
/// # Panics
///
/// Panics when an error is held. The panic payload is the held
/// [`ErrorCapture`], so [`crate::catch_unwind`] or
/// [`ErrorCapture::from_panic`] recover the original error intact. Use
/// [`ExpectedValue::value`] to receive the error as a `Result` instead.
impl<T> Deref for ExpectedValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.state {
            State::Value(value) => value,
            State::Error(error) => propagate(error),
        }
    }
}

impl<T> DerefMut for ExpectedValue<T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Value(value) => value,
            State::Error(error) => propagate(error),
        }
    }
}
