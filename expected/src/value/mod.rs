//! The value-or-error container and its constructors.

mod access;
mod assign;
mod cmp;

use std::{
    error::Error,
    panic::{self, UnwindSafe},
};

use crate::ErrorCapture;

/// Storage for the active alternative.
#[derive(Debug, Clone)]
enum State<T> {
    Value(T),
    Error(ErrorCapture),
}

/// Holds either a successfully computed `T` or the captured error that
/// prevented computing it.
///
/// There is no empty state: a default-constructed container holds
/// `T::default()`. A held error is silent until the value is requested
/// through [`ExpectedValue::value`], dereference or [`ExpectedValue::raise`],
/// at which point the original error surfaces with its dynamic type and
/// message unchanged.
///
/// The container performs no internal synchronisation. Sharing one across
/// threads follows the usual borrowing rules for `T`.
///
/// # Examples
///
/// ```
/// use expected::ExpectedValue;
///
/// let mut value = ExpectedValue::<String>::default();
/// value.assign(String::from("copy"));
/// let copy = value.clone();
/// assert_eq!(copy, value);
/// assert_eq!(copy.value().map(String::as_str).ok(), Some("copy"));
/// ```
#[derive(Debug)]
pub struct ExpectedValue<T> {
    state: State<T>,
}

impl<T> ExpectedValue<T> {
    /// Wrap a successfully computed value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Wrap a captured error.
    #[must_use]
    pub const fn from_error(error: ErrorCapture) -> Self {
        Self {
            state: State::Error(error),
        }
    }

    /// Returns `true` when a value is held.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Returns `true` when an error is held.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        matches!(self.state, State::Error(_))
    }

    /// Exchange the full state of two containers.
    pub const fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.state, &mut other.state);
    }
}

impl<T: Default> Default for ExpectedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Clone for ExpectedValue<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    /// Copy-assign `source` into `self`, reusing the held value's storage
    /// when both sides hold values.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.state, &source.state) {
            (State::Value(dst), State::Value(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

impl<T> From<ErrorCapture> for ExpectedValue<T> {
    fn from(error: ErrorCapture) -> Self {
        Self::from_error(error)
    }
}

impl<T, E> From<Result<T, E>> for ExpectedValue<T>
where
    E: Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(err) => Self::from_error(ErrorCapture::new(err)),
        }
    }
}

impl<T> From<ExpectedValue<T>> for Result<T, ErrorCapture> {
    fn from(expected: ExpectedValue<T>) -> Self {
        expected.into_result()
    }
}

impl<T> From<&ExpectedValue<T>> for bool {
    fn from(expected: &ExpectedValue<T>) -> Self {
        expected.has_value()
    }
}

/// Build a container holding `value`.
///
/// ```
/// let value = expected::make(String::from("make-expected"));
/// assert_eq!(*value, "make-expected");
/// ```
#[must_use]
pub const fn make<T>(value: T) -> ExpectedValue<T> {
    ExpectedValue::new(value)
}

/// Build a container of `T` holding `error`.
#[must_use]
pub const fn make_error<T>(error: ErrorCapture) -> ExpectedValue<T> {
    ExpectedValue::from_error(error)
}

/// Exchange the full state of two containers.
pub const fn swap<T>(a: &mut ExpectedValue<T>, b: &mut ExpectedValue<T>) {
    a.swap(b);
}

/// Run `f`, capturing an unwinding panic into the error alternative.
///
/// A panic raised by dereferencing an error-holding container carries its
/// [`ErrorCapture`], so the original error is recovered intact. Other panic
/// payloads become a [`crate::PanicError`]. The process panic hook still
/// runs before the unwind is caught.
///
/// ```
/// use expected::{ErrorCapture, ExpectedValue, catch_unwind};
///
/// let failed = ExpectedValue::<i32>::from_error(ErrorCapture::new(std::fmt::Error));
/// let caught = catch_unwind(|| *failed + 1);
/// assert!(caught.has_error());
/// assert!(caught.error().is_some_and(|e| e.is::<std::fmt::Error>()));
/// ```
pub fn catch_unwind<T, F>(f: F) -> ExpectedValue<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => ExpectedValue::new(value),
        Err(payload) => {
            let capture = ErrorCapture::from_panic(payload);
            tracing::debug!(error = %capture, "captured unwinding panic");
            ExpectedValue::from_error(capture)
        }
    }
}
