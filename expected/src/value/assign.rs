//! In-place assignment and moves that leave an observable source behind.

use std::mem;

use super::{ExpectedValue, State};
use crate::ErrorCapture;

impl<T> ExpectedValue<T> {
    /// Move-assign a value.
    ///
    /// When a value is already held it is overwritten in place; otherwise the
    /// held error is dropped and replaced by `value`. Either way the
    /// container holds a value afterwards.
    pub fn assign(&mut self, value: T) {
        match &mut self.state {
            State::Value(held) => *held = value,
            State::Error(_) => {
                tracing::trace!("replacing held error with a value");
                self.state = State::Value(value);
            }
        }
    }

    /// Copy-assign a value, reusing the held value's storage when possible.
    pub fn assign_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        match &mut self.state {
            State::Value(held) => held.clone_from(value),
            State::Error(_) => {
                tracing::trace!("replacing held error with a value");
                self.state = State::Value(value.clone());
            }
        }
    }

    /// Replace the current state with `error`.
    pub fn assign_error(&mut self, error: ErrorCapture) {
        self.state = State::Error(error);
    }

    /// Move the contents out, leaving `self` observably moved-from.
    ///
    /// A held value is moved into the returned container and `self` keeps
    /// holding a value, now `T::default()`. A held error is shared with the
    /// returned container and `self` is left unchanged.
    ///
    /// ```
    /// use expected::ExpectedValue;
    ///
    /// let mut source = ExpectedValue::new(String::from("move"));
    /// let moved = source.take();
    /// assert!(source.has_value());
    /// assert_eq!(source.value().map(String::is_empty).ok(), Some(true));
    /// assert_eq!(*moved, "move");
    /// ```
    #[must_use = "the moved contents are lost if the result is discarded"]
    pub fn take(&mut self) -> Self
    where
        T: Default,
    {
        match &mut self.state {
            State::Value(held) => Self::new(mem::take(held)),
            State::Error(error) => Self::from_error(error.clone()),
        }
    }

    /// Move-assign from `source`, leaving it observably moved-from.
    ///
    /// This is [`ExpectedValue::take`] followed by assignment: a value held
    /// by `source` is moved into `self` in place when `self` already holds a
    /// value.
    pub fn assign_take(&mut self, source: &mut Self)
    where
        T: Default,
    {
        match (&mut self.state, &mut source.state) {
            (State::Value(dst), State::Value(src)) => *dst = mem::take(src),
            (dst, State::Value(src)) => *dst = State::Value(mem::take(src)),
            (dst, State::Error(error)) => *dst = State::Error(error.clone()),
        }
    }
}
