//! Conversions and inspection helpers for `ExpectedError`.

use crate::ErrorCapture;

use super::{BadExpectedType, ExpectedError};

impl ExpectedError {
    /// Returns `true` when the container was used in the wrong state.
    #[must_use]
    pub const fn is_wrong_state(&self) -> bool {
        matches!(self, Self::WrongState(_))
    }

    /// Borrow the propagated domain error, if this is one.
    #[must_use]
    pub const fn propagated(&self) -> Option<&ErrorCapture> {
        match self {
            Self::Propagated(capture) => Some(capture),
            Self::WrongState(_) => None,
        }
    }

    /// Convert into the propagated domain error, if this is one.
    #[must_use]
    pub fn into_propagated(self) -> Option<ErrorCapture> {
        match self {
            Self::Propagated(capture) => Some(capture),
            Self::WrongState(_) => None,
        }
    }
}

impl From<ErrorCapture> for ExpectedError {
    fn from(capture: ErrorCapture) -> Self {
        Self::Propagated(capture)
    }
}

impl From<BadExpectedType> for ExpectedError {
    fn from(err: BadExpectedType) -> Self {
        Self::WrongState(err)
    }
}
