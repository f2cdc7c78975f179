//! Equality and ordering.
//!
//! Values compare by `T`. Errors compare by identity: two containers holding
//! handles to the same captured error are equal, and independently captured
//! errors are not, even when their messages match. Errors have no ordering
//! beyond that identity, so mixed or distinct-error comparisons are
//! unordered.

use std::cmp::Ordering;

use super::{ExpectedValue, State};

impl<T: PartialEq> PartialEq for ExpectedValue<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Value(a), State::Value(b)) => a == b,
            (State::Error(a), State::Error(b)) => a.same_error(b),
            _ => false,
        }
    }
}

impl<T: Eq> Eq for ExpectedValue<T> {}

impl<T: PartialOrd> PartialOrd for ExpectedValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.state, &other.state) {
            (State::Value(a), State::Value(b)) => a.partial_cmp(b),
            (State::Error(a), State::Error(b)) if a.same_error(b) => Some(Ordering::Equal),
            _ => None,
        }
    }
}
