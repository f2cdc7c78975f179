//! Error types produced by the value-or-error container.

mod conversions;
mod types;

pub use types::{BadExpectedType, ExpectedError, PanicError};
#[cfg(feature = "serde")]
pub use types::DeserializedError;
