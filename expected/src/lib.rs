//! Core crate for the `expected` value-or-error container.
//!
//! An [`ExpectedValue<T>`] holds exactly one of a successfully computed `T`
//! or an [`ErrorCapture`] describing the failure that prevented computing it.
//! The captured error stays silent until the value is requested, at which
//! point it is propagated with its original dynamic type and message intact.
//!
//! ```
//! use expected::{ErrorCapture, ExpectedValue};
//!
//! #[derive(Debug, Clone, thiserror::Error)]
//! #[error("{0}")]
//! struct LogicError(String);
//!
//! let ok = ExpectedValue::new(53);
//! assert!(ok.has_value());
//! assert_eq!(ok.value().copied().ok(), Some(53));
//!
//! let failed: ExpectedValue<i32> = ErrorCapture::new(LogicError("test".into())).into();
//! assert!(failed.has_error());
//! let original = failed.expect_error::<LogicError>();
//! assert_eq!(original.map(|e| e.0).ok().as_deref(), Some("test"));
//! ```

mod capture;
mod error;
mod result_ext;
#[cfg(feature = "serde")]
mod serialize;
mod value;

pub use capture::ErrorCapture;
pub use error::{BadExpectedType, ExpectedError, PanicError};
#[cfg(feature = "serde")]
pub use error::DeserializedError;
pub use result_ext::{CaptureResultExt, ExpectedResultExt};
pub use value::{ExpectedValue, catch_unwind, make, make_error, swap};
