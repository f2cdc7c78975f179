//! Extensions for moving between `Result` and [`ExpectedValue`] concisely.
//!
//! These helpers reduce repetitive `.map_err(ErrorCapture::new)` and
//! `ExpectedValue::from(...)` calls at the boundary between code that
//! returns `Result<T, E>` and code that stores outcomes in an
//! [`ExpectedValue`].
//!
//! - Use [`ExpectedResultExt::into_expected`] to store a `Result` in a
//!   container.
//! - Use [`CaptureResultExt::capture_err`] to keep the `Result` shape while
//!   erasing the error type.
//!
//! # Examples
//!
//! ```
//! use expected::{CaptureResultExt, ExpectedResultExt};
//!
//! let parsed = "53".parse::<i32>().into_expected();
//! assert_eq!(*parsed, 53);
//!
//! let failed = "x".parse::<i32>().capture_err();
//! assert!(failed.is_err_and(|e| e.is::<std::num::ParseIntError>()));
//! ```

use std::error::Error;

use crate::{ErrorCapture, ExpectedValue};

/// Store any `Result<T, E>` with a capturable error in an [`ExpectedValue`].
pub trait ExpectedResultExt<T> {
    /// Convert into an [`ExpectedValue`], capturing the error if present.
    fn into_expected(self) -> ExpectedValue<T>;
}

impl<T, E> ExpectedResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn into_expected(self) -> ExpectedValue<T> {
        ExpectedValue::from(self)
    }
}

/// Erase the error type of a `Result` into an [`ErrorCapture`].
pub trait CaptureResultExt<T> {
    /// Convert `Result<T, E>` into `Result<T, ErrorCapture>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after capturing it.
    fn capture_err(self) -> Result<T, ErrorCapture>;
}

impl<T, E> CaptureResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn capture_err(self) -> Result<T, ErrorCapture> {
        self.map_err(ErrorCapture::new)
    }
}
