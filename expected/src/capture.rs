//! Type-erased handle to a previously raised error.

use std::{
    any::{Any, type_name},
    error::Error,
    fmt,
    panic::{RefUnwindSafe, UnwindSafe},
    sync::Arc,
};

use crate::error::{BadExpectedType, ExpectedError, PanicError};

type DynError = dyn Error + Send + Sync + 'static;

/// Opaque, cheaply cloneable handle to a captured error.
///
/// The handle does not know the static type of the error it refers to. The
/// original dynamic type survives capture and can be recovered with
/// [`ErrorCapture::is`], [`ErrorCapture::downcast_ref`] or
/// [`ErrorCapture::extract`]. Cloning bumps a reference count; it never
/// duplicates the underlying error.
///
/// # Examples
///
/// ```
/// use expected::ErrorCapture;
///
/// let capture = ErrorCapture::new(std::fmt::Error);
/// let copy = capture.clone();
/// assert!(copy.same_error(&capture));
/// assert!(copy.is::<std::fmt::Error>());
/// ```
#[derive(Clone)]
pub struct ErrorCapture(Arc<DynError>);

impl ErrorCapture {
    /// Capture `error`.
    ///
    /// Capturing an [`ErrorCapture`], or an [`ExpectedError::Propagated`]
    /// wrapping one, returns that handle unchanged, so a propagated error
    /// keeps its identity and dynamic type when it is captured again.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let any: &dyn Any = &error;
        if let Some(existing) = any.downcast_ref::<Self>() {
            return existing.clone();
        }
        if let Some(ExpectedError::Propagated(existing)) = any.downcast_ref::<ExpectedError>() {
            return existing.clone();
        }
        Self(Arc::new(error))
    }

    /// Capture an already boxed error.
    ///
    /// Boxed handles and propagated errors are unwrapped as in
    /// [`ErrorCapture::new`].
    #[must_use]
    pub fn from_boxed(error: Box<DynError>) -> Self {
        if let Some(existing) = error.downcast_ref::<Self>() {
            return existing.clone();
        }
        if let Some(ExpectedError::Propagated(existing)) = error.downcast_ref::<ExpectedError>() {
            return existing.clone();
        }
        Self(Arc::from(error))
    }

    /// Capture the payload of an unwinding panic.
    ///
    /// A payload that is itself an [`ErrorCapture`] (as raised by
    /// dereferencing an error-holding [`crate::ExpectedValue`]) is returned
    /// as-is. String payloads become a [`PanicError`] carrying the message.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let non_capture = match payload.downcast::<Self>() {
            Ok(capture) => return *capture,
            Err(other) => other,
        };
        let message = match non_capture.downcast::<String>() {
            Ok(message) => *message,
            Err(other) => other.downcast_ref::<&'static str>().map_or_else(
                || String::from("panic with a non-string payload"),
                |message| (*message).to_owned(),
            ),
        };
        Self::new(PanicError { message })
    }

    /// Returns `true` when the captured error is an `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.0.is::<E>()
    }

    /// Borrow the captured error as an `E` when its dynamic type matches.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Attempt to extract a copy of the captured error as an `E`.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedType::TypeMismatch`] when the captured error is
    /// not an `E`.
    pub fn extract<E>(&self) -> Result<E, BadExpectedType>
    where
        E: Error + Clone + 'static,
    {
        self.downcast_ref::<E>()
            .cloned()
            .ok_or_else(|| BadExpectedType::TypeMismatch {
                requested: type_name::<E>(),
                actual: self.to_string(),
            })
    }

    /// Re-raise the captured error.
    ///
    /// # Errors
    ///
    /// Always returns `Err` with a handle to the same underlying error.
    pub fn rethrow<U>(&self) -> Result<U, Self> {
        Err(self.clone())
    }

    /// Returns `true` when both handles refer to the same captured error.
    #[must_use]
    pub fn same_error(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the captured error as a trait object.
    #[must_use]
    pub fn as_error(&self) -> &DynError {
        self.0.as_ref()
    }
}

impl fmt::Debug for ErrorCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ErrorCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl Error for ErrorCapture {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

// Captured errors are only ever reached through shared references.
impl UnwindSafe for ErrorCapture {}
impl RefUnwindSafe for ErrorCapture {}

impl From<Box<DynError>> for ErrorCapture {
    fn from(error: Box<DynError>) -> Self {
        Self::from_boxed(error)
    }
}
