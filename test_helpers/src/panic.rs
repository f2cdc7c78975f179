//! Helpers for catching errors propagated by dereference in tests.
//!
//! The panic hook is process-global state, so swapping it requires
//! serialized access across all test files. [`quiet`] returns an RAII guard
//! that holds a global mutex, replaces the hook with a silent one and
//! restores the original hook on drop.
//!
//! # Examples
//!
//! ```
//! use expected::ExpectedValue;
//! use expected_test_helpers::{errors, panic};
//!
//! let failed = ExpectedValue::<i32>::from_error(errors::logic_error("boom"));
//! let err = panic::catch_propagated(|| *failed).expect_err("deref propagates");
//! assert!(err.is::<errors::LogicError>());
//! ```

use std::panic::{self as std_panic, PanicHookInfo, UnwindSafe};
use std::sync::LazyLock;

use expected::ErrorCapture;
use parking_lot::{Mutex, MutexGuard};

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

static HOOK_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard that silences the panic hook and restores it on drop.
#[must_use = "dropping restores the prior panic hook"]
pub struct QuietPanicGuard {
    original: Option<Hook>,
    _lock: MutexGuard<'static, ()>,
}

/// Silence the panic hook until the returned guard is dropped.
pub fn quiet() -> QuietPanicGuard {
    let lock = HOOK_MUTEX.lock();
    let original = std_panic::take_hook();
    std_panic::set_hook(Box::new(|_: &PanicHookInfo<'_>| {}));
    QuietPanicGuard {
        original: Some(original),
        _lock: lock,
    }
}

impl Drop for QuietPanicGuard {
    fn drop(&mut self) {
        if let Some(hook) = self.original.take() {
            std_panic::set_hook(hook);
        }
    }
}

/// Run `f` with the panic hook silenced, returning the error it propagated.
///
/// # Errors
///
/// Returns the [`ErrorCapture`] recovered from the unwind when `f` panics.
/// Panics that did not carry an [`ErrorCapture`] are reported as an
/// [`expected::PanicError`].
pub fn catch_propagated<F, R>(f: F) -> Result<R, ErrorCapture>
where
    F: FnOnce() -> R + UnwindSafe,
{
    let _guard = quiet();
    expected::catch_unwind(f).into_result()
}
