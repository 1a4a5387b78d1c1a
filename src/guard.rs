use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::warn;

/// Runs a cleanup action exactly once when the guard goes out of scope.
///
/// The action fires on every exit path (normal return, early `?` return,
/// panic unwinding) unless the guard was [`dismiss`]ed or the action was
/// already run via [`invoke_now`]. The guard owns only the closure; the
/// resource being cleaned up stays owned by the surrounding scope.
///
/// If the guard is dropped while the thread is already unwinding from
/// another panic, a panic raised by the cleanup action is caught and
/// discarded (logged through the `log` facade) so the original failure
/// stays the one the caller observes. During a normal drop a cleanup
/// panic propagates.
///
/// [`dismiss`]: ScopedAction::dismiss
/// [`invoke_now`]: ScopedAction::invoke_now
pub struct ScopedAction<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ScopedAction<F> {
    /// Stores `action` without invoking it.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Cancels the pending action without running it. Idempotent.
    ///
    /// Call this when the cleanup obligation has been handed off, e.g. the
    /// guarded resource is being returned to the caller.
    pub fn dismiss(&mut self) {
        self.action = None;
    }

    /// Runs the action immediately if it is still pending; no-op otherwise.
    ///
    /// A panic raised by the action propagates to the caller. The action
    /// will not run again when the guard is dropped.
    pub fn invoke_now(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }

    /// Whether the action is still pending.
    pub fn is_active(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for ScopedAction<F> {
    fn drop(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };

        if std::thread::panicking() {
            // A second panic while unwinding would abort the process and
            // mask the failure already in flight.
            if panic::catch_unwind(AssertUnwindSafe(action)).is_err() {
                warn!("cleanup action panicked during unwinding, discarding");
            }
        } else {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for ScopedAction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedAction")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Runs an expression when the enclosing scope exits.
///
/// Expands to an anonymous [`ScopedAction`] bound to a local, so the body
/// runs at the end of the current block, after everything declared below it
/// has been dropped.
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::guard::ScopedAction::new(|| {
            $($body)*
        });
    };
}
