//! What a failed assertion does after its critical line has been written.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertAction {
    /// Stop in an attached debugger (`SIGTRAP` on unix), then abort
    Breakpoint,
    /// Abort the process immediately
    Abort,
    /// Unwind with a panic carrying the assertion message
    Panic,
}

impl Default for AssertAction {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            AssertAction::Breakpoint
        } else {
            AssertAction::Abort
        }
    }
}

impl AssertAction {
    pub(crate) fn trigger(self, message: &str) -> ! {
        match self {
            AssertAction::Panic => panic!("assertion failed: {message}"),
            AssertAction::Breakpoint => {
                breakpoint();
                std::process::abort()
            }
            AssertAction::Abort => std::process::abort(),
        }
    }
}

#[cfg(unix)]
fn breakpoint() {
    // SAFETY: raising a signal on the calling thread has no memory-safety preconditions.
    unsafe {
        libc::raise(libc::SIGTRAP);
    }
}

#[cfg(not(unix))]
fn breakpoint() {}
