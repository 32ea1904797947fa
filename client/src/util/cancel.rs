//! Structured cooperative cancellation for page-scoped fetches.
//!
//! DESIGN
//! ======
//! Each page creates one scope, hands clones into its spawned fetches, and
//! cancels it in `on_cleanup`. Fetches check the scope after every await so
//! a late response never mutates state for a torn-down view. This does not
//! abort the underlying network call; it only fences the state writes.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared cancellation flag. Clones observe the same scope.
#[derive(Clone, Debug, Default)]
pub struct CancelScope(Arc<AtomicBool>);

impl CancelScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the scope cancelled. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
