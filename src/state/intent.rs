//! Remembered destination for a visitor bounced to the sign-in page.
//!
//! The route guard captures the path it denied; a successful password
//! sign-in takes it exactly once. A new capture overwrites an older one, so
//! intents never leak across unrelated redirects.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared, read-once navigation intent slot (provided via context).
#[derive(Clone, Debug, Default)]
pub struct NavigationIntent {
    target: Arc<Mutex<Option<String>>>,
}

impl NavigationIntent {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remember `path` as the post-sign-in destination.
    pub fn capture(&self, path: impl Into<String>) {
        *self.slot() = Some(path.into());
    }

    /// Consume the pending destination.
    pub fn take(&self) -> Option<String> {
        self.slot().take()
    }

    pub fn peek(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Drop any pending destination without using it.
    pub fn discard(&self) {
        self.slot().take();
    }
}
