//! Scoped document scroll lock
//!
//! Overlays suppress page scrolling while they are visible. Instead of writing
//! a global style flag, callers acquire a [`ScrollLockGuard`] from the
//! [`DocumentScroll`] capability; the page stays locked while any guard is
//! alive and unlocks when the last one is dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Capability controlling whether the page behind overlays may scroll
#[derive(Debug, Clone, Default)]
pub struct DocumentScroll {
    holders: Arc<AtomicUsize>,
}

impl DocumentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a lock; page scroll stays suppressed until the guard drops
    pub fn lock(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::debug!("document scroll locked");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Check if any guard currently holds the lock
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    /// Number of live guards
    pub fn holder_count(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// RAII guard returned by [`DocumentScroll::lock`]
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("document scroll unlocked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let document = DocumentScroll::new();
        assert!(!document.is_locked());

        let guard = document.lock();
        assert!(document.is_locked());

        drop(guard);
        assert!(!document.is_locked());
    }

    #[test]
    fn test_nested_guards() {
        let document = DocumentScroll::new();
        let first = document.lock();
        let second = document.clone().lock();
        assert_eq!(document.holder_count(), 2);

        drop(first);
        assert!(document.is_locked());
        drop(second);
        assert!(!document.is_locked());
    }
}
