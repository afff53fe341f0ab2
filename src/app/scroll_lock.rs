//! Scoped lock suspending background list navigation.
//!
//! While the detail modal is open the result list behind it must not move.
//! The modal holds a [`ScrollLockGuard`] for as long as it is open; dropping
//! the guard releases the lock, so every path that tears the modal down also
//! unlocks the list.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the page scroll lock.
///
/// Cloning yields another handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    held: Rc<Cell<bool>>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock, `None` if it is already held.
    ///
    /// ```rust
    /// use jobboard::app::scroll_lock::ScrollLock;
    ///
    /// let lock = ScrollLock::new();
    /// let guard = lock.try_acquire();
    /// assert!(guard.is_some());
    /// assert!(lock.try_acquire().is_none());
    /// drop(guard);
    /// assert!(!lock.is_held());
    /// ```
    #[must_use]
    pub fn try_acquire(&self) -> Option<ScrollLockGuard> {
        if self.held.get() {
            return None;
        }
        self.held.set(true);
        tracing::trace!("scroll lock acquired");
        Some(ScrollLockGuard {
            held: Rc::clone(&self.held),
        })
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.get()
    }
}

/// Proof of holding the scroll lock; releases it on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    held: Rc<Cell<bool>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.held.set(false);
        tracing::trace!("scroll lock released");
    }
}
