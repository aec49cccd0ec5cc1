/*!
 * Binary Monitor
 *
 * Mutual-exclusion gate over a single `locked` flag, built from a
 * `parking_lot::Mutex` and a `parking_lot::Condvar`.
 *
 * # Semantics
 *
 * - `acquire` blocks until the flag is false, then sets it. The check and
 *   the set happen in one mutex critical section.
 * - `release` clears the flag and wakes exactly one parked waiter.
 * - Every wake re-checks the flag, so spurious wakeups and a caller that
 *   slips in between `release` and the woken thread are both harmless.
 *
 * # Fairness
 *
 * No starvation guarantee. `release` hands the wakeup to one parked
 * thread, but a thread arriving at `acquire` at that moment can take the
 * flag first, and the woken thread parks again.
 */

use super::traits::{MonitorState, MonitorStats, WakeResult};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{trace, warn};

/// Binary monitor guarding one shared resource
///
/// Owned by the orchestrating routine and lent to workers by reference.
///
/// # Example
///
/// ```
/// use sync_lab::core::sync::{Monitor, MonitorState};
///
/// let monitor = Monitor::new();
/// monitor.acquire();
/// assert_eq!(monitor.state(), MonitorState::Held);
/// monitor.release();
/// assert_eq!(monitor.state(), MonitorState::Free);
/// ```
pub struct Monitor {
    locked: Mutex<bool>,
    available: Condvar,
    acquisitions: AtomicU64,
    contended: AtomicU64,
    releases: AtomicU64,
}

impl Monitor {
    /// Create a free monitor
    pub const fn new() -> Self {
        Self {
            locked: Mutex::new(false),
            available: Condvar::new(),
            acquisitions: AtomicU64::new(0),
            contended: AtomicU64::new(0),
            releases: AtomicU64::new(0),
        }
    }

    /// Block until the monitor is free, then take it
    pub fn acquire(&self) {
        let mut locked = self.locked.lock();

        if *locked {
            self.contended.fetch_add(1, Ordering::Relaxed);
            trace!("monitor held, waiting");
            while *locked {
                self.available.wait(&mut locked);
            }
        }

        *locked = true;
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        trace!("monitor acquired");
    }

    /// Take the monitor only if it is free right now
    pub fn try_acquire(&self) -> bool {
        let mut locked = self.locked.lock();
        if *locked {
            return false;
        }

        *locked = true;
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        trace!("monitor acquired without waiting");
        true
    }

    /// Free the monitor and wake one waiter
    ///
    /// The caller must hold the monitor. Releasing a free monitor is logged
    /// and otherwise ignored.
    pub fn release(&self) -> WakeResult {
        let mut locked = self.locked.lock();
        if !*locked {
            warn!("release called on a free monitor");
            return WakeResult::NoWaiters;
        }

        *locked = false;
        self.releases.fetch_add(1, Ordering::Relaxed);

        if self.available.notify_one() {
            trace!("monitor released, woke one waiter");
            WakeResult::Woken(1)
        } else {
            trace!("monitor released, no waiters");
            WakeResult::NoWaiters
        }
    }

    /// Acquire and return a guard that releases on drop
    #[must_use = "the monitor is released as soon as the guard is dropped"]
    pub fn enter(&self) -> MonitorGuard<'_> {
        self.acquire();
        MonitorGuard { monitor: self }
    }

    /// Run `f` while holding the monitor
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.enter();
        f()
    }

    /// Current state (a snapshot, may change immediately)
    pub fn state(&self) -> MonitorState {
        if *self.locked.lock() {
            MonitorState::Held
        } else {
            MonitorState::Free
        }
    }

    pub fn stats(&self) -> MonitorStats {
        MonitorStats {
            acquisitions: self.acquisitions.load(Ordering::Relaxed),
            contended: self.contended.load(Ordering::Relaxed),
            releases: self.releases.load(Ordering::Relaxed),
        }
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("state", &self.state())
            .field("stats", &self.stats())
            .finish()
    }
}

/// RAII hold on a [`Monitor`]
///
/// Releases on drop, including during unwinding.
pub struct MonitorGuard<'a> {
    monitor: &'a Monitor,
}

impl Drop for MonitorGuard<'_> {
    fn drop(&mut self) {
        self.monitor.release();
    }
}
