/*!
 * Synchronization Types
 *
 * Small value types shared by the monitor and its callers.
 */

/// Result of a wake operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeResult {
    /// Successfully woke N waiters (N >= 1)
    Woken(usize),
    /// No waiters were waiting
    NoWaiters,
}

impl WakeResult {
    /// Check if any waiters were woken
    #[inline(always)]
    pub fn is_woken(&self) -> bool {
        matches!(self, WakeResult::Woken(_))
    }

    /// Get number of woken waiters (0 if none)
    #[inline(always)]
    pub fn count(&self) -> usize {
        match self {
            WakeResult::Woken(n) => *n,
            WakeResult::NoWaiters => 0,
        }
    }
}

/// Observable state of a binary monitor
///
/// `Free -> Held` on acquire, `Held -> Free` on release. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    #[default]
    Free,
    Held,
}

impl MonitorState {
    #[inline]
    pub fn is_held(&self) -> bool {
        matches!(self, MonitorState::Held)
    }
}

/// Counters collected by a monitor over its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorStats {
    /// Successful acquisitions (blocking and non-blocking)
    pub acquisitions: u64,
    /// Acquisitions that had to wait at least once
    pub contended: u64,
    /// Releases of a held monitor
    pub releases: u64,
}
