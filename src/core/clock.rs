/*!
 * Simulation Clock
 * Monotonic tick counter owned by the engine
 */

use super::types::Tick;

/// Tick counter
///
/// Starts at zero and only moves forward, one tick at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: Tick,
}

impl Clock {
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    #[inline(always)]
    pub const fn now(&self) -> Tick {
        self.now
    }

    /// Advance by exactly one tick, returning the new time
    #[inline]
    pub(crate) fn increment(&mut self) -> Tick {
        self.now += 1;
        self.now
    }
}
