//! Manually driven clock

use core::cell::Cell;

use levelcross_hal::Clock;

/// Clock whose time only moves when told to
///
/// Shared by reference between the timers of a simulated crossing, so one
/// `advance` moves every timer at once.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u32>,
}

impl ManualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a clock at the given time
    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(delta_ms));
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: u32) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}
