//! Flash pacing for signal lamps
//!
//! All lamps of a crossing must flash in phase, so the pacing lives in one
//! [`Blinker`] that the main loop updates once per cycle, and every signal
//! only asks whether this cycle is a toggle cycle.

use core::cell::Cell;

use levelcross_hal::Clock;

use crate::config::BLINK_INTERVAL_MS;

/// Per-tick "toggle now" predicate
pub trait BlinkTrigger {
    /// Check if lamps should toggle on this tick
    fn triggered(&self) -> bool;
}

impl<B: BlinkTrigger + ?Sized> BlinkTrigger for &B {
    fn triggered(&self) -> bool {
        (**self).triggered()
    }
}

/// A trigger driven by hand
///
/// Lets tests and external pacing sources decide tick by tick.
impl BlinkTrigger for Cell<bool> {
    fn triggered(&self) -> bool {
        self.get()
    }
}

/// Periodic blink trigger
///
/// Fires on the first update at or after each interval boundary and stays
/// latched until the next update, so every reader in the same tick sees
/// the same answer.
#[derive(Debug)]
pub struct Blinker<C> {
    clock: C,
    interval_ms: u32,
    last_ms: Cell<u32>,
    fired: Cell<bool>,
}

impl<C: Clock> Blinker<C> {
    /// Create a blinker with the default interval
    pub fn new(clock: C) -> Self {
        Self::with_interval(clock, BLINK_INTERVAL_MS)
    }

    /// Create a blinker toggling every `interval_ms`
    pub fn with_interval(clock: C, interval_ms: u32) -> Self {
        let last_ms = Cell::new(clock.now_ms());
        Self {
            clock,
            interval_ms,
            last_ms,
            fired: Cell::new(false),
        }
    }

    /// Latch the trigger for the current cycle
    ///
    /// Call once per main-loop cycle, before the crossing tick.
    pub fn update(&self) {
        let now = self.clock.now_ms();
        let due = now.wrapping_sub(self.last_ms.get()) >= self.interval_ms;
        if due {
            self.last_ms.set(now);
        }
        self.fired.set(due);
    }

    /// Get the toggle interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

impl<C: Clock> BlinkTrigger for Blinker<C> {
    fn triggered(&self) -> bool {
        self.fired.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;

    #[test]
    fn test_fires_once_per_interval() {
        let clock = ManualClock::new();
        let blinker = Blinker::with_interval(&clock, 500);

        let mut fired = 0;
        for _ in 0..2000 {
            clock.advance(1);
            blinker.update();
            if blinker.triggered() {
                fired += 1;
            }
        }
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_latched_for_all_readers() {
        let clock = ManualClock::new();
        let blinker = Blinker::with_interval(&clock, 10);

        clock.advance(10);
        blinker.update();
        let a: &dyn BlinkTrigger = &blinker;
        let b: &dyn BlinkTrigger = &blinker;
        assert!(a.triggered());
        assert!(b.triggered());

        clock.advance(1);
        blinker.update();
        assert!(!blinker.triggered());
    }

    #[test]
    fn test_default_interval() {
        let clock = ManualClock::new();
        let blinker = Blinker::new(&clock);
        assert_eq!(blinker.interval_ms(), BLINK_INTERVAL_MS);

        clock.advance(blinker.interval_ms() - 1);
        blinker.update();
        assert!(!blinker.triggered());
        clock.advance(1);
        blinker.update();
        assert!(blinker.triggered());
    }

    #[test]
    fn test_not_triggered_before_first_update() {
        let clock = ManualClock::new();
        let blinker = Blinker::new(&clock);
        clock.advance(BLINK_INTERVAL_MS * 3);
        assert!(!blinker.triggered());
    }
}
