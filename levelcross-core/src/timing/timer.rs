//! Elapsed-time timer

use levelcross_hal::Clock;

/// One-shot elapsed-time predicate
///
/// `has_triggered` is non-blocking and stays true once the duration has
/// elapsed, until the timer is armed again. A timer that was never armed
/// does not trigger.
pub trait Timer {
    /// Start measuring `duration_ms` from now
    fn arm(&mut self, duration_ms: u32);

    /// Check if at least the armed duration has elapsed
    fn has_triggered(&self) -> bool;
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn arm(&mut self, duration_ms: u32) {
        (**self).arm(duration_ms);
    }

    fn has_triggered(&self) -> bool {
        (**self).has_triggered()
    }
}

/// [`Timer`] measuring against a [`Clock`]
#[derive(Debug, Clone)]
pub struct ClockWork<C> {
    clock: C,
    started_ms: u32,
    duration_ms: u32,
    armed: bool,
}

impl<C: Clock> ClockWork<C> {
    /// Create an unarmed timer
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            started_ms: 0,
            duration_ms: 0,
            armed: false,
        }
    }

    /// Milliseconds since the timer was last armed
    pub fn elapsed_ms(&self) -> u32 {
        self.clock.now_ms().wrapping_sub(self.started_ms)
    }

    /// Get the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Timer for ClockWork<C> {
    fn arm(&mut self, duration_ms: u32) {
        self.started_ms = self.clock.now_ms();
        self.duration_ms = duration_ms;
        self.armed = true;
    }

    fn has_triggered(&self) -> bool {
        self.armed && self.elapsed_ms() >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;

    #[test]
    fn test_unarmed_never_triggers() {
        let clock = ManualClock::new();
        let timer = ClockWork::new(&clock);
        clock.advance(10_000);
        assert!(!timer.has_triggered());
    }

    #[test]
    fn test_triggers_after_duration() {
        let clock = ManualClock::new();
        let mut timer = ClockWork::new(&clock);
        timer.arm(30);

        clock.advance(29);
        assert!(!timer.has_triggered());

        clock.advance(1);
        assert!(timer.has_triggered());

        // Stays triggered until re-armed
        clock.advance(100);
        assert!(timer.has_triggered());

        timer.arm(30);
        assert!(!timer.has_triggered());
    }

    #[test]
    fn test_elapsed_reads_shared_clock() {
        let clock = ManualClock::starting_at(1_000);
        let mut timer = ClockWork::new(&clock);
        timer.arm(50);

        clock.advance(20);
        assert_eq!(timer.elapsed_ms(), 20);
        assert_eq!(timer.clock().now_ms(), 1_020);
    }

    #[test]
    fn test_clock_wraparound() {
        let clock = ManualClock::starting_at(u32::MAX - 5);
        let mut timer = ClockWork::new(&clock);
        timer.arm(10);

        clock.advance(9);
        assert!(!timer.has_triggered());
        clock.advance(1);
        assert!(timer.has_triggered());
    }
}
