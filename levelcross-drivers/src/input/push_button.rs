//! Debounced push button or contact input
//!
//! A change of the raw pin is first only noticed: the driver arms the
//! debounce timer and waits. When the window has elapsed the pin is
//! sampled again and that sample becomes the logical value. Contact bounce
//! inside the window is ignored, and a change that reverted before the
//! window closed leaves the value untouched.

use levelcross_core::config::DEBOUNCE_MS;
use levelcross_core::timing::Timer;
use levelcross_core::traits::InputDriver;
use levelcross_hal::InputPin;

/// Debounce phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Debounce {
    /// Raw input agrees with the logical value
    #[default]
    Stable,
    /// A change was seen; waiting for the window to close
    Bouncing,
}

/// Debounced digital input
pub struct PushButton<P, T> {
    pin: P,
    timer: T,
    window_ms: u32,
    value: bool,
    phase: Debounce,
}

impl<P: InputPin, T: Timer> PushButton<P, T> {
    /// Create a button with the standard debounce window
    pub fn new(pin: P, timer: T) -> Self {
        Self::with_window(pin, timer, DEBOUNCE_MS)
    }

    /// Create a button with a custom debounce window
    ///
    /// The logical value starts as the pin reads now.
    pub fn with_window(mut pin: P, timer: T, window_ms: u32) -> Self {
        let value = pin.is_high();
        Self {
            pin,
            timer,
            window_ms,
            value,
            phase: Debounce::Stable,
        }
    }

    /// Get the debounce phase
    pub fn phase(&self) -> Debounce {
        self.phase
    }
}

impl<P: InputPin, T: Timer> InputDriver for PushButton<P, T> {
    fn read(&self) -> bool {
        self.value
    }

    fn tick(&mut self) {
        match self.phase {
            Debounce::Stable => {
                if self.pin.is_high() != self.value {
                    self.timer.arm(self.window_ms);
                    self.phase = Debounce::Bouncing;
                }
            }
            Debounce::Bouncing => {
                if self.timer.has_triggered() {
                    let raw = self.pin.is_high();
                    #[cfg(feature = "defmt")]
                    if raw != self.value {
                        defmt::trace!("input settled {}", raw);
                    }
                    self.value = raw;
                    self.phase = Debounce::Stable;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use levelcross_core::timing::{ClockWork, ManualClock};
    use proptest::prelude::*;

    /// Input pin following a shared raw level
    struct RawPin<'r>(&'r Cell<bool>);

    impl InputPin for RawPin<'_> {
        fn is_high(&mut self) -> bool {
            self.0.get()
        }
    }

    type Button<'a> = PushButton<RawPin<'a>, ClockWork<&'a ManualClock>>;

    /// Tick once per millisecond from t=0 to `until` inclusive, letting
    /// `raw_at` set the pin before each tick; returns the times at which
    /// the logical value changed
    fn simulate(
        button: &mut Button<'_>,
        clock: &ManualClock,
        raw: &Cell<bool>,
        until: u32,
        raw_at: impl Fn(u32) -> bool,
    ) -> Vec<(u32, bool)> {
        let mut changes = Vec::new();
        for t in 0..=until {
            clock.set(t);
            raw.set(raw_at(t));
            let before = button.read();
            button.tick();
            if button.read() != before {
                changes.push((t, button.read()));
            }
        }
        changes
    }

    #[test]
    fn test_initial_value_from_pin() {
        let clock = ManualClock::new();
        let raw = Cell::new(true);
        let button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));
        assert!(button.read());
        assert_eq!(button.phase(), Debounce::Stable);
    }

    #[test]
    fn test_press_confirmed_after_window() {
        let clock = ManualClock::new();
        let raw = Cell::new(false);
        let mut button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));

        let changes = simulate(&mut button, &clock, &raw, 100, |_| true);
        assert_eq!(changes, vec![(30, true)]);
    }

    #[test]
    fn test_glitch_inside_window_ignored() {
        let clock = ManualClock::new();
        let raw = Cell::new(false);
        let mut button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));

        // Pressed at 0, bounces open at 10, pressed again from 11
        let changes = simulate(&mut button, &clock, &raw, 100, |t| t != 10);
        assert_eq!(changes, vec![(30, true)]);
    }

    #[test]
    fn test_resample_at_confirmation() {
        let clock = ManualClock::new();
        let raw = Cell::new(false);
        let mut button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));

        // Pressed at 0 but released again before the window closes
        let changes = simulate(&mut button, &clock, &raw, 100, |t| t < 20);
        assert!(changes.is_empty());
        assert!(!button.read());
    }

    #[test]
    fn test_release_is_debounced_too() {
        let clock = ManualClock::new();
        let raw = Cell::new(true);
        let mut button = PushButton::with_window(RawPin(&raw), ClockWork::new(&clock), 50);

        let changes = simulate(&mut button, &clock, &raw, 200, |t| t < 10);
        assert_eq!(changes, vec![(60, false)]);
    }

    proptest! {
        #[test]
        fn prop_short_pulses_never_change_value(width in 1u32..30, start in 0u32..100) {
            let clock = ManualClock::new();
            let raw = Cell::new(false);
            let mut button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));

            let changes = simulate(&mut button, &clock, &raw, 400, |t| t >= start && t < start + width);
            prop_assert!(changes.is_empty());
        }

        #[test]
        fn prop_held_change_confirmed_once(start in 0u32..100) {
            let clock = ManualClock::new();
            let raw = Cell::new(false);
            let mut button = PushButton::new(RawPin(&raw), ClockWork::new(&clock));

            let changes = simulate(&mut button, &clock, &raw, 400, |t| t >= start);
            prop_assert_eq!(changes, vec![(start + DEBOUNCE_MS, true)]);
        }
    }
}
