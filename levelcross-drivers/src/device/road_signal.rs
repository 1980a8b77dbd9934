//! Road signal
//!
//! Faces road traffic. Flashes while the road is blocked and stays dark
//! while traffic may pass.

use levelcross_core::level::DeviceState;
use levelcross_core::timing::BlinkTrigger;
use levelcross_core::traits::{Device, OutputDriver};

/// Flashing road signal
pub struct RoadSignal<O, B> {
    driver: Option<O>,
    blinker: B,
    state: DeviceState,
    lamp_on: bool,
}

impl<O: OutputDriver, B: BlinkTrigger> RoadSignal<O, B> {
    /// Create an unattached signal in the `Blocked` state
    pub fn new(blinker: B) -> Self {
        Self::with_state(blinker, DeviceState::Blocked)
    }

    /// Create an unattached signal in a given state
    pub fn with_state(blinker: B, state: DeviceState) -> Self {
        Self {
            driver: None,
            blinker,
            state,
            lamp_on: false,
        }
    }

    /// Attach the lamp driver and apply the current state
    pub fn attach_driver(&mut self, driver: O) {
        self.driver = Some(driver);
        self.apply();
    }

    /// Get the lamp driver
    pub fn driver(&self) -> Option<&O> {
        self.driver.as_ref()
    }

    /// Drive the lamp to the resting level of the current state
    fn apply(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            // Blocking lights the lamp at once; blinking starts from there
            self.lamp_on = self.state.primary_level();
            driver.write(self.lamp_on);
        }
    }
}

impl<O: OutputDriver, B: BlinkTrigger> Device for RoadSignal<O, B> {
    /// A repeated command keeps the running flash phase
    fn to(&mut self, state: DeviceState) {
        if self.driver.is_none() || state == self.state {
            return;
        }
        self.state = state;
        self.apply();
    }

    fn state(&self) -> DeviceState {
        self.state
    }

    fn tick(&mut self) {
        if self.state != DeviceState::Blocked {
            return;
        }
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        if self.blinker.triggered() {
            self.lamp_on = !self.lamp_on;
            driver.write(self.lamp_on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::mock::MockDriver;

    #[test]
    fn test_unattached_is_silent() {
        let blink = Cell::new(true);
        let mut signal: RoadSignal<MockDriver, _> = RoadSignal::new(&blink);
        signal.to(DeviceState::Passing);
        signal.tick();
        assert_eq!(signal.state(), DeviceState::Blocked);
    }

    #[test]
    fn test_blocked_blinks() {
        let blink = Cell::new(false);
        let mut signal = RoadSignal::new(&blink);
        signal.attach_driver(MockDriver::default());
        assert_eq!(signal.driver().map(|d| d.high), Some(true));

        signal.tick();
        assert_eq!(signal.driver().map(|d| d.high), Some(true));

        blink.set(true);
        signal.tick();
        assert_eq!(signal.driver().map(|d| d.high), Some(false));
        signal.tick();
        assert_eq!(signal.driver().map(|d| d.high), Some(true));
        assert_eq!(signal.driver().map(|d| d.writes), Some(3));
    }

    #[test]
    fn test_repeated_block_keeps_flash_phase() {
        let blink = Cell::new(true);
        let mut signal = RoadSignal::new(&blink);
        signal.attach_driver(MockDriver::default());

        signal.tick();
        assert_eq!(signal.driver().map(|d| d.high), Some(false));

        signal.to(DeviceState::Blocked);
        assert_eq!(signal.driver().map(|d| d.high), Some(false));
        assert_eq!(signal.driver().map(|d| d.writes), Some(2));

        signal.tick();
        assert_eq!(signal.driver().map(|d| d.high), Some(true));
    }

    #[test]
    fn test_unblock_and_block_again_lights_lamp() {
        let blink = Cell::new(true);
        let mut signal = RoadSignal::new(&blink);
        signal.attach_driver(MockDriver::default());
        signal.tick();

        signal.to(DeviceState::Passing);
        signal.to(DeviceState::Blocked);
        assert_eq!(signal.driver().map(|d| d.high), Some(true));
    }

    #[test]
    fn test_passing_is_steady_low() {
        let blink = Cell::new(true);
        let mut signal = RoadSignal::new(&blink);
        signal.attach_driver(MockDriver::default());
        signal.to(DeviceState::Passing);

        for _ in 0..10 {
            signal.tick();
        }
        assert_eq!(signal.driver().map(|d| d.high), Some(false));
        assert_eq!(signal.driver().map(|d| d.writes), Some(2));
    }
}
