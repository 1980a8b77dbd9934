//! Rail signal
//!
//! Faces the train driver. The primary lamp shows while the road is
//! blocked; a white lamp flashes while the crossing lets road traffic
//! pass, telling the driver the crossing is not protected.

use levelcross_core::level::DeviceState;
use levelcross_core::timing::BlinkTrigger;
use levelcross_core::traits::{Device, OutputDriver};

/// Rail signal with an optional flashing white lamp
pub struct RailSignal<O, B> {
    driver: Option<O>,
    white: Option<O>,
    blinker: B,
    state: DeviceState,
    white_on: bool,
}

impl<O: OutputDriver, B: BlinkTrigger> RailSignal<O, B> {
    /// Create an unattached signal in the `Blocked` state
    pub fn new(blinker: B) -> Self {
        Self::with_state(blinker, DeviceState::Blocked)
    }

    /// Create an unattached signal in a given state
    pub fn with_state(blinker: B, state: DeviceState) -> Self {
        Self {
            driver: None,
            white: None,
            blinker,
            state,
            white_on: false,
        }
    }

    /// Attach the primary lamp driver and apply the current state
    pub fn attach_driver(&mut self, driver: O) {
        self.driver = Some(driver);
        self.to(self.state);
    }

    /// Attach the white lamp driver and apply the current state
    pub fn attach_white_lamp(&mut self, driver: O) {
        self.white = Some(driver);
        self.to(self.state);
    }

    /// Get the primary lamp driver
    pub fn driver(&self) -> Option<&O> {
        self.driver.as_ref()
    }

    /// Get the white lamp driver
    pub fn white_lamp(&self) -> Option<&O> {
        self.white.as_ref()
    }
}

impl<O: OutputDriver, B: BlinkTrigger> Device for RailSignal<O, B> {
    fn to(&mut self, state: DeviceState) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        self.state = state;
        driver.write(state.primary_level());

        if state == DeviceState::Blocked {
            self.white_on = false;
            if let Some(white) = self.white.as_mut() {
                white.write(false);
            }
        }
    }

    fn state(&self) -> DeviceState {
        self.state
    }

    fn tick(&mut self) {
        if self.driver.is_none() || self.state != DeviceState::Passing {
            return;
        }
        let Some(white) = self.white.as_mut() else {
            return;
        };
        if self.blinker.triggered() {
            self.white_on = !self.white_on;
            white.write(self.white_on);
        }
    }
}
