//! Road barrier
//!
//! The barrier only sets the logical level of its driver; the rate-limited
//! arm motion lives in the driver (normally a
//! [`Servo`](crate::output::Servo)) and runs from this device's `tick`.

use levelcross_core::level::DeviceState;
use levelcross_core::traits::{Device, OutputDriver};

/// Barrier arm, lowered while blocked
pub struct Barrier<O> {
    driver: Option<O>,
    state: DeviceState,
}

impl<O: OutputDriver> Barrier<O> {
    /// Create an unattached barrier in the `Blocked` state
    pub fn new() -> Self {
        Self::with_state(DeviceState::Blocked)
    }

    /// Create an unattached barrier in a given state
    pub fn with_state(state: DeviceState) -> Self {
        Self {
            driver: None,
            state,
        }
    }

    /// Attach the arm driver and apply the current state
    pub fn attach_driver(&mut self, driver: O) {
        self.driver = Some(driver);
        self.to(self.state);
    }

    /// Get the arm driver
    pub fn driver(&self) -> Option<&O> {
        self.driver.as_ref()
    }
}

impl<O: OutputDriver> Default for Barrier<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputDriver> Device for Barrier<O> {
    fn to(&mut self, state: DeviceState) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        self.state = state;
        driver.write(state.primary_level());
    }

    fn state(&self) -> DeviceState {
        self.state
    }

    fn tick(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.tick();
        }
    }
}
