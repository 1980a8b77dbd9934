//! Plain on/off output
//!
//! Drives one lamp (or relay) through a GPIO pin.

use levelcross_core::traits::OutputDriver;
use levelcross_hal::OutputPin;

/// On/off output with write-coalescing
pub struct SimpleOnOff<P> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> SimpleOnOff<P> {
    /// Create an output and drive the pin to `initial`
    pub fn new(mut pin: P, initial: bool) -> Self {
        pin.set_state(initial);
        Self {
            pin,
            level: initial,
        }
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> OutputDriver for SimpleOnOff<P> {
    fn write(&mut self, high: bool) {
        if high == self.level {
            return;
        }
        self.level = high;
        self.pin.set_state(high);
    }

    fn level(&self) -> bool {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_initial_level_written() {
        let out = SimpleOnOff::new(MockPin::default(), true);
        assert!(out.level());
        assert!(out.pin().high);
        assert_eq!(out.pin().writes, 1);
    }

    #[test]
    fn test_write_coalescing() {
        let mut out = SimpleOnOff::new(MockPin::default(), false);

        out.write(true);
        out.write(true);
        assert_eq!(out.pin().writes, 2);
        assert!(out.pin().high);

        out.write(false);
        out.write(false);
        out.write(false);
        assert_eq!(out.pin().writes, 3);
        assert!(!out.pin().high);
    }
}
