//! Test doubles shared by the driver tests

use levelcross_core::traits::OutputDriver;
use levelcross_hal::OutputPin;

/// Output pin counting every hardware write
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Coalescing output driver counting forwarded writes and ticks
#[derive(Debug, Default)]
pub struct MockDriver {
    pub high: bool,
    pub writes: u32,
    pub ticks: u32,
}

impl OutputDriver for MockDriver {
    fn write(&mut self, high: bool) {
        if high != self.high {
            self.high = high;
            self.writes += 1;
        }
    }

    fn level(&self) -> bool {
        self.high
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }
}

/// Servo port recording emitted pulses
#[cfg(feature = "barrier")]
#[derive(Debug, Default)]
pub struct MockPort {
    pub pulses: u32,
    pub last_us: Option<u16>,
}

#[cfg(feature = "barrier")]
impl levelcross_hal::ServoPort for MockPort {
    fn write_pulse_us(&mut self, width_us: u16) {
        self.pulses += 1;
        self.last_us = Some(width_us);
    }
}
