//! Adapters from `embedded-hal` 1.0 to the levelcross HAL
//!
//! Board crates usually expose `embedded-hal` pins. These wrappers let the
//! drivers in this crate use them directly. Pin errors are swallowed: a
//! failed write keeps the requested level cached, a failed read counts as
//! low.

use embedded_hal::digital;
use levelcross_hal::{InputPin, OutputPin};

/// `embedded-hal` output pin as a levelcross [`OutputPin`]
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> EhOutput<P> {
    /// Wrap a pin; the cached level starts low
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// `embedded-hal` input pin as a levelcross [`InputPin`]
pub struct EhInput<P> {
    pin: P,
}

impl<P: digital::InputPin> EhInput<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

#[cfg(feature = "barrier")]
pub use servo::{EhServo, SERVO_PERIOD_US};

#[cfg(feature = "barrier")]
mod servo {
    use embedded_hal::pwm::SetDutyCycle;
    use levelcross_hal::ServoPort;

    /// Servo refresh period (µs), 50 Hz
    pub const SERVO_PERIOD_US: u16 = 20_000;

    /// `embedded-hal` PWM channel as a [`ServoPort`]
    ///
    /// The channel must already run at the 50 Hz servo frequency.
    pub struct EhServo<P> {
        pwm: P,
    }

    impl<P: SetDutyCycle> EhServo<P> {
        /// Wrap a PWM channel
        pub fn new(pwm: P) -> Self {
            Self { pwm }
        }

        /// Release the wrapped channel
        pub fn into_inner(self) -> P {
            self.pwm
        }
    }

    impl<P: SetDutyCycle> ServoPort for EhServo<P> {
        fn write_pulse_us(&mut self, width_us: u16) {
            let width = width_us.min(SERVO_PERIOD_US);
            let _ = self.pwm.set_duty_cycle_fraction(width, SERVO_PERIOD_US);
        }
    }
}
