//! Pulse-width output for hobby servos
//!
//! A servo expects a pulse every 20 ms whose width selects the shaft angle.
//! The port only carries the width; the refresh period is the
//! implementation's concern.

/// Servo signal output
pub trait ServoPort {
    /// Emit pulses of the given width in microseconds
    fn write_pulse_us(&mut self, width_us: u16);
}

impl<P: ServoPort + ?Sized> ServoPort for &mut P {
    fn write_pulse_us(&mut self, width_us: u16) {
        (**self).write_pulse_us(width_us);
    }
}
