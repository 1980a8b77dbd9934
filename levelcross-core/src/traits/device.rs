//! Crossing device trait

use crate::level::DeviceState;

/// Actuator element of a crossing (signal, barrier)
///
/// A device without attached drivers ignores every command and produces no
/// hardware effect.
pub trait Device {
    /// Command a new logical state
    fn to(&mut self, state: DeviceState);

    /// Get the current logical state
    fn state(&self) -> DeviceState;

    /// Update time-dependent outputs (blinking, motion)
    fn tick(&mut self) {}
}
