//! Servo actuator parameters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute envelope of a hobby servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoLimits {
    /// Shortest pulse the servo accepts (µs)
    pub pulse_min_us: u16,
    /// Longest pulse the servo accepts (µs)
    pub pulse_max_us: u16,
    /// Angle at `pulse_min_us` (degrees)
    pub angle_min: i16,
    /// Angle at `pulse_max_us` (degrees)
    pub angle_max: i16,
    /// Fastest admissible travel (ms per degree)
    pub min_step_ms: u32,
    /// Arm travel between up and down when not configured (degrees)
    pub default_angle_diff: i16,
}

/// Limits for standard 544-2400 µs hobby servos
pub const SERVO_LIMITS: ServoLimits = ServoLimits {
    pulse_min_us: 544,
    pulse_max_us: 2400,
    angle_min: 0,
    angle_max: 180,
    min_step_ms: 20,
    default_angle_diff: 90,
};

/// Barrier arm motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoConfig {
    /// Angle of the raised arm (degrees)
    pub angle_adjust: i16,
    /// Travel from raised to lowered (degrees)
    pub angle_diff: i16,
    /// Time for a full travel between the extremes (ms)
    pub travel_ms: u32,
    /// Pulse width at `angle_min` (µs)
    pub min_pulse_us: u16,
    /// Pulse width at `angle_max` (µs)
    pub max_pulse_us: u16,
}

impl ServoConfig {
    /// Create a config with default travel and pulse limits
    pub const fn new(angle_adjust: i16, travel_ms: u32) -> Self {
        Self {
            angle_adjust,
            angle_diff: SERVO_LIMITS.default_angle_diff,
            travel_ms,
            min_pulse_us: SERVO_LIMITS.pulse_min_us,
            max_pulse_us: SERVO_LIMITS.pulse_max_us,
        }
    }
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self::new(0, 3000)
    }
}
