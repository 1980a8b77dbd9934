//! Configuration types
//!
//! Kernel timing constants and actuator parameter types. Registry
//! capacities are const generic parameters of [`Crossing`](crate::Crossing).

pub mod servo;

pub use servo::{ServoConfig, ServoLimits, SERVO_LIMITS};

/// Debounce window for push buttons and contact sensors (ms)
pub const DEBOUNCE_MS: u32 = 30;

/// Interval between signal lamp toggles (ms)
pub const BLINK_INTERVAL_MS: u32 = 500;

/// Nominal main-loop cadence (ms)
///
/// The kernel measures all delays against the clock, so a slower loop only
/// coarsens timing; it never stretches it.
pub const TICK_INTERVAL_MS: u32 = 1;
