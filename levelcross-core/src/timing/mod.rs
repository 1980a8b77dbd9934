//! Timing primitives
//!
//! The kernel never waits. Every delay is a non-blocking poll of a
//! [`Timer`] that was armed earlier:
//!
//! - [`ClockWork`]: the [`Timer`] implementation over any [`Clock`]
//! - [`ManualClock`]: a settable clock for tests and host simulation
//! - [`Blinker`]: shared flash pacing for signal lamps
//!
//! [`Clock`]: levelcross_hal::Clock

pub mod blinker;
pub mod manual;
pub mod timer;

pub use blinker::{BlinkTrigger, Blinker};
pub use manual::ManualClock;
pub use timer::{ClockWork, Timer};
