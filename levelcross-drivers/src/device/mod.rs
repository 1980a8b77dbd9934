//! Crossing device implementations
//!
//! Every device shares the same contract: it holds a logical
//! [`DeviceState`](levelcross_core::DeviceState), ignores commands until
//! its primary driver is attached, and re-applies its state whenever a
//! driver is attached. `Blocked` asserts the primary output, `Passing`
//! deasserts it.

#[cfg(feature = "barrier")]
pub mod barrier;
pub mod rail_signal;
pub mod road_signal;

#[cfg(feature = "barrier")]
pub use barrier::Barrier;
pub use rail_signal::RailSignal;
pub use road_signal::RoadSignal;
