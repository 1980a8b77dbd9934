//! Crossing orchestration
//!
//! - [`Registry`]: bounded, bounds-checked slots for controllers, devices
//!   and states
//! - [`Crossing`]: the tick that drives them in a fixed order

pub mod orchestrator;
pub mod registry;

pub use orchestrator::Crossing;
pub use registry::{Registry, SlotKind};
