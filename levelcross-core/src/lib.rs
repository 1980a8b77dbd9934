//! Board-agnostic control kernel for a single-track level crossing
//!
//! This crate contains the parts of the crossing controller that do not
//! depend on a specific board:
//!
//! - Signal vocabulary (device states, controller status)
//! - Timing primitives (timer, blinker, manual clock)
//! - Driver, device and controller traits
//! - The state interface and its service context
//! - The bounded registry and the tick orchestrator
//! - Configuration types and limits
//!
//! Everything runs on one thread of control, advanced by an external
//! periodic call to [`Crossing::tick`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod crossing;
pub mod level;
pub mod state;
pub mod timing;
pub mod traits;

pub use crossing::{Crossing, Registry};
pub use level::{DeviceState, SlotName, StateId, Status};
pub use state::{Services, State};
