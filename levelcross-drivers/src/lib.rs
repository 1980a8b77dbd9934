//! Driver and device implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! levelcross-core:
//!
//! - Output drivers (on/off lamp output, timed servo)
//! - Input drivers (debounced push button / contact)
//! - Crossing devices (rail signal, road signal, barrier)
//! - Controllers (push button)
//! - Adapters from `embedded-hal` pins to the levelcross HAL
//!
//! The servo driver and the barrier device are only compiled with the
//! `barrier` feature.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod control;
pub mod device;
pub mod input;
pub mod output;
pub mod pin;

#[cfg(test)]
pub(crate) mod mock;
