//! Levelcross Hardware Abstraction Layer
//!
//! This crate defines the hardware boundary of the crossing kernel. Board
//! support code implements these traits for its pins and timers; the kernel
//! and drivers only ever talk to the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Wiring / main loop (board specific)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  levelcross-core / levelcross-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  levelcross-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::ServoPort`] - Pulse-width output for hobby servos
//! - [`clock::Clock`] - Monotonic millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod pwm;

pub use clock::Clock;
pub use gpio::{InputPin, OutputPin};
pub use pwm::ServoPort;
