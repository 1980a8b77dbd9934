//! Controller implementations

pub mod button;

pub use button::{ButtonControl, Contact};
