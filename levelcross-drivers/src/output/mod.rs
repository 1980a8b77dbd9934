//! Output driver implementations

pub mod on_off;
#[cfg(feature = "barrier")]
pub mod servo;

pub use on_off::SimpleOnOff;
#[cfg(feature = "barrier")]
pub use servo::{Motion, Servo, ServoError};
