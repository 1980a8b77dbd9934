//! Input driver implementations

pub mod push_button;

pub use push_button::{Debounce, PushButton};
