//! Hardware-facing traits
//!
//! These traits define the interface between the kernel and the driver
//! implementations in `levelcross-drivers`.

pub mod controller;
pub mod device;
pub mod input;
pub mod output;

pub use controller::Controller;
pub use device::Device;
pub use input::InputDriver;
pub use output::OutputDriver;
