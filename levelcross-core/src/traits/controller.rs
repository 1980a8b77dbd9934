//! Controller trait

use crate::level::Status;

/// Operator panel element or track sensor
pub trait Controller {
    /// Sample inputs; called once per tick before states are evaluated
    fn tick(&mut self);

    /// Get the current status
    fn status(&self) -> Status;

    /// Clear a latched status
    fn reset(&mut self) {}
}
