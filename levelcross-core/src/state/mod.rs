//! State interface
//!
//! Concrete crossing states (what to block and when to release) belong to
//! the wiring code of each crossing. The kernel only drives them through
//! the three hooks of [`State`] and hands them a [`Services`] context for
//! reaching controllers, devices and the shared timer.

pub mod services;

pub use services::Services;

use crate::level::StateId;

/// One state of the crossing state machine
///
/// `on_entry` runs once per activation, before the first `do_condition`
/// of that activation. `on_exit` runs once, right before the kernel
/// switches to the state returned by `do_condition`.
pub trait State {
    /// Entry action, e.g. commanding devices
    fn on_entry(&mut self, _services: &mut Services<'_, '_>) {}

    /// Transition condition
    ///
    /// Returns `active` unchanged when no transition is warranted. Only
    /// reads kernel data: controller status, device state and the timer.
    fn do_condition(&mut self, active: StateId, services: &Services<'_, '_>) -> StateId;

    /// Exit action
    fn on_exit(&mut self, _services: &mut Services<'_, '_>) {}
}
