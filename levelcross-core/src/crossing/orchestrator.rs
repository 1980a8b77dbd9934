//! The crossing tick
//!
//! One call to [`Crossing::tick`] is one discrete step of the kernel:
//!
//! 1. Every bound controller samples its inputs.
//! 2. The active state runs its entry action (once per activation) and its
//!    transition condition; a changed result runs the exit action and
//!    schedules the entry action of the next state.
//! 3. Every bound device updates its time-dependent outputs.
//!
//! The order guarantees that a state decides on this tick's controller
//! readings and that devices show this tick's state.

use crate::level::{DeviceState, SlotName, StateId, Status};
use crate::state::{Services, State};
use crate::timing::Timer;
use crate::traits::{Controller, Device};

use super::registry::{bound, Registry, SlotKind};

/// Crossing orchestrator
///
/// `T` is the timer shared by all states of this crossing. `C`, `D` and
/// `S` are the registry capacities for controllers, devices and states.
pub struct Crossing<'a, T, const C: usize, const D: usize, const S: usize> {
    registry: Registry<'a, C, D, S>,
    timer: T,
    active: StateId,
    entry_pending: bool,
}

impl<'a, T: Timer, const C: usize, const D: usize, const S: usize> Crossing<'a, T, C, D, S> {
    /// Create a crossing with an empty registry, starting in state 0
    pub fn new(timer: T) -> Self {
        Self {
            registry: Registry::new(),
            timer,
            active: 0,
            entry_pending: true,
        }
    }

    /// Bind a controller to a slot
    pub fn set_controller(&mut self, name: SlotName, ctrl: &'a mut dyn Controller) {
        self.registry.set_controller(name, ctrl);
    }

    /// Bind a device to a slot
    pub fn set_device(&mut self, name: SlotName, device: &'a mut dyn Device) {
        self.registry.set_device(name, device);
    }

    /// Bind a state to a slot
    pub fn set_state(&mut self, name: SlotName, state: &'a mut dyn State) {
        self.registry.set_state(name, state);
    }

    /// Select the starting state; its entry action runs on the next tick
    pub fn init_state(&mut self, id: StateId) {
        self.active = id;
        self.entry_pending = true;
    }

    /// Get the active state
    pub fn active_state(&self) -> StateId {
        self.active
    }

    /// Get the registry
    pub fn registry(&self) -> &Registry<'a, C, D, S> {
        &self.registry
    }

    /// Check if a slot is bound
    pub fn has_config(&self, kind: SlotKind, name: SlotName) -> bool {
        self.registry.has_config(kind, name)
    }

    /// Get the crossing timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Run one kernel step
    pub fn tick(&mut self) {
        let registry = &mut self.registry;

        for ctrl in registry.controllers.iter_mut().flatten() {
            ctrl.tick();
        }

        if let Some(Some(state)) = registry.states.get_mut(self.active) {
            let mut services = Services::new(
                &mut registry.controllers,
                &mut registry.devices,
                &mut self.timer,
            );

            if self.entry_pending {
                state.on_entry(&mut services);
                self.entry_pending = false;
            }

            let next = state.do_condition(self.active, &services);
            if next != self.active {
                state.on_exit(&mut services);
                #[cfg(feature = "defmt")]
                defmt::debug!("crossing state {} -> {}", self.active, next);
                self.active = next;
                self.entry_pending = true;
            }
        }

        for device in registry.devices.iter_mut().flatten() {
            device.tick();
        }
    }

    /// Service view of the registry, as handed to states
    pub fn services(&mut self) -> Services<'_, 'a> {
        Services::new(
            &mut self.registry.controllers,
            &mut self.registry.devices,
            &mut self.timer,
        )
    }

    /// Get the status of a controller, `Off` if unbound
    pub fn status(&self, ctrl: SlotName) -> Status {
        bound(&self.registry.controllers, ctrl).map_or(Status::Off, |c| c.status())
    }

    /// Clear a latched controller status
    pub fn reset(&mut self, ctrl: SlotName) {
        self.services().reset(ctrl);
    }

    /// Command a device, ignored if unbound
    pub fn command_device(&mut self, device: SlotName, state: DeviceState) {
        self.services().command(device, state);
    }
}
