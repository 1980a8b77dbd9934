//! Bounded registry of crossing elements
//!
//! The registry owns only the slots. Controllers, devices and states are
//! created and kept alive by the wiring code; the registry borrows them for
//! the lifetime `'a`.

use crate::level::SlotName;
use crate::state::State;
use crate::traits::{Controller, Device};

/// Category of registry slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotKind {
    /// Operator panel elements and sensors
    Controller,
    /// Signals and barriers
    Device,
    /// State machine states
    State,
}

/// Fixed-capacity slots, one array per category
///
/// Capacities are `C` controllers, `D` devices and `S` states. Binding an
/// out-of-range name is ignored; looking one up finds nothing.
pub struct Registry<'a, const C: usize, const D: usize, const S: usize> {
    pub(crate) controllers: [Option<&'a mut dyn Controller>; C],
    pub(crate) devices: [Option<&'a mut dyn Device>; D],
    pub(crate) states: [Option<&'a mut dyn State>; S],
}

impl<'a, const C: usize, const D: usize, const S: usize> Default for Registry<'a, C, D, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const C: usize, const D: usize, const S: usize> Registry<'a, C, D, S> {
    /// Create a registry with every slot empty
    pub fn new() -> Self {
        Self {
            controllers: core::array::from_fn(|_| None),
            devices: core::array::from_fn(|_| None),
            states: core::array::from_fn(|_| None),
        }
    }

    /// Get the capacity of a category
    pub const fn capacity(kind: SlotKind) -> usize {
        match kind {
            SlotKind::Controller => C,
            SlotKind::Device => D,
            SlotKind::State => S,
        }
    }

    /// Check if `name` addresses a slot of the category
    pub fn is_valid_index(&self, kind: SlotKind, name: SlotName) -> bool {
        name < Self::capacity(kind)
    }

    /// Check if `name` addresses a bound slot of the category
    pub fn has_config(&self, kind: SlotKind, name: SlotName) -> bool {
        match kind {
            SlotKind::Controller => bound(&self.controllers, name).is_some(),
            SlotKind::Device => bound(&self.devices, name).is_some(),
            SlotKind::State => bound(&self.states, name).is_some(),
        }
    }

    /// Bind a controller
    pub fn set_controller(&mut self, name: SlotName, ctrl: &'a mut dyn Controller) {
        bind(&mut self.controllers, name, ctrl);
    }

    /// Bind a device
    pub fn set_device(&mut self, name: SlotName, device: &'a mut dyn Device) {
        bind(&mut self.devices, name, device);
    }

    /// Bind a state
    pub fn set_state(&mut self, name: SlotName, state: &'a mut dyn State) {
        bind(&mut self.states, name, state);
    }
}

fn bind<'a, T: ?Sized>(slots: &mut [Option<&'a mut T>], name: SlotName, item: &'a mut T) {
    if let Some(slot) = slots.get_mut(name) {
        *slot = Some(item);
    }
}

pub(crate) fn bound<'s, T: ?Sized>(slots: &'s [Option<&mut T>], name: SlotName) -> Option<&'s T> {
    slots.get(name)?.as_deref()
}

pub(crate) fn bound_mut<'s, T: ?Sized>(
    slots: &'s mut [Option<&mut T>],
    name: SlotName,
) -> Option<&'s mut T> {
    slots.get_mut(name)?.as_deref_mut()
}
