//! Kernel services offered to state implementations

use crate::crossing::registry::{bound, bound_mut};
use crate::level::{DeviceState, SlotName, Status};
use crate::timing::Timer;
use crate::traits::{Controller, Device};

/// Name-based access to the registry and the crossing timer
///
/// Unbound or out-of-range names resolve to a safe default: `Status::Off`
/// for queries, nothing at all for commands.
pub struct Services<'r, 'a> {
    controllers: &'r mut [Option<&'a mut dyn Controller>],
    devices: &'r mut [Option<&'a mut dyn Device>],
    timer: &'r mut dyn Timer,
}

impl<'r, 'a> Services<'r, 'a> {
    pub(crate) fn new(
        controllers: &'r mut [Option<&'a mut dyn Controller>],
        devices: &'r mut [Option<&'a mut dyn Device>],
        timer: &'r mut dyn Timer,
    ) -> Self {
        Self {
            controllers,
            devices,
            timer,
        }
    }

    /// Get the status of a controller
    pub fn status(&self, ctrl: SlotName) -> Status {
        bound(self.controllers, ctrl).map_or(Status::Off, |c| c.status())
    }

    /// Clear a latched controller status
    pub fn reset(&mut self, ctrl: SlotName) {
        if let Some(c) = bound_mut(self.controllers, ctrl) {
            c.reset();
        }
    }

    /// Command a device to a new state
    pub fn command(&mut self, device: SlotName, state: DeviceState) {
        if let Some(d) = bound_mut(self.devices, device) {
            d.to(state);
        }
    }

    /// Get the state of a device, if one is bound
    pub fn device_state(&self, device: SlotName) -> Option<DeviceState> {
        bound(self.devices, device).map(|d| d.state())
    }

    /// Get the crossing timer
    pub fn timer(&self) -> &dyn Timer {
        &*self.timer
    }

    /// Get the crossing timer for arming
    pub fn timer_mut(&mut self) -> &mut dyn Timer {
        &mut *self.timer
    }
}
