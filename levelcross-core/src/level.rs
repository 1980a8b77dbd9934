//! Signal vocabulary shared by states, devices and controllers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of a registry slot (controller, device or state)
pub type SlotName = usize;

/// Identifier of a crossing state, i.e. its state slot
pub type StateId = SlotName;

/// Logical state of a crossing device
///
/// Defaults to `Blocked`: an element that has never been commanded keeps
/// road traffic out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceState {
    /// Road closed; primary output asserted
    #[default]
    Blocked,
    /// Road open; primary output deasserted
    Passing,
}

impl DeviceState {
    /// Hardware level of the primary output in this state
    pub fn primary_level(self) -> bool {
        matches!(self, DeviceState::Blocked)
    }
}

/// Status reported by a controller (operator panel or sensor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Not active, also reported for unbound slots
    #[default]
    Off,
    /// Active
    On,
}

impl Status {
    /// Check if the status is `On`
    pub fn is_on(self) -> bool {
        self == Status::On
    }
}

impl From<bool> for Status {
    fn from(on: bool) -> Self {
        if on {
            Status::On
        } else {
            Status::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_fail_safe() {
        assert_eq!(DeviceState::default(), DeviceState::Blocked);
        assert_eq!(Status::default(), Status::Off);
    }

    #[test]
    fn test_primary_level() {
        assert!(DeviceState::Blocked.primary_level());
        assert!(!DeviceState::Passing.primary_level());
    }

    #[test]
    fn test_status_from_bool() {
        assert_eq!(Status::from(true), Status::On);
        assert!(!Status::from(false).is_on());
    }
}
