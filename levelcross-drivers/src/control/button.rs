//! Push-button controller
//!
//! Turns a debounced input into a controller status for the crossing
//! states. A latching button keeps reporting `On` after it is released,
//! until a state resets it.

use levelcross_core::level::Status;
use levelcross_core::traits::{Controller, InputDriver};

/// Contact type of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contact {
    /// Input reads high while pressed
    #[default]
    NormallyOpen,
    /// Input reads low while pressed (pull-up wiring)
    NormallyClosed,
}

/// Controller backed by one debounced input
pub struct ButtonControl<I> {
    input: I,
    contact: Contact,
    latching: bool,
    latched: bool,
}

impl<I: InputDriver> ButtonControl<I> {
    /// Create a momentary button
    pub fn new(input: I, contact: Contact) -> Self {
        Self {
            input,
            contact,
            latching: false,
            latched: false,
        }
    }

    /// Create a button that holds `On` until reset
    pub fn latching(input: I, contact: Contact) -> Self {
        Self {
            latching: true,
            ..Self::new(input, contact)
        }
    }

    /// Check if the button is pressed right now (debounced)
    pub fn is_pressed(&self) -> bool {
        self.input.read() != (self.contact == Contact::NormallyClosed)
    }

    /// Get access to the underlying input
    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: InputDriver> Controller for ButtonControl<I> {
    fn tick(&mut self) {
        self.input.tick();
        if self.latching && self.is_pressed() {
            self.latched = true;
        }
    }

    fn status(&self) -> Status {
        Status::from(self.latched || self.is_pressed())
    }

    fn reset(&mut self) {
        self.latched = false;
    }
}
