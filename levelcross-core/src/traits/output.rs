//! Output driver trait

/// Logical output with write-coalescing
///
/// Implementations forward a write to hardware only when the requested
/// level differs from the stored one. Drivers with internal motion do
/// their work in `tick`.
pub trait OutputDriver {
    /// Request a logical level
    fn write(&mut self, high: bool);

    /// Get the stored logical level
    fn level(&self) -> bool;

    /// Advance internal motion by one tick
    fn tick(&mut self) {}
}

impl<D: OutputDriver + ?Sized> OutputDriver for &mut D {
    fn write(&mut self, high: bool) {
        (**self).write(high);
    }

    fn level(&self) -> bool {
        (**self).level()
    }

    fn tick(&mut self) {
        (**self).tick();
    }
}
