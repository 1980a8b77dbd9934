//! Input driver trait

/// Filtered digital input
pub trait InputDriver {
    /// Get the filtered logical value
    fn read(&self) -> bool;

    /// Sample the hardware and advance the filter by one tick
    fn tick(&mut self);
}

impl<I: InputDriver + ?Sized> InputDriver for &mut I {
    fn read(&self) -> bool {
        (**self).read()
    }

    fn tick(&mut self) {
        (**self).tick();
    }
}
