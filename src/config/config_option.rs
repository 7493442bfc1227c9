/// A configuration option, bounded by a minimum and maximum value.
#[derive(Clone, Copy, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option.
    pub name: &'static str,

    /// The minimum value of the option.
    pub min: T,

    /// The maximum value of the option.
    pub max: T,

    /// The current value of the option.
    pub value: T,
}

impl<T: Copy + PartialOrd> ConfigOption<T> {
    /// The minimum and maximum value of the option, as a pair.
    pub fn min_max(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Sets the value of the option, clamped to the bounds of the option.
    pub fn set(&mut self, value: T) {
        self.value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
