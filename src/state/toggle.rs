/// A boolean that flips on request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self { on: initial }
    }

    pub fn get(&self) -> bool {
        self.on
    }

    /// Flip and return the new state
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }
}
