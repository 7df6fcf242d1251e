/// Lets any part of a component ask for a redraw without owning the loop
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateTrigger {
    generation: u64,
    pending: bool,
}

impl UpdateTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
    }

    /// Returns true once per batch of requests
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
