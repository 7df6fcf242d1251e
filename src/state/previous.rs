/// Remembers the value seen on the previous render.
///
/// Call [`Previous::track`] once per render with the current value; it hands
/// back what was tracked last time.
#[derive(Debug, Clone)]
pub struct Previous<T> {
    last: Option<T>,
}

impl<T: Clone> Previous<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `value` and return the value recorded before it
    pub fn track(&mut self, value: &T) -> Option<T> {
        self.last.replace(value.clone())
    }

    pub fn get(&self) -> Option<&T> {
        self.last.as_ref()
    }
}

impl<T: Clone> Default for Previous<T> {
    fn default() -> Self {
        Self::new()
    }
}
