type Callback<T> = Box<dyn FnOnce(&T)>;

/// State whose setter takes a callback that runs once the new value has been
/// committed.
///
/// Changes are staged by [`CallbackState::set`] / [`CallbackState::update`]
/// and become visible at [`CallbackState::commit`], which the owner calls at
/// the end of its update step. Staging twice before a commit keeps only the
/// last callback.
pub struct CallbackState<T> {
    value: T,
    staged: Option<T>,
    callback: Option<Callback<T>>,
}

impl<T> CallbackState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            staged: None,
            callback: None,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T, callback: impl FnOnce(&T) + 'static) {
        self.staged = Some(value);
        self.callback = Some(Box::new(callback));
    }

    /// Stage a value derived from the latest staged (or committed) one
    pub fn update(&mut self, f: impl FnOnce(&T) -> T, callback: impl FnOnce(&T) + 'static) {
        let next = f(self.staged.as_ref().unwrap_or(&self.value));
        self.set(next, callback);
    }

    pub fn is_dirty(&self) -> bool {
        self.staged.is_some()
    }

    /// Apply the staged value and run its callback. Returns false when
    /// nothing was staged.
    pub fn commit(&mut self) -> bool {
        let Some(next) = self.staged.take() else {
            return false;
        };
        self.value = next;
        if let Some(callback) = self.callback.take() {
            callback(&self.value);
        }
        true
    }
}
