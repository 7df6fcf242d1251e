/// Keeps returning a stored value while a caller-supplied comparison says
/// the incoming one is equivalent.
///
/// Useful for composite values where `PartialEq` is too strict (or too
/// loose) and only some fields matter.
pub struct MemoCompare<T, F>
where
    F: Fn(Option<&T>, &T) -> bool,
{
    stored: Option<T>,
    compare: F,
}

impl<T, F> MemoCompare<T, F>
where
    F: Fn(Option<&T>, &T) -> bool,
{
    pub fn new(compare: F) -> Self {
        Self { stored: None, compare }
    }

    /// Return the stored value if `next` compares equal to it, otherwise
    /// store `next` and return that
    pub fn resolve(&mut self, next: T) -> &T {
        let keep = matches!(&self.stored, Some(prev) if (self.compare)(Some(prev), &next));
        if keep {
            self.stored.get_or_insert(next)
        } else {
            self.stored.insert(next)
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.stored.as_ref()
    }
}
