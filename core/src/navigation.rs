//! Stack of screens pushed on top of the recipe list.

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack<T> {
    path: Vec<T>,
}

impl<T> NavigationStack<T> {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Navigate forward to `value`.
    pub fn push(&mut self, value: T) {
        self.path.push(value);
    }

    /// Navigate back one screen. `None` when already at the root.
    pub fn pop(&mut self) -> Option<T> {
        self.path.pop()
    }

    /// Pop up to `count` screens and return how many were removed.
    pub fn pop_count(&mut self, count: usize) -> usize {
        let removed = count.min(self.path.len());
        self.path.truncate(self.path.len() - removed);
        removed
    }

    pub fn pop_to_root(&mut self) {
        self.path.clear();
    }

    pub fn top(&self) -> Option<&T> {
        self.path.last()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.path.iter()
    }
}

impl<T> Default for NavigationStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
