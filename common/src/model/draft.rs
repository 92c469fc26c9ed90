/// A local edit of a fetched value.
///
/// `original` is the last value the server confirmed, `current` is what
/// the user is typing. The two are only reconciled by [`Draft::commit`]
/// after a successful save, or by [`Draft::rebase`] when a refetch brings
/// a new original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<T> {
    original: T,
    current: T,
}

impl<T: Clone + PartialEq> Draft<T> {
    pub fn new(original: T) -> Self {
        Self {
            current: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn edit(&mut self, value: T) {
        self.current = value;
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Drops the edit.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// Accepts the edit as the new original, once the server confirmed it.
    pub fn commit(&mut self) -> T {
        self.original = self.current.clone();
        self.current.clone()
    }

    /// Takes a freshly fetched original. A clean draft follows it; a dirty
    /// draft keeps the user's edit.
    pub fn rebase(&mut self, original: T) {
        if !self.is_dirty() {
            self.current = original.clone();
        }
        self.original = original;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_marks_dirty_until_commit() {
        let mut draft = Draft::new("Acme".to_string());
        assert!(!draft.is_dirty());

        draft.edit("Acme Inc".to_string());
        assert!(draft.is_dirty());
        assert_eq!(draft.original(), "Acme");

        assert_eq!(draft.commit(), "Acme Inc");
        assert!(!draft.is_dirty());
        assert_eq!(draft.original(), "Acme Inc");
    }

    #[test]
    fn reset_restores_original() {
        let mut draft = Draft::new(1);
        draft.edit(2);
        draft.reset();
        assert_eq!(*draft.current(), 1);
    }

    #[test]
    fn rebase_keeps_dirty_edits() {
        let mut draft = Draft::new("old".to_string());
        draft.edit("mine".to_string());
        draft.rebase("theirs".to_string());
        assert_eq!(draft.current(), "mine");
        assert_eq!(draft.original(), "theirs");
        assert!(draft.is_dirty());
    }

    #[test]
    fn rebase_moves_clean_drafts() {
        let mut draft = Draft::new("old".to_string());
        draft.rebase("new".to_string());
        assert_eq!(draft.current(), "new");
        assert!(!draft.is_dirty());
    }
}
