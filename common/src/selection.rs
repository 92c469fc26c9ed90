//! Tracks which record a detail panel is waiting for.
//!
//! Detail fetches are never cancelled, so responses can arrive out of
//! order or after the panel was closed. Only the response for the latest
//! request is applied; everything else is stale.

/// The id of the one detail request whose response is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection<K> {
    pending: Option<K>,
}

impl<K> Default for PendingSelection<K> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<K: PartialEq> PendingSelection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a click on `id` while `shown` is displayed. Returns
    /// whether a fetch must be started. Clicking the record already shown
    /// drops any pending request instead.
    pub fn request(&mut self, id: K, shown: Option<&K>) -> bool {
        if shown == Some(&id) {
            self.pending = None;
            return false;
        }
        if self.pending.as_ref() == Some(&id) {
            return false;
        }
        self.pending = Some(id);
        true
    }

    /// Accepts the response for `id`, success or failure. Returns `false`
    /// for a stale response, which must be ignored.
    pub fn resolve(&mut self, id: &K) -> bool {
        if self.pending.as_ref() != Some(id) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Forgets the pending request, e.g. when the panel is closed.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&K> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self, id: &K) -> bool {
        self.pending.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record_id::RecordId;

    fn id(value: &str) -> RecordId {
        RecordId::from(value)
    }

    #[test]
    fn earlier_failure_does_not_drop_later_success() {
        let mut selection = PendingSelection::new();
        assert!(selection.request(id("a"), None));
        assert!(selection.request(id("b"), None));

        // `a` fails after the user moved on to `b`.
        assert!(!selection.resolve(&id("a")));
        assert!(selection.is_pending(&id("b")));

        assert!(selection.resolve(&id("b")));
        assert_eq!(selection.pending(), None);
    }

    #[test]
    fn responses_after_closing_are_stale() {
        let mut selection = PendingSelection::new();
        assert!(selection.request(id("a"), None));
        selection.cancel();
        assert!(!selection.resolve(&id("a")));
    }

    #[test]
    fn repeated_clicks_fetch_once() {
        let mut selection = PendingSelection::new();
        assert!(selection.request(id("a"), None));
        assert!(!selection.request(id("a"), None));
        assert!(selection.resolve(&id("a")));
    }

    #[test]
    fn clicking_the_shown_record_cancels_the_pending_one() {
        let mut selection = PendingSelection::new();
        assert!(selection.request(id("b"), Some(&id("a"))));
        assert!(!selection.request(id("a"), Some(&id("a"))));
        assert!(!selection.resolve(&id("b")));
    }
}
