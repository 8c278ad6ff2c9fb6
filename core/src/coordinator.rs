//! Single-open arbitration for one list.
//!
//! The coordinator records which row id, if any, holds the open slot. It
//! holds identities only; closing a row goes through a [`RowCloser`] lent
//! for the duration of the call, so no row handles outlive an unmount.

use tracing::debug;

use linkman_types::RowId;

/// Whatever owns the rows of a list.
pub trait RowCloser {
    /// Force-close the row. Returns `false` when no such row is mounted.
    fn close_row(&mut self, id: &RowId) -> bool;
}

/// Collects close requests to apply later.
impl RowCloser for Vec<RowId> {
    fn close_row(&mut self, id: &RowId) -> bool {
        self.push(id.clone());
        true
    }
}

#[derive(Debug, Default)]
pub struct ListCoordinator {
    open: Option<RowId>,
}

impl ListCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn open_row(&self) -> Option<&RowId> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn is_open(&self, id: &RowId) -> bool {
        self.open.as_ref() == Some(id)
    }

    /// A row began settling open. Any other recorded row is closed first.
    pub fn notify_opening(&mut self, id: &RowId, rows: &mut impl RowCloser) {
        if let Some(previous) = self.open.take()
            && previous != *id
        {
            debug!(row = %previous, next = %id, "closing previous open row");
            rows.close_row(&previous);
        }
        self.open = Some(id.clone());
    }

    /// A row gave up the open slot.
    ///
    /// Only clears the record when it still names `id`: a late close from a
    /// superseded row must not clobber a newer open.
    pub fn notify_closed(&mut self, id: &RowId) -> bool {
        if self.is_open(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Close whatever is open (tap on empty area, list scroll, screen blur).
    ///
    /// A recorded row that is no longer mounted is simply forgotten.
    pub fn close_active(&mut self, rows: &mut impl RowCloser) -> Option<RowId> {
        let id = self.open.take()?;
        if !rows.close_row(&id) {
            debug!(row = %id, "open row already unmounted");
        }
        Some(id)
    }

    /// Row unmounted; drop any reference to it.
    pub fn deregister(&mut self, id: &RowId) -> bool {
        let cleared = self.notify_closed(id);
        if cleared {
            debug!(row = %id, "open row deregistered");
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::{ListCoordinator, RowCloser};
    use linkman_types::RowId;

    #[derive(Default)]
    struct Mounted {
        ids: Vec<RowId>,
        closed: Vec<RowId>,
    }

    impl RowCloser for Mounted {
        fn close_row(&mut self, id: &RowId) -> bool {
            if self.ids.contains(id) {
                self.closed.push(id.clone());
                true
            } else {
                false
            }
        }
    }

    fn mounted(ids: &[&str]) -> Mounted {
        Mounted {
            ids: ids.iter().map(|id| RowId::from(*id)).collect(),
            closed: Vec::new(),
        }
    }

    #[test]
    fn opening_closes_previous_holder() {
        let mut rows = mounted(&["a", "b"]);
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut rows);
        assert!(rows.closed.is_empty());

        c.notify_opening(&RowId::from("b"), &mut rows);
        assert_eq!(rows.closed, vec![RowId::from("a")]);
        assert!(c.is_open(&RowId::from("b")));
    }

    #[test]
    fn reopening_same_row_closes_nothing() {
        let mut rows = mounted(&["a"]);
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut rows);
        c.notify_opening(&RowId::from("a"), &mut rows);
        assert!(rows.closed.is_empty());
    }

    #[test]
    fn stale_close_does_not_clobber_newer_open() {
        let mut rows = mounted(&["a", "b"]);
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut rows);
        c.notify_opening(&RowId::from("b"), &mut rows);
        assert!(!c.notify_closed(&RowId::from("a")));
        assert_eq!(c.open_row(), Some(&RowId::from("b")));
        assert!(c.notify_closed(&RowId::from("b")));
        assert_eq!(c.open_row(), None);
    }

    #[test]
    fn close_active_is_noop_when_nothing_open() {
        let mut rows = mounted(&["a"]);
        let mut c = ListCoordinator::new();
        assert_eq!(c.close_active(&mut rows), None);
        assert!(rows.closed.is_empty());
    }

    #[test]
    fn close_active_closes_and_clears() {
        let mut rows = mounted(&["a"]);
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut rows);
        assert_eq!(c.close_active(&mut rows), Some(RowId::from("a")));
        assert_eq!(rows.closed, vec![RowId::from("a")]);
        assert_eq!(c.open_row(), None);
    }

    #[test]
    fn unmounted_record_is_treated_as_closed() {
        let mut rows = mounted(&[]);
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("gone"), &mut rows);
        assert_eq!(c.close_active(&mut rows), Some(RowId::from("gone")));
        assert_eq!(c.open_row(), None);
    }

    #[test]
    fn deregister_only_clears_matching_row() {
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut Vec::<RowId>::new());
        assert!(!c.deregister(&RowId::from("b")));
        assert!(c.deregister(&RowId::from("a")));
        assert_eq!(c.open_row(), None);
    }

    #[test]
    fn vec_closer_collects_requests() {
        let mut pending = Vec::<RowId>::new();
        let mut c = ListCoordinator::new();
        c.notify_opening(&RowId::from("a"), &mut pending);
        c.notify_opening(&RowId::from("b"), &mut pending);
        assert_eq!(pending, vec![RowId::from("a")]);
    }
}
