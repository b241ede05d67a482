//! Shared timetable storage.
//!
//! The current timetable lives behind a single reader/writer lock. A
//! generation pass holds the writer lock from the initial clear until the
//! new entries are published, so readers see either the previous timetable
//! or the complete new one.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{DivisionId, Timetable, TimetableEntry};

/// Lock-guarded current timetable.
#[derive(Debug, Default)]
pub struct TimetableStore {
    inner: RwLock<Timetable>,
}

impl TimetableStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared read access. Blocks while a pass is running.
    pub fn read(&self) -> RwLockReadGuard<'_, Timetable> {
        self.inner.read()
    }

    /// Exclusive access for a pass or reset.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Timetable> {
        self.inner.write()
    }

    /// Clone of the current timetable.
    pub fn snapshot(&self) -> Timetable {
        self.inner.read().clone()
    }

    /// Current entries of one division.
    pub fn entries_for_division(&self, division_id: DivisionId) -> Vec<TimetableEntry> {
        self.inner
            .read()
            .entries
            .iter()
            .filter(|e| e.division_id == division_id)
            .copied()
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
