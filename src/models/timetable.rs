//! Timetable (solution) model.
//!
//! A timetable is the set of entries committed by one generation pass.
//! Each entry books one slot of one day for a division, a faculty member,
//! and a classroom at once. Lab blocks appear as runs of consecutive entries.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{ClassroomId, DivisionId, FacultyId, SubjectId, Weekday};

/// One booked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub division_id: DivisionId,
    pub day: Weekday,
    /// 1-based slot number.
    pub slot: u32,
    pub subject_id: SubjectId,
    pub faculty_id: FacultyId,
    pub classroom_id: ClassroomId,
}

/// Which shared resource two entries collide on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClashKind {
    Division,
    Faculty,
    Classroom,
}

/// Two or more entries booking the same resource at the same (day, slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clash {
    pub kind: ClashKind,
    /// ID of the double-booked division, faculty member, or classroom.
    pub id: u32,
    pub day: Weekday,
    pub slot: u32,
}

/// All entries of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub entries: Vec<TimetableEntry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of a division, in commit order.
    pub fn entries_for_division(&self, division_id: DivisionId) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.division_id == division_id)
            .collect()
    }

    /// Entries taught by a faculty member.
    pub fn entries_for_faculty(&self, faculty_id: FacultyId) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.faculty_id == faculty_id)
            .collect()
    }

    /// Entries held in a classroom.
    pub fn entries_for_classroom(&self, classroom_id: ClassroomId) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.classroom_id == classroom_id)
            .collect()
    }

    /// The entry of a division at a given (day, slot), if any.
    pub fn entry_at(&self, division_id: DivisionId, day: Weekday, slot: u32) -> Option<&TimetableEntry> {
        self.entries
            .iter()
            .find(|e| e.division_id == division_id && e.day == day && e.slot == slot)
    }

    /// Slots committed per faculty member.
    pub fn faculty_loads(&self) -> HashMap<FacultyId, usize> {
        let mut loads = HashMap::new();
        for e in &self.entries {
            *loads.entry(e.faculty_id).or_insert(0) += 1;
        }
        loads
    }

    /// Slots committed per day for one division.
    pub fn division_day_load(&self, division_id: DivisionId) -> BTreeMap<Weekday, u32> {
        let mut loads = BTreeMap::new();
        for e in self.entries.iter().filter(|e| e.division_id == division_id) {
            *loads.entry(e.day).or_insert(0) += 1;
        }
        loads
    }

    /// Slots committed for one subject in one division.
    pub fn subject_slots(&self, division_id: DivisionId, subject_id: SubjectId) -> usize {
        self.entries
            .iter()
            .filter(|e| e.division_id == division_id && e.subject_id == subject_id)
            .count()
    }

    /// Audits the timetable for double bookings.
    ///
    /// Reports one [`Clash`] per duplicated (resource, day, slot) key.
    /// A timetable built by the scheduler always returns an empty list.
    pub fn clashes(&self) -> Vec<Clash> {
        let mut seen: HashSet<(ClashKind, u32, Weekday, u32)> = HashSet::new();
        let mut reported: HashSet<(ClashKind, u32, Weekday, u32)> = HashSet::new();
        let mut clashes = Vec::new();

        for e in &self.entries {
            let keys = [
                (ClashKind::Division, e.division_id),
                (ClashKind::Faculty, e.faculty_id),
                (ClashKind::Classroom, e.classroom_id),
            ];
            for (kind, id) in keys {
                let key = (kind, id, e.day, e.slot);
                if !seen.insert(key) && reported.insert(key) {
                    clashes.push(Clash {
                        kind,
                        id,
                        day: e.day,
                        slot: e.slot,
                    });
                }
            }
        }

        clashes
    }
}
