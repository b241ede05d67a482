//! Occupancy index for clash-free placement.
//!
//! Tracks which (division, day, slot), (faculty, day, slot) and
//! (classroom, day, slot) keys are taken in the current pass. Every
//! reservation is checked against all three dimensions before anything is
//! inserted, so the index itself upholds the no-double-booking invariant.
//!
//! # Complexity
//! `is_free` and `reserve` are O(1) expected; block operations are
//! O(block length).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::ClashError;
use crate::models::{ClassroomId, DivisionId, FacultyId, SubjectId, TimetableEntry, Weekday};

/// A resource dimension of the occupancy index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Division,
    Faculty,
    Classroom,
}

/// Consecutive slots on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotBlock {
    pub day: Weekday,
    /// First slot (1-based).
    pub start: u32,
    pub length: u32,
}

impl SlotBlock {
    /// Creates a block.
    pub fn new(day: Weekday, start: u32, length: u32) -> Self {
        Self { day, start, length }
    }

    /// Slot numbers covered by this block.
    pub fn slots(&self) -> impl Iterator<Item = u32> {
        self.start..self.start + self.length
    }

    /// Last slot covered (inclusive).
    pub fn end(&self) -> u32 {
        self.start + self.length - 1
    }
}

type Key = (u32, Weekday, u32);

/// Occupancy of divisions, faculty, and classrooms for one pass.
#[derive(Debug, Clone, Default)]
pub struct ClashIndex {
    division: HashSet<Key>,
    faculty: HashSet<Key>,
    classroom: HashSet<Key>,
    faculty_load: HashMap<FacultyId, usize>,
}

impl ClashIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, dimension: Dimension) -> &HashSet<Key> {
        match dimension {
            Dimension::Division => &self.division,
            Dimension::Faculty => &self.faculty,
            Dimension::Classroom => &self.classroom,
        }
    }

    /// Whether `id` is unbooked at (day, slot) in the given dimension.
    #[inline]
    pub fn is_free(&self, dimension: Dimension, id: u32, day: Weekday, slot: u32) -> bool {
        !self.set(dimension).contains(&(id, day, slot))
    }

    /// Whether `id` is unbooked for every slot of the block.
    pub fn is_block_free(&self, dimension: Dimension, id: u32, block: &SlotBlock) -> bool {
        block
            .slots()
            .all(|slot| self.is_free(dimension, id, block.day, slot))
    }

    fn first_conflict(&self, entry: &TimetableEntry) -> Option<ClashError> {
        [
            (Dimension::Division, entry.division_id),
            (Dimension::Faculty, entry.faculty_id),
            (Dimension::Classroom, entry.classroom_id),
        ]
        .into_iter()
        .find(|&(dimension, id)| !self.is_free(dimension, id, entry.day, entry.slot))
        .map(|(dimension, id)| ClashError {
            dimension,
            id,
            day: entry.day,
            slot: entry.slot,
        })
    }

    fn insert(&mut self, entry: &TimetableEntry) {
        self.division
            .insert((entry.division_id, entry.day, entry.slot));
        self.faculty
            .insert((entry.faculty_id, entry.day, entry.slot));
        self.classroom
            .insert((entry.classroom_id, entry.day, entry.slot));
        *self.faculty_load.entry(entry.faculty_id).or_insert(0) += 1;
    }

    /// Books an entry's slot in all three dimensions.
    ///
    /// Fails without modifying the index if any of the three keys is taken.
    pub fn reserve(&mut self, entry: &TimetableEntry) -> Result<(), ClashError> {
        if let Some(err) = self.first_conflict(entry) {
            return Err(err);
        }
        self.insert(entry);
        Ok(())
    }

    /// Books every slot of a block, all or nothing.
    ///
    /// Returns the entries that were committed.
    pub fn reserve_block(
        &mut self,
        division_id: DivisionId,
        subject_id: SubjectId,
        faculty_id: FacultyId,
        classroom_id: ClassroomId,
        block: &SlotBlock,
    ) -> Result<Vec<TimetableEntry>, ClashError> {
        let entries: Vec<TimetableEntry> = block
            .slots()
            .map(|slot| TimetableEntry {
                division_id,
                day: block.day,
                slot,
                subject_id,
                faculty_id,
                classroom_id,
            })
            .collect();

        if let Some(err) = entries.iter().find_map(|e| self.first_conflict(e)) {
            return Err(err);
        }
        for e in &entries {
            self.insert(e);
        }
        Ok(entries)
    }

    /// Slots committed for a faculty member in this pass.
    pub fn faculty_load(&self, faculty_id: FacultyId) -> usize {
        self.faculty_load.get(&faculty_id).copied().unwrap_or(0)
    }

    /// Number of booked (division, day, slot) keys.
    pub fn len(&self) -> usize {
        self.division.len()
    }

    /// Whether nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.division.is_empty()
    }

    /// Clears all occupancy.
    pub fn reset(&mut self) {
        self.division.clear();
        self.faculty.clear();
        self.classroom.clear();
        self.faculty_load.clear();
    }
}
