//! Division grid view.
//!
//! Lays one division's entries out as a slot × weekday table, the shape the
//! timetable is displayed in.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::models::{
    ClassroomId, ConstraintSet, DivisionId, FacultyId, ReferenceSnapshot, SubjectId, Timetable,
    Weekday,
};

/// Placeholder for an empty cell.
pub const EMPTY_CELL: &str = "—";

/// One filled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub subject_id: SubjectId,
    pub faculty_id: FacultyId,
    pub classroom_id: ClassroomId,
}

/// A division's week: `rows[slot - 1][day_index]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableGrid {
    pub division_id: DivisionId,
    /// Column order.
    pub days: Vec<Weekday>,
    pub rows: Vec<Vec<Option<GridCell>>>,
}

impl TimetableGrid {
    /// Builds the grid for a division under the given constraint set.
    ///
    /// Entries outside the active days or slot range are left out.
    pub fn build(timetable: &Timetable, division_id: DivisionId, constraints: &ConstraintSet) -> Self {
        let days = constraints.days().to_vec();
        let mut rows = vec![vec![None; days.len()]; constraints.daily_slot_count as usize];

        for entry in timetable.entries_for_division(division_id) {
            let Some(col) = days.iter().position(|d| *d == entry.day) else {
                continue;
            };
            if !constraints.contains_slot(entry.slot) {
                continue;
            }
            rows[entry.slot as usize - 1][col] = Some(GridCell {
                subject_id: entry.subject_id,
                faculty_id: entry.faculty_id,
                classroom_id: entry.classroom_id,
            });
        }

        Self {
            division_id,
            days,
            rows,
        }
    }

    /// Cell at a 1-based slot and day.
    pub fn cell(&self, slot: u32, day: Weekday) -> Option<&GridCell> {
        let col = self.days.iter().position(|d| *d == day)?;
        self.rows
            .get((slot as usize).checked_sub(1)?)?
            .get(col)?
            .as_ref()
    }

    /// Number of filled cells.
    pub fn filled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Renders the grid as a plain-text table, resolving names from the
    /// snapshot.
    pub fn render(&self, snapshot: &ReferenceSnapshot) -> String {
        let mut out = String::from("Slot");
        for day in &self.days {
            let _ = write!(out, " | {day}");
        }
        out.push('\n');

        for (i, row) in self.rows.iter().enumerate() {
            let _ = write!(out, "{}", i + 1);
            for cell in row {
                out.push_str(" | ");
                match cell {
                    Some(cell) => out.push_str(&describe(cell, snapshot)),
                    None => out.push_str(EMPTY_CELL),
                }
            }
            out.push('\n');
        }
        out
    }
}

fn describe(cell: &GridCell, snapshot: &ReferenceSnapshot) -> String {
    let (code, name) = snapshot
        .subject(cell.subject_id)
        .map(|s| (s.code.as_str(), s.name.as_str()))
        .unwrap_or(("?", "?"));
    let faculty = snapshot
        .faculty_member(cell.faculty_id)
        .map(|f| f.name.as_str())
        .unwrap_or("?");
    let room = snapshot
        .classroom(cell.classroom_id)
        .map(|c| c.room_number.as_str())
        .unwrap_or("?");
    format!("{code} {name} / {faculty} / Rm {room}")
}
