//! Academic structure: departments, semesters, divisions.
//!
//! A division is the unit being scheduled. It belongs to a semester, which
//! in turn belongs to a department; the department scopes which classrooms
//! a division may use.

use serde::{Deserialize, Serialize};

/// Department identifier.
pub type DepartmentId = u32;
/// Semester identifier.
pub type SemesterId = u32;
/// Division identifier.
pub type DivisionId = u32;

/// An academic department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier.
    pub id: DepartmentId,
    /// Display name (also the primary generation-order key).
    pub name: String,
}

/// Odd/even classification of a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of a semester ordinal (1 → Odd, 2 → Even, ...).
    pub fn from_number(number: u32) -> Self {
        if number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// A semester within a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique semester identifier.
    pub id: SemesterId,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Ordinal within the programme (1-based). Orders divisions during generation.
    pub number: u32,
    /// Display name (e.g., "SEM 3").
    pub name: String,
    /// Odd/even term.
    pub parity: Parity,
}

impl Semester {
    /// Creates a semester; parity is derived from `number`.
    pub fn new(id: SemesterId, department_id: DepartmentId, number: u32) -> Self {
        Self {
            id,
            department_id,
            number,
            name: format!("SEM {number}"),
            parity: Parity::from_number(number),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A division (class section) of a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Unique division identifier.
    pub id: DivisionId,
    /// Owning semester. Determines the subjects this division studies.
    pub semester_id: SemesterId,
    /// Display name (e.g., "A").
    pub name: String,
    /// Headcount. Rooms must seat at least this many students.
    pub student_count: u32,
}

impl Division {
    /// Creates a division.
    pub fn new(
        id: DivisionId,
        semester_id: SemesterId,
        name: impl Into<String>,
        student_count: u32,
    ) -> Self {
        Self {
            id,
            semester_id,
            name: name.into(),
            student_count,
        }
    }
}
