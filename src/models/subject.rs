//! Subjects, faculty, and teaching eligibility.
//!
//! # Lab Detection
//!
//! Whether a subject is a lab is a pure function of its name and code
//! ([`is_lab_subject`]). Placement logic only ever asks [`Subject::is_lab`],
//! so swapping the heuristic for an explicit field touches this file alone.

use serde::{Deserialize, Serialize};

use super::{DepartmentId, SemesterId};

/// Subject identifier.
pub type SubjectId = u32;
/// Faculty member identifier.
pub type FacultyId = u32;

/// A subject taught in a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: SubjectId,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Semester whose divisions study this subject.
    pub semester_id: SemesterId,
    /// Short code (e.g., "CS301").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Weekly credit hours.
    pub credits: u32,
}

impl Subject {
    /// Creates a subject.
    pub fn new(
        id: SubjectId,
        department_id: DepartmentId,
        semester_id: SemesterId,
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
    ) -> Self {
        Self {
            id,
            department_id,
            semester_id,
            code: code.into(),
            name: name.into(),
            credits,
        }
    }

    /// Whether this subject is taught in lab blocks.
    pub fn is_lab(&self) -> bool {
        is_lab_subject(&self.name, &self.code)
    }

    /// Credits used for expansion and day-load targets (never below 1).
    #[inline]
    pub fn effective_credits(&self) -> u32 {
        self.credits.max(1)
    }
}

/// Lab heuristic: the lower-cased `"{name} {code}"` contains `"lab"`.
pub fn is_lab_subject(name: &str, code: &str) -> bool {
    format!("{name} {code}").to_lowercase().contains("lab")
}

/// A faculty member (instructor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: FacultyId,
    /// Home department.
    pub department_id: DepartmentId,
    /// Display name.
    pub name: String,
}

impl Faculty {
    /// Creates a faculty member.
    pub fn new(id: FacultyId, department_id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            department_id,
            name: name.into(),
        }
    }
}

/// A faculty-may-teach-subject pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacultyEligibility {
    pub faculty_id: FacultyId,
    pub subject_id: SubjectId,
}

impl FacultyEligibility {
    /// Creates an eligibility pair.
    pub fn new(faculty_id: FacultyId, subject_id: SubjectId) -> Self {
        Self {
            faculty_id,
            subject_id,
        }
    }
}
