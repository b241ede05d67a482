//! Reference snapshot validation.
//!
//! Checks structural integrity of the reference data before it is handed
//! to the generator. Detects:
//! - Duplicate IDs per entity
//! - Dangling references between entities
//! - Non-positive credits, capacities, and division sizes
//! - Out-of-range constraint sets
//!
//! Validation is advisory: the generator tolerates everything reported here
//! (unresolvable divisions are skipped, unknown faculty are ignored).

use std::collections::HashSet;
use thiserror::Error;

use crate::models::ReferenceSnapshot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same type share an ID.
    DuplicateId,
    /// A record points at an entity that doesn't exist.
    DanglingReference,
    /// Credits, capacity, or student count is zero.
    NonPositiveValue,
    /// The active constraint set is outside its administrative range.
    ConstraintOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_unique<I>(entity: &str, ids: I, errors: &mut Vec<ValidationError>) -> HashSet<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}

/// Validates a reference snapshot.
///
/// Checks:
/// 1. No duplicate IDs among departments, semesters, divisions, subjects,
///    faculty, or classrooms
/// 2. Every department, semester, faculty, and subject reference resolves
/// 3. Credits, capacities, and student counts are positive
/// 4. The constraint set (if any) is in range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &ReferenceSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let departments = check_unique("department", snapshot.departments.iter().map(|d| d.id), &mut errors);
    let semesters = check_unique("semester", snapshot.semesters.iter().map(|s| s.id), &mut errors);
    check_unique("division", snapshot.divisions.iter().map(|d| d.id), &mut errors);
    let subjects = check_unique("subject", snapshot.subjects.iter().map(|s| s.id), &mut errors);
    let faculty = check_unique("faculty", snapshot.faculty.iter().map(|f| f.id), &mut errors);
    check_unique("classroom", snapshot.classrooms.iter().map(|c| c.id), &mut errors);

    let mut dangling = |message: String| {
        errors.push(ValidationError::new(ValidationErrorKind::DanglingReference, message));
    };

    for s in &snapshot.semesters {
        if !departments.contains(&s.department_id) {
            dangling(format!("Semester {} references unknown department {}", s.id, s.department_id));
        }
    }
    for d in &snapshot.divisions {
        if !semesters.contains(&d.semester_id) {
            dangling(format!("Division {} references unknown semester {}", d.id, d.semester_id));
        }
    }
    for s in &snapshot.subjects {
        if !departments.contains(&s.department_id) {
            dangling(format!("Subject '{}' references unknown department {}", s.code, s.department_id));
        }
        if !semesters.contains(&s.semester_id) {
            dangling(format!("Subject '{}' references unknown semester {}", s.code, s.semester_id));
        }
    }
    for f in &snapshot.faculty {
        if !departments.contains(&f.department_id) {
            dangling(format!("Faculty {} references unknown department {}", f.id, f.department_id));
        }
    }
    for e in &snapshot.eligibility {
        if !faculty.contains(&e.faculty_id) {
            dangling(format!("Eligibility row references unknown faculty {}", e.faculty_id));
        }
        if !subjects.contains(&e.subject_id) {
            dangling(format!("Eligibility row references unknown subject {}", e.subject_id));
        }
    }
    for c in &snapshot.classrooms {
        if !departments.contains(&c.department_id) {
            dangling(format!("Classroom {} references unknown department {}", c.id, c.department_id));
        }
    }

    for s in &snapshot.subjects {
        if s.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Subject '{}' has zero credits (scheduled as 1)", s.code),
            ));
        }
    }
    for c in &snapshot.classrooms {
        if c.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Classroom {} has zero capacity", c.id),
            ));
        }
    }
    for d in &snapshot.divisions {
        if d.student_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Division {} has no students", d.id),
            ));
        }
    }

    if let Some(constraints) = &snapshot.constraints {
        if let Err(err) = constraints.validate() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConstraintOutOfRange,
                err.to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
