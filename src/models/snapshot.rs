//! Read-only reference data for one generation pass.
//!
//! The administration layer owns departments, semesters, divisions,
//! subjects, faculty, eligibility, rooms, and the active constraint set.
//! A pass reads one consistent [`ReferenceSnapshot`] of them.

use serde::{Deserialize, Serialize};
use std::io::Read;

use super::{
    Classroom, ClassroomId, ConstraintSet, Department, DepartmentId, Division, DivisionId, Faculty,
    FacultyEligibility, FacultyId, Semester, SemesterId, Subject, SubjectId,
};
use crate::error::SnapshotError;

/// A consistent snapshot of all reference data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSnapshot {
    pub departments: Vec<Department>,
    pub semesters: Vec<Semester>,
    pub divisions: Vec<Division>,
    pub subjects: Vec<Subject>,
    pub faculty: Vec<Faculty>,
    /// Row order is the eligibility order used for load-balancing ties.
    pub eligibility: Vec<FacultyEligibility>,
    pub classrooms: Vec<Classroom>,
    /// Active constraint set. `None` means the defaults.
    pub constraints: Option<ConstraintSet>,
}

/// A division joined with its semester and (if known) department.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDivision<'a> {
    pub division: &'a Division,
    pub semester: &'a Semester,
    pub department: Option<&'a Department>,
}

impl ResolvedDivision<'_> {
    /// Department scoping this division's rooms.
    pub fn department_id(&self) -> DepartmentId {
        self.semester.department_id
    }

    /// Department name, empty when the department record is missing.
    pub fn department_name(&self) -> &str {
        self.department.map(|d| d.name.as_str()).unwrap_or("")
    }
}

impl ReferenceSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a snapshot from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Sets the active constraint set.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Adds a department.
    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Adds a semester.
    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semesters.push(semester);
        self
    }

    /// Adds a division.
    pub fn with_division(mut self, division: Division) -> Self {
        self.divisions.push(division);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds an eligibility row.
    pub fn with_eligibility(mut self, faculty_id: FacultyId, subject_id: SubjectId) -> Self {
        self.eligibility
            .push(FacultyEligibility::new(faculty_id, subject_id));
        self
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }

    /// The constraint set a pass runs under.
    pub fn active_constraints(&self) -> ConstraintSet {
        self.constraints.unwrap_or_default()
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn semester(&self, id: SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub fn division(&self, id: DivisionId) -> Option<&Division> {
        self.divisions.iter().find(|d| d.id == id)
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn faculty_member(&self, id: FacultyId) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }

    pub fn classroom(&self, id: ClassroomId) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Subjects studied by a semester's divisions.
    pub fn subjects_for_semester(&self, semester_id: SemesterId) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.semester_id == semester_id)
            .collect()
    }

    /// Sum of effective credits over a semester's subjects.
    pub fn total_credits(&self, semester_id: SemesterId) -> u32 {
        self.subjects
            .iter()
            .filter(|s| s.semester_id == semester_id)
            .map(Subject::effective_credits)
            .sum()
    }

    /// Joins divisions with their semesters and orders them for generation.
    ///
    /// Order: department name, department id, semester number, division
    /// name, division id. Divisions whose semester is missing are returned
    /// separately, in input order.
    pub fn divisions_in_generation_order(&self) -> (Vec<ResolvedDivision<'_>>, Vec<DivisionId>) {
        let mut resolved = Vec::with_capacity(self.divisions.len());
        let mut unresolved = Vec::new();

        for division in &self.divisions {
            match self.semester(division.semester_id) {
                Some(semester) => resolved.push(ResolvedDivision {
                    division,
                    semester,
                    department: self.department(semester.department_id),
                }),
                None => unresolved.push(division.id),
            }
        }

        resolved.sort_by(|a, b| {
            a.department_name()
                .cmp(b.department_name())
                .then(a.department_id().cmp(&b.department_id()))
                .then(a.semester.number.cmp(&b.semester.number))
                .then(a.division.name.cmp(&b.division.name))
                .then(a.division.id.cmp(&b.division.id))
        });

        (resolved, unresolved)
    }
}
