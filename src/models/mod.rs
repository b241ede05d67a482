//! Timetabling domain models.
//!
//! Reference entities (read-only inputs supplied by the administration
//! layer) and the timetable produced by a generation pass.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling role |
//! |-------------|-----------------|
//! | Division | Job: the unit whose weekly load is placed |
//! | Subject | Demand: credits expand into requirement units |
//! | Faculty | Human resource, chosen by eligibility |
//! | Classroom | Primary resource, chosen by kind and capacity |
//! | TimetableEntry | Assignment of one (day, slot) |

mod academic;
mod classroom;
mod constraint;
mod snapshot;
mod subject;
mod timetable;

pub use academic::{Department, DepartmentId, Division, DivisionId, Parity, Semester, SemesterId};
pub use classroom::{Classroom, ClassroomId, RoomKind};
pub use constraint::{ConstraintSet, Weekday};
pub use snapshot::{ReferenceSnapshot, ResolvedDivision};
pub use subject::{is_lab_subject, Faculty, FacultyEligibility, FacultyId, Subject, SubjectId};
pub use timetable::{Clash, ClashKind, Timetable, TimetableEntry};
