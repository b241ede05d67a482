//! Weekly class timetable generation for academic departments.
//!
//! Given reference data (departments, semesters, divisions, subjects,
//! faculty eligibility, classrooms) and a constraint set, produces a weekly
//! grid assigning each division's teaching hours to (day, slot) pairs with a
//! faculty member and a room, such that no division, faculty member, or room
//! is double-booked.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Department`, `Semester`, `Division`,
//!   `Subject`, `Faculty`, `Classroom`, `ConstraintSet`, `ReferenceSnapshot`,
//!   `Timetable`
//! - **`scheduler`**: Greedy generation pass, clash index, day-load guard,
//!   load balancing, generation report, KPIs
//! - **`store`**: Lock-guarded current timetable shared with readers
//! - **`grid`**: Slot × weekday view of a division's timetable
//! - **`validation`**: Advisory reference data checks (duplicate IDs,
//!   dangling references, constraint ranges)
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Classroom, Department, Division, Faculty, ReferenceSnapshot, Semester, Subject};
//! use u_timetable::scheduler::TimetableScheduler;
//! use u_timetable::validation::validate_snapshot;
//!
//! let snapshot = ReferenceSnapshot::new()
//!     .with_department(Department { id: 1, name: "Chemistry".into() })
//!     .with_semester(Semester::new(1, 1, 2))
//!     .with_division(Division::new(1, 1, "A", 35))
//!     .with_subject(Subject::new(1, 1, 1, "CH201", "Organic Chemistry", 3))
//!     .with_subject(Subject::new(2, 1, 1, "CH201L", "Organic Chemistry Lab", 2))
//!     .with_faculty(Faculty::new(1, 1, "Das"))
//!     .with_eligibility(1, 1)
//!     .with_eligibility(1, 2)
//!     .with_classroom(Classroom::lecture(1, 1, 40).with_room_number("C-101"))
//!     .with_classroom(Classroom::lab(2, 1, 40).with_room_number("C-Lab"));
//! assert!(validate_snapshot(&snapshot).is_ok());
//!
//! let scheduler = TimetableScheduler::new().with_seed(42);
//! let report = scheduler.generate(&snapshot);
//! assert!(report.is_complete());
//! assert!(scheduler.timetable().clashes().is_empty());
//!
//! let grid = scheduler.grid(1, &snapshot.active_constraints());
//! assert_eq!(grid.filled_cells(), 5);
//! println!("{}", grid.render(&snapshot));
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - de Werra (1985), "An introduction to timetabling"

pub mod error;
pub mod grid;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
