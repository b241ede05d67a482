//! Classroom model.
//!
//! Rooms are scoped to a department and come in two kinds: lecture
//! classrooms and labs. Lab units may only use lab rooms and vice versa.

use serde::{Deserialize, Serialize};

use super::DepartmentId;

/// Classroom identifier.
pub type ClassroomId = u32;

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// Lecture room.
    Classroom,
    /// Laboratory.
    Lab,
}

impl RoomKind {
    /// Room kind required by a lab/non-lab requirement.
    pub fn for_lab(lab: bool) -> Self {
        if lab {
            RoomKind::Lab
        } else {
            RoomKind::Classroom
        }
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique room identifier.
    pub id: ClassroomId,
    /// Department owning the room.
    pub department_id: DepartmentId,
    /// Human-facing room number (e.g., "B-204").
    pub room_number: String,
    /// Lecture room or lab.
    pub kind: RoomKind,
    /// Seats.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a room.
    pub fn new(id: ClassroomId, department_id: DepartmentId, kind: RoomKind, capacity: u32) -> Self {
        Self {
            id,
            department_id,
            room_number: id.to_string(),
            kind,
            capacity,
        }
    }

    /// Creates a lecture classroom.
    pub fn lecture(id: ClassroomId, department_id: DepartmentId, capacity: u32) -> Self {
        Self::new(id, department_id, RoomKind::Classroom, capacity)
    }

    /// Creates a lab room.
    pub fn lab(id: ClassroomId, department_id: DepartmentId, capacity: u32) -> Self {
        Self::new(id, department_id, RoomKind::Lab, capacity)
    }

    /// Sets the room number.
    pub fn with_room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Whether this room can host a requirement for a division.
    pub fn suits(&self, department_id: DepartmentId, lab: bool, student_count: u32) -> bool {
        self.department_id == department_id
            && self.kind == RoomKind::for_lab(lab)
            && self.capacity >= student_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builders() {
        let r = Classroom::lab(7, 2, 30).with_room_number("L-1");
        assert_eq!(r.kind, RoomKind::Lab);
        assert_eq!(r.room_number, "L-1");
        assert_eq!(Classroom::lecture(3, 1, 60).room_number, "3");
    }

    #[test]
    fn test_suits() {
        let r = Classroom::lecture(1, 10, 40);
        assert!(r.suits(10, false, 40));
        assert!(!r.suits(10, false, 41)); // too small
        assert!(!r.suits(10, true, 20)); // wrong kind
        assert!(!r.suits(11, false, 20)); // other department
    }
}
