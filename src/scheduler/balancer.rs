//! Faculty and room selection for a candidate block.
//!
//! Local greedy choice with no look-ahead:
//! - faculty: least slots committed so far in the pass, first in
//!   eligibility order on ties;
//! - room: smallest sufficient capacity (rooms arrive sorted).

use super::clash::{ClashIndex, Dimension, SlotBlock};
use crate::models::{Classroom, ClassroomId, FacultyId};

/// Picks the least-loaded eligible faculty member free for the whole block.
pub fn pick_faculty(clash: &ClashIndex, eligible: &[FacultyId], block: &SlotBlock) -> Option<FacultyId> {
    let mut best: Option<(FacultyId, usize)> = None;
    for &faculty_id in eligible {
        let load = clash.faculty_load(faculty_id);
        if best.is_some_and(|(_, min)| load >= min) {
            continue;
        }
        if clash.is_block_free(Dimension::Faculty, faculty_id, block) {
            best = Some((faculty_id, load));
        }
    }
    best.map(|(id, _)| id)
}

/// Picks the first room (ascending capacity) free for the whole block.
pub fn pick_room(clash: &ClashIndex, rooms: &[&Classroom], block: &SlotBlock) -> Option<ClassroomId> {
    rooms
        .iter()
        .find(|room| clash.is_block_free(Dimension::Classroom, room.id, block))
        .map(|room| room.id)
}
