//! Candidate selection and block placement.
//!
//! # Algorithm
//!
//! For one requirement unit:
//! 1. Resolve eligible faculty (eligibility rows) and eligible rooms
//!    (department, kind, capacity; ascending capacity). Either empty → skip.
//! 2. Visit days in random order, skipping days at the load ceiling.
//! 3. Visit start slots in random order; the block must be free for the
//!    division.
//! 4. Pick faculty and room for the block; reserve all three dimensions.
//!
//! The first block that passes every check is committed. There is no retry
//! and no backtracking into earlier placements.
//!
//! Steps 2-4 sit behind [`PlacementStrategy`] so an exhaustive or
//! constraint-propagating search can replace the greedy one without touching
//! the generator.

use rand::seq::SliceRandom;
use rand::RngCore;
use std::collections::HashSet;

use super::balancer::{pick_faculty, pick_room};
use super::clash::{ClashIndex, Dimension, SlotBlock};
use super::day_load::DayLoadGuard;
use super::report::{SearchStats, SkipReason};
use super::requirement::RequirementUnit;
use crate::models::{
    Classroom, ClassroomId, ConstraintSet, DepartmentId, DivisionId, FacultyId,
    ReferenceSnapshot, ResolvedDivision, SubjectId, TimetableEntry,
};

/// Faculty and rooms that may serve a unit.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    /// Eligibility order.
    pub faculty: Vec<FacultyId>,
    /// Ascending capacity.
    pub rooms: Vec<&'a Classroom>,
}

/// Resolves eligible faculty and rooms from the reference snapshot.
#[derive(Debug)]
pub struct CandidateSelector<'a> {
    snapshot: &'a ReferenceSnapshot,
    known_faculty: HashSet<FacultyId>,
}

impl<'a> CandidateSelector<'a> {
    /// Creates a selector over a snapshot.
    pub fn new(snapshot: &'a ReferenceSnapshot) -> Self {
        Self {
            snapshot,
            known_faculty: snapshot.faculty.iter().map(|f| f.id).collect(),
        }
    }

    /// Faculty allowed to teach a subject, in eligibility-row order.
    ///
    /// Rows naming unknown faculty are ignored; duplicates keep their first
    /// position.
    pub fn eligible_faculty(&self, subject_id: SubjectId) -> Vec<FacultyId> {
        let mut seen = HashSet::new();
        self.snapshot
            .eligibility
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .map(|e| e.faculty_id)
            .filter(|id| self.known_faculty.contains(id) && seen.insert(*id))
            .collect()
    }

    /// Rooms of the department with the right kind and enough seats,
    /// smallest first.
    pub fn eligible_rooms(&self, department_id: DepartmentId, lab: bool, student_count: u32) -> Vec<&'a Classroom> {
        let mut rooms: Vec<&Classroom> = self
            .snapshot
            .classrooms
            .iter()
            .filter(|c| c.suits(department_id, lab, student_count))
            .collect();
        rooms.sort_by_key(|c| c.capacity);
        rooms
    }

    /// Candidates for a unit of a division.
    pub fn candidates(&self, unit: &RequirementUnit, division: &ResolvedDivision<'_>) -> Result<CandidateSet<'a>, SkipReason> {
        let faculty = self.eligible_faculty(unit.subject_id);
        if faculty.is_empty() {
            return Err(SkipReason::NoEligibleFaculty);
        }
        let rooms = self.eligible_rooms(
            division.department_id(),
            unit.lab,
            division.division.student_count,
        );
        if rooms.is_empty() {
            return Err(SkipReason::NoEligibleRoom);
        }
        Ok(CandidateSet { faculty, rooms })
    }
}

/// Everything a strategy needs to place one unit.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest<'r> {
    pub division_id: DivisionId,
    pub unit: RequirementUnit,
    pub candidates: &'r CandidateSet<'r>,
    pub constraints: &'r ConstraintSet,
}

/// A committed unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub faculty_id: FacultyId,
    pub classroom_id: ClassroomId,
    pub block: SlotBlock,
    /// One entry per slot of the block.
    pub entries: Vec<TimetableEntry>,
}

/// A day/slot search for one requirement unit.
///
/// On success the strategy must already have reserved the block in the
/// clash index and recorded it in the day-load guard.
pub trait PlacementStrategy {
    /// Strategy name, recorded in the generation report.
    fn name(&self) -> &'static str;

    /// Places a unit or explains why it could not be placed.
    fn place(
        &self,
        request: &PlacementRequest<'_>,
        clash: &mut ClashIndex,
        day_load: &mut DayLoadGuard,
        stats: &mut SearchStats,
        rng: &mut dyn RngCore,
    ) -> Result<Placement, SkipReason>;
}

/// Randomized first-fit search with least-load faculty and smallest-room
/// selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacement;

impl PlacementStrategy for GreedyPlacement {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn place(
        &self,
        request: &PlacementRequest<'_>,
        clash: &mut ClashIndex,
        day_load: &mut DayLoadGuard,
        stats: &mut SearchStats,
        rng: &mut dyn RngCore,
    ) -> Result<Placement, SkipReason> {
        let length = request.unit.length;
        let daily_slots = request.constraints.daily_slot_count;

        let mut days = request.constraints.days().to_vec();
        days.shuffle(rng);

        for day in days {
            if !day_load.allows(day, length) {
                stats.day_capped += 1;
                continue;
            }
            if length == 0 || length > daily_slots {
                continue;
            }

            let mut starts: Vec<u32> = (1..=daily_slots - length + 1).collect();
            starts.shuffle(rng);

            for start in starts {
                let block = SlotBlock::new(day, start, length);
                if !clash.is_block_free(Dimension::Division, request.division_id, &block) {
                    stats.division_busy += 1;
                    continue;
                }
                let Some(faculty_id) = pick_faculty(clash, &request.candidates.faculty, &block) else {
                    stats.faculty_busy += 1;
                    continue;
                };
                let Some(classroom_id) = pick_room(clash, &request.candidates.rooms, &block) else {
                    stats.room_busy += 1;
                    continue;
                };

                match clash.reserve_block(
                    request.division_id,
                    request.unit.subject_id,
                    faculty_id,
                    classroom_id,
                    &block,
                ) {
                    Ok(entries) => {
                        day_load.record(day, length);
                        return Ok(Placement {
                            faculty_id,
                            classroom_id,
                            block,
                            entries,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(%err, "block passed free checks but reservation failed");
                    }
                }
            }
        }

        Err(SkipReason::NoFreeSlotFound)
    }
}
