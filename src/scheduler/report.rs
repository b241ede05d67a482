//! Generation pass report.
//!
//! A pass never fails outright; units that cannot be placed are dropped.
//! The report lists every dropped unit with its reason so partial
//! timetables are visible to the operator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DivisionId, SubjectId};

/// Why a requirement unit was not placed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("no faculty is eligible to teach the subject")]
    NoEligibleFaculty,

    #[error("no room matches the department, room kind, and division size")]
    NoEligibleRoom,

    #[error("no free day/slot block found under current occupancy and day-load cap")]
    NoFreeSlotFound,
}

/// A requirement unit dropped from the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedUnit {
    pub division_id: DivisionId,
    pub subject_id: SubjectId,
    pub length: u32,
    pub lab: bool,
    pub reason: SkipReason,
}

/// Candidate blocks rejected during the search, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Days skipped because the division's day-load ceiling was reached.
    pub day_capped: u64,
    /// Blocks overlapping an already booked division slot.
    pub division_busy: u64,
    /// Blocks with no eligible faculty free throughout.
    pub faculty_busy: u64,
    /// Blocks with no eligible room free throughout.
    pub room_busy: u64,
}

impl SearchStats {
    /// Total rejections.
    pub fn total(&self) -> u64 {
        self.day_capped + self.division_busy + self.faculty_busy + self.room_busy
    }
}

/// Outcome of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// RNG seed the pass ran with; replaying it reproduces the timetable.
    pub seed: u64,
    /// Placement strategy name.
    pub strategy: String,
    /// Divisions processed.
    pub divisions_scheduled: usize,
    /// Divisions skipped because their semester is unknown.
    pub unresolved_divisions: Vec<DivisionId>,
    /// Requirement units placed.
    pub placed_units: usize,
    /// Timetable entries committed (lab blocks count each slot).
    pub placed_slots: usize,
    /// Units dropped, in processing order.
    pub skipped: Vec<SkippedUnit>,
    pub stats: SearchStats,
}

impl GenerationReport {
    /// Creates an empty report.
    pub fn new(seed: u64, strategy: impl Into<String>) -> Self {
        Self {
            seed,
            strategy: strategy.into(),
            ..Default::default()
        }
    }

    /// Units attempted (placed + skipped).
    pub fn requested_units(&self) -> usize {
        self.placed_units + self.skipped.len()
    }

    /// Whether every requirement was placed and every division resolved.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.unresolved_divisions.is_empty()
    }

    /// Skipped units of one division.
    pub fn skipped_for_division(&self, division_id: DivisionId) -> Vec<&SkippedUnit> {
        self.skipped
            .iter()
            .filter(|s| s.division_id == division_id)
            .collect()
    }

    /// Number of units skipped for a reason.
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Fraction of units placed (1.0 when nothing was requested).
    pub fn placement_rate(&self) -> f64 {
        let requested = self.requested_units();
        if requested == 0 {
            1.0
        } else {
            self.placed_units as f64 / requested as f64
        }
    }
}
