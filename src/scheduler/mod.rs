//! Greedy timetable generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableScheduler` runs a single randomized greedy pass: divisions in a
//! fixed order, each division's requirement units shuffled, each unit
//! committed to the first free block found. A clash index keeps division,
//! faculty, and room bookings disjoint; a per-division day-load ceiling
//! spreads teaching across the week. There is no backtracking, so some
//! units may be left unplaced; they are listed in the [`GenerationReport`].
//!
//! # KPI
//!
//! `TimetableKpi` computes placement rate, faculty load spread, room
//! utilization, and peak division day load.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod balancer;
mod clash;
mod day_load;
mod generator;
mod kpi;
mod placement;
mod report;
mod requirement;

pub use balancer::{pick_faculty, pick_room};
pub use clash::{ClashIndex, Dimension, SlotBlock};
pub use day_load::{daily_target, DayLoadGuard};
pub use generator::{GeneratorConfig, TimetableScheduler};
pub use kpi::TimetableKpi;
pub use placement::{
    CandidateSelector, CandidateSet, GreedyPlacement, Placement, PlacementRequest, PlacementStrategy,
};
pub use report::{GenerationReport, SearchStats, SkipReason, SkippedUnit};
pub use requirement::{RequirementExpander, RequirementUnit};
