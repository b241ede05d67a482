//! Timetable quality metrics (KPIs).
//!
//! Computes indicators from a generated timetable and its pass report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | Placed units / requested units |
//! | Faculty Load Spread | Max - min slots taught among assigned faculty |
//! | Room Utilization | Booked slots / weekly slots, per room |
//! | Max Division Day Load | Most slots any division has on one day |
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", Sec. 2

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::report::GenerationReport;
use crate::models::{ClassroomId, ConstraintSet, DivisionId, FacultyId, Timetable, Weekday};

/// Timetable performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableKpi {
    /// Requirement units attempted.
    pub requested_units: usize,
    /// Requirement units placed.
    pub placed_units: usize,
    /// Fraction of units placed (0.0..1.0).
    pub placement_rate: f64,
    /// Booked slots.
    pub total_slots: usize,
    /// Slots taught, per faculty member.
    pub faculty_load: HashMap<FacultyId, usize>,
    /// Fewest slots among assigned faculty.
    pub min_faculty_load: usize,
    /// Most slots among assigned faculty.
    pub max_faculty_load: usize,
    /// Fraction of weekly slots booked, per used room (0.0..1.0).
    pub room_utilization: HashMap<ClassroomId, f64>,
    /// Mean of `room_utilization`.
    pub avg_room_utilization: f64,
    /// Largest per-day slot count of any division.
    pub max_division_day_load: u32,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the report of the pass that built it.
    pub fn calculate(timetable: &Timetable, report: &GenerationReport, constraints: &ConstraintSet) -> Self {
        let faculty_load = timetable.faculty_loads();
        let min_faculty_load = faculty_load.values().copied().min().unwrap_or(0);
        let max_faculty_load = faculty_load.values().copied().max().unwrap_or(0);

        let weekly_slots = constraints.weekly_slots();
        let mut room_slots: HashMap<ClassroomId, usize> = HashMap::new();
        for entry in &timetable.entries {
            *room_slots.entry(entry.classroom_id).or_insert(0) += 1;
        }
        let room_utilization: HashMap<ClassroomId, f64> = room_slots
            .into_iter()
            .map(|(room, slots)| {
                let util = if weekly_slots == 0 {
                    0.0
                } else {
                    slots as f64 / weekly_slots as f64
                };
                (room, util)
            })
            .collect();
        let avg_room_utilization = if room_utilization.is_empty() {
            0.0
        } else {
            room_utilization.values().sum::<f64>() / room_utilization.len() as f64
        };

        let mut day_loads: HashMap<(DivisionId, Weekday), u32> = HashMap::new();
        for entry in &timetable.entries {
            *day_loads.entry((entry.division_id, entry.day)).or_insert(0) += 1;
        }
        let max_division_day_load = day_loads.values().copied().max().unwrap_or(0);

        Self {
            requested_units: report.requested_units(),
            placed_units: report.placed_units,
            placement_rate: report.placement_rate(),
            total_slots: timetable.len(),
            faculty_load,
            min_faculty_load,
            max_faculty_load,
            room_utilization,
            avg_room_utilization,
            max_division_day_load,
        }
    }

    /// Max - min slots among assigned faculty.
    pub fn faculty_load_spread(&self) -> usize {
        self.max_faculty_load - self.min_faculty_load
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, max_load_spread: usize) -> bool {
        self.placement_rate >= min_placement_rate && self.faculty_load_spread() <= max_load_spread
    }
}
