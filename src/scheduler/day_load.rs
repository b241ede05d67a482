//! Per-division daily load cap.
//!
//! A division's daily target is `ceil(total_credits / weekday_count)`.
//! A day accepts a new block only while its load stays within
//! `target + 1`. The denominator is semester credits, not expanded slots,
//! so divisions with multi-block labs can see a slightly loose cap.

use std::collections::BTreeMap;

use crate::models::Weekday;

/// Daily target for a division.
pub fn daily_target(total_credits: u32, weekday_count: u32) -> u32 {
    total_credits.div_ceil(weekday_count.max(1))
}

/// Running per-day slot counts for one division.
#[derive(Debug, Clone)]
pub struct DayLoadGuard {
    target: u32,
    loads: BTreeMap<Weekday, u32>,
}

impl DayLoadGuard {
    /// Creates a guard for a division with the given semester credits.
    pub fn new(total_credits: u32, weekday_count: u32) -> Self {
        Self {
            target: daily_target(total_credits, weekday_count),
            loads: BTreeMap::new(),
        }
    }

    /// Daily target.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Hard ceiling a day may reach (`target + 1`).
    pub fn ceiling(&self) -> u32 {
        self.target + 1
    }

    /// Slots committed on a day so far.
    pub fn load(&self, day: Weekday) -> u32 {
        self.loads.get(&day).copied().unwrap_or(0)
    }

    /// Whether adding `length` slots keeps the day within the ceiling.
    pub fn allows(&self, day: Weekday, length: u32) -> bool {
        self.load(day) + length <= self.ceiling()
    }

    /// Records a committed block.
    pub fn record(&mut self, day: Weekday, length: u32) {
        *self.loads.entry(day).or_insert(0) += length;
    }
}
