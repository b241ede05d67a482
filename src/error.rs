//! Error types.
//!
//! The generation pass itself never fails: unplaceable requirements are
//! reported as [`SkipReason`](crate::scheduler::SkipReason)s. The errors
//! here cover configuration, snapshot loading, and occupancy bookkeeping.

use thiserror::Error;

use crate::models::Weekday;
use crate::scheduler::Dimension;

/// An out-of-range [`ConstraintSet`](crate::models::ConstraintSet) field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("weekday count {0} out of range (expected 5 or 6)")]
    WeekdayCount(u32),

    #[error("daily slot count {0} out of range [1, 10]")]
    DailySlotCount(u32),

    #[error("lab slot length {0} out of range [1, 4]")]
    LabSlotLength(u32),
}

/// Failure to load a [`ReferenceSnapshot`](crate::models::ReferenceSnapshot).
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Attempted reservation of an already occupied key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{dimension:?} {id} already occupied on {day} slot {slot}")]
pub struct ClashError {
    pub dimension: Dimension,
    pub id: u32,
    pub day: Weekday,
    pub slot: u32,
}
