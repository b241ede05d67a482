//! Generation constraints and the weekday model.
//!
//! A single active [`ConstraintSet`] governs one generation pass: how many
//! weekdays are taught, how many numbered slots each day has, and how long a
//! lab block is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConstraintError;

/// A teaching day. Active days are always a prefix starting Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All schedulable days, Monday first.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The first `count` weekdays starting Monday (capped at six).
    pub fn first(count: u32) -> &'static [Weekday] {
        let n = (count as usize).min(Self::ALL.len());
        &Self::ALL[..n]
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weekly grid shape and lab block length.
///
/// Defaults to 5 weekdays, 6 daily slots, and 2-slot labs, which is what a
/// pass uses when no constraint set is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    /// Teaching days per week (5 or 6).
    pub weekday_count: u32,
    /// Numbered slots per day, `[1, 10]`.
    pub daily_slot_count: u32,
    /// Consecutive slots per lab block, `[1, 4]`.
    pub lab_slot_length: u32,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            weekday_count: 5,
            daily_slot_count: 6,
            lab_slot_length: 2,
        }
    }
}

impl ConstraintSet {
    /// Creates a constraint set without range checks.
    pub fn new(weekday_count: u32, daily_slot_count: u32, lab_slot_length: u32) -> Self {
        Self {
            weekday_count,
            daily_slot_count,
            lab_slot_length,
        }
    }

    /// Sets the weekday count.
    pub fn with_weekdays(mut self, weekday_count: u32) -> Self {
        self.weekday_count = weekday_count;
        self
    }

    /// Sets the daily slot count.
    pub fn with_daily_slots(mut self, daily_slot_count: u32) -> Self {
        self.daily_slot_count = daily_slot_count;
        self
    }

    /// Sets the lab block length.
    pub fn with_lab_slot_length(mut self, lab_slot_length: u32) -> Self {
        self.lab_slot_length = lab_slot_length;
        self
    }

    /// Checks every field against its administrative range.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if !(5..=6).contains(&self.weekday_count) {
            return Err(ConstraintError::WeekdayCount(self.weekday_count));
        }
        if !(1..=10).contains(&self.daily_slot_count) {
            return Err(ConstraintError::DailySlotCount(self.daily_slot_count));
        }
        if !(1..=4).contains(&self.lab_slot_length) {
            return Err(ConstraintError::LabSlotLength(self.lab_slot_length));
        }
        Ok(())
    }

    /// Active teaching days for this set.
    pub fn days(&self) -> &'static [Weekday] {
        Weekday::first(self.weekday_count)
    }

    /// Total slots in the weekly grid.
    pub fn weekly_slots(&self) -> u32 {
        self.days().len() as u32 * self.daily_slot_count
    }

    /// Whether `slot` lies in `[1, daily_slot_count]`.
    #[inline]
    pub fn contains_slot(&self, slot: u32) -> bool {
        (1..=self.daily_slot_count).contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ConstraintSet::default();
        assert_eq!(c.weekday_count, 5);
        assert_eq!(c.daily_slot_count, 6);
        assert_eq!(c.lab_slot_length, 2);
        assert!(c.validate().is_ok());
        assert_eq!(c.weekly_slots(), 30);
    }

    #[test]
    fn test_days_prefix() {
        let c = ConstraintSet::default().with_weekdays(6);
        assert_eq!(c.days().len(), 6);
        assert_eq!(c.days()[0], Weekday::Monday);
        assert_eq!(c.days()[5], Weekday::Saturday);
        assert_eq!(Weekday::first(9).len(), 6);
        assert!(Weekday::first(0).is_empty());
    }

    #[test]
    fn test_validate_ranges() {
        assert_eq!(
            ConstraintSet::new(4, 6, 2).validate(),
            Err(ConstraintError::WeekdayCount(4))
        );
        assert_eq!(
            ConstraintSet::new(5, 11, 2).validate(),
            Err(ConstraintError::DailySlotCount(11))
        );
        assert_eq!(
            ConstraintSet::new(5, 6, 0).validate(),
            Err(ConstraintError::LabSlotLength(0))
        );
        assert!(ConstraintSet::new(6, 10, 4).validate().is_ok());
    }

    #[test]
    fn test_contains_slot() {
        let c = ConstraintSet::default();
        assert!(!c.contains_slot(0));
        assert!(c.contains_slot(1));
        assert!(c.contains_slot(6));
        assert!(!c.contains_slot(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: ConstraintSet = serde_json::from_str(r#"{"daily_slot_count": 8}"#).unwrap();
        assert_eq!(c, ConstraintSet::default().with_daily_slots(8));
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
