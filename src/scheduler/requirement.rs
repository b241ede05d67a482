//! Requirement expansion.
//!
//! Turns a division's subjects into atomic requirement units:
//! a lecture subject with `c` credits yields `c` one-slot units, a lab
//! subject yields `ceil(c / lab_slot_length)` blocks of `lab_slot_length`
//! consecutive slots.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::models::{Subject, SubjectId};

/// One atomic teaching obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementUnit {
    pub subject_id: SubjectId,
    /// Consecutive slots needed on one day.
    pub length: u32,
    pub lab: bool,
}

impl RequirementUnit {
    /// A one-slot lecture.
    pub fn lecture(subject_id: SubjectId) -> Self {
        Self {
            subject_id,
            length: 1,
            lab: false,
        }
    }

    /// A lab block of `length` slots.
    pub fn lab(subject_id: SubjectId, length: u32) -> Self {
        Self {
            subject_id,
            length,
            lab: true,
        }
    }
}

/// Expands subjects into requirement units.
#[derive(Debug, Clone, Copy)]
pub struct RequirementExpander {
    lab_slot_length: u32,
}

impl RequirementExpander {
    /// Creates an expander for the given lab block length.
    pub fn new(lab_slot_length: u32) -> Self {
        Self { lab_slot_length }
    }

    /// Units for a single subject.
    pub fn expand_subject(&self, subject: &Subject) -> Vec<RequirementUnit> {
        let credits = subject.effective_credits();
        if subject.is_lab() {
            let length = self.lab_slot_length.max(1);
            let blocks = credits.div_ceil(length);
            (0..blocks)
                .map(|_| RequirementUnit::lab(subject.id, length))
                .collect()
        } else {
            (0..credits)
                .map(|_| RequirementUnit::lecture(subject.id))
                .collect()
        }
    }

    /// Units for all subjects, in subject order.
    pub fn expand<'a, I>(&self, subjects: I) -> Vec<RequirementUnit>
    where
        I: IntoIterator<Item = &'a Subject>,
    {
        subjects
            .into_iter()
            .flat_map(|s| self.expand_subject(s))
            .collect()
    }

    /// Units for all subjects in random order.
    pub fn expand_shuffled<'a, I>(&self, subjects: I, rng: &mut dyn RngCore) -> Vec<RequirementUnit>
    where
        I: IntoIterator<Item = &'a Subject>,
    {
        let mut units = self.expand(subjects);
        units.shuffle(rng);
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn math() -> Subject {
        Subject::new(1, 1, 1, "MA101", "Mathematics", 3)
    }

    fn physics_lab(credits: u32) -> Subject {
        Subject::new(2, 1, 1, "PH101L", "Physics Lab", credits)
    }

    #[test]
    fn test_lecture_expansion() {
        let units = RequirementExpander::new(2).expand_subject(&math());
        assert_eq!(units, vec![RequirementUnit::lecture(1); 3]);
    }

    #[test]
    fn test_lab_expansion_rounds_up() {
        let e = RequirementExpander::new(2);
        assert_eq!(e.expand_subject(&physics_lab(2)), vec![RequirementUnit::lab(2, 2)]);
        assert_eq!(e.expand_subject(&physics_lab(3)).len(), 2);

        let e = RequirementExpander::new(3);
        let units = e.expand_subject(&physics_lab(4));
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| u.length == 3 && u.lab));
    }

    #[test]
    fn test_zero_credits_expand_as_one() {
        let s = Subject::new(9, 1, 1, "X", "Seminar", 0);
        assert_eq!(RequirementExpander::new(2).expand_subject(&s).len(), 1);
        assert_eq!(RequirementExpander::new(2).expand_subject(&physics_lab(0)).len(), 1);
    }

    #[test]
    fn test_expand_many() {
        let subjects = [math(), physics_lab(2)];
        let units = RequirementExpander::new(2).expand(subjects.iter());
        assert_eq!(units.len(), 4);
        assert_eq!(units.iter().filter(|u| u.lab).count(), 1);
    }

    #[test]
    fn test_shuffle_is_a_permutation_and_seeded() {
        let subjects = [math(), physics_lab(4), Subject::new(3, 1, 1, "CH1", "Chemistry", 4)];
        let e = RequirementExpander::new(2);

        let mut a = e.expand_shuffled(subjects.iter(), &mut StdRng::seed_from_u64(7));
        let b = e.expand_shuffled(subjects.iter(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let mut plain = e.expand(subjects.iter());
        let key = |u: &RequirementUnit| (u.subject_id, u.length);
        a.sort_by_key(key);
        plain.sort_by_key(key);
        assert_eq!(a, plain);
    }
}
