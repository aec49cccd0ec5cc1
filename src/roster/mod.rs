/*!
 * Roster Generation
 *
 * Synthetic student rosters for the filter demo. Seedable so tests and
 * benchmarks see the same roster on every run.
 */

mod names;

pub use names::{GIVEN_NAMES, SURNAMES};

use crate::core::limits::{COURSE_RANGE, DEBT_RANGE};
use crate::filter::Student;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random student generator
pub struct RosterGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RosterGenerator<StdRng> {
    /// Reproducible generator
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RosterGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `"<surname> <given name>"`
    pub fn name(&mut self) -> String {
        let surname = SURNAMES[self.rng.gen_range(0..SURNAMES.len())];
        let given = GIVEN_NAMES[self.rng.gen_range(0..GIVEN_NAMES.len())];
        format!("{surname} {given}")
    }

    pub fn student(&mut self) -> Student {
        let name = self.name();
        Student {
            name,
            course: self.rng.gen_range(COURSE_RANGE),
            debt: self.rng.gen_range(DEBT_RANGE),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Student> {
        (0..count).map(|_| self.student()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_values_in_range() {
        let roster = RosterGenerator::from_seed(7).generate(500);
        assert_eq!(roster.len(), 500);

        for student in &roster {
            assert!(COURSE_RANGE.contains(&student.course));
            assert!(DEBT_RANGE.contains(&student.debt));

            let (surname, given) = student.name.split_once(' ').unwrap();
            assert!(SURNAMES.contains(&surname));
            assert!(GIVEN_NAMES.contains(&given));
        }
    }

    #[test]
    fn test_same_seed_same_roster() {
        let first = RosterGenerator::from_seed(42).generate(50);
        let second = RosterGenerator::from_seed(42).generate(50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_roster() {
        assert!(RosterGenerator::from_seed(1).generate(0).is_empty());
    }
}
