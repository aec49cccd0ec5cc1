/*!
 * Students Demo
 *
 * Generates a roster, runs the parallel filter, then the single-threaded
 * filter, timing each phase.
 *
 * By default every phase writes into its own fresh expulsion list, so the
 * two phases produce comparable results. `accumulate` reuses the parallel
 * phase's list for the single-threaded phase, which appends every match a
 * second time.
 */

use super::input::FilterInput;
use crate::core::errors::{FilterError, FilterResult};
use crate::filter::{
    expel_sequential, validate_partitions, ExpulsionList, FilterConfig, MergeStrategy,
    ParallelFilter, Student,
};
use crate::roster::RosterGenerator;
use std::time::{Duration, Instant};
use tracing::{debug, info_span};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentsDemoOptions {
    /// Roster seed; fresh entropy when unset
    pub seed: Option<u64>,
    pub merge: MergeStrategy,
    /// Append the single-threaded run to the parallel run's list
    pub accumulate: bool,
}

#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub elapsed: Duration,
    /// List contents after the phase
    pub expelled: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StudentsDemoReport {
    pub roster: Vec<Student>,
    pub parallel: PhaseReport,
    pub sequential: PhaseReport,
}

/// Run both phases
///
/// The thread count is validated against the student count before the
/// roster is generated or any thread is spawned.
pub fn run_students_demo(
    input: &FilterInput,
    options: &StudentsDemoOptions,
) -> FilterResult<StudentsDemoReport> {
    let partitions = usize::try_from(input.threads)
        .map_err(|_| FilterError::InvalidPartitionCount(input.threads))?;
    validate_partitions(input.students, partitions)?;

    let roster = match options.seed {
        Some(seed) => RosterGenerator::from_seed(seed).generate(input.students),
        None => RosterGenerator::from_entropy().generate(input.students),
    };
    let thresholds = input.thresholds();
    let filter =
        ParallelFilter::new(FilterConfig::new(partitions, thresholds).with_merge(options.merge));

    let parallel_list = ExpulsionList::new();
    let parallel = {
        let _span = info_span!("parallel_phase", partitions).entered();
        let start = Instant::now();
        filter.run_into(&roster, &parallel_list)?;
        PhaseReport {
            elapsed: start.elapsed(),
            expelled: parallel_list.snapshot(),
        }
    };
    debug!(
        elapsed = ?parallel.elapsed,
        expelled = parallel.expelled.len(),
        "parallel phase done"
    );

    let fresh_list = ExpulsionList::new();
    let sequential_list = if options.accumulate {
        &parallel_list
    } else {
        &fresh_list
    };
    let sequential = {
        let _span = info_span!("sequential_phase").entered();
        let start = Instant::now();
        expel_sequential(&roster, thresholds, sequential_list)?;
        PhaseReport {
            elapsed: start.elapsed(),
            expelled: sequential_list.snapshot(),
        }
    };
    debug!(
        elapsed = ?sequential.elapsed,
        expelled = sequential.expelled.len(),
        "sequential phase done"
    );

    Ok(StudentsDemoReport {
        roster,
        parallel,
        sequential,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(students: usize, threads: i64) -> FilterInput {
        FilterInput {
            students,
            threads,
            course: 2,
            debt: 4,
        }
    }

    #[test]
    fn test_negative_threads_rejected() {
        let err = run_students_demo(&input(10, -1), &StudentsDemoOptions::default()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidPartitionCount(-1)));
    }

    #[test]
    fn test_threads_exceeding_students_rejected() {
        let err = run_students_demo(&input(2, 3), &StudentsDemoOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            FilterError::PartitionsExceedRecords {
                partitions: 3,
                records: 2
            }
        ));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let options = StudentsDemoOptions {
            seed: Some(11),
            ..Default::default()
        };
        let first = run_students_demo(&input(40, 4), &options).unwrap();
        let second = run_students_demo(&input(40, 4), &options).unwrap();
        assert_eq!(first.roster, second.roster);
    }
}
