/*!
 * Parallel Partition Filter
 *
 * Fan-out over contiguous roster ranges, one scoped thread per range.
 * Workers only read their own slice of the roster and only write their
 * private buffer until the final merge.
 */

use super::config::{FilterConfig, MergeStrategy};
use super::expel::ExpulsionList;
use super::partition::partition_ranges;
use super::student::{Student, Thresholds};
use crate::core::errors::{FilterError, FilterResult};
use std::ops::Range;
use std::thread::{self, Scope, ScopedJoinHandle};
use tracing::{debug, instrument};

/// Names in `roster[range]` that pass `thresholds`, in roster order
pub fn scan(roster: &[Student], range: Range<usize>, thresholds: Thresholds) -> Vec<String> {
    roster[range]
        .iter()
        .filter(|student| thresholds.admits(student))
        .map(|student| student.name.clone())
        .collect()
}

/// Filter `roster` on `parts` threads, merging each batch into `sink`
///
/// Fails before spawning anything if `parts` is zero or exceeds the
/// roster length. The order of batches in `sink` is unspecified.
#[instrument(level = "debug", skip_all, fields(records = roster.len(), parts = parts))]
pub fn expel_parallel(
    roster: &[Student],
    thresholds: Thresholds,
    parts: usize,
    sink: &ExpulsionList,
) -> FilterResult<()> {
    let ranges = partition_ranges(roster.len(), parts)?;
    merge_into(roster, thresholds, ranges, sink)
}

/// Single-threaded comparison run: one worker over the whole roster
///
/// An empty roster is allowed and merges an empty batch.
#[instrument(level = "debug", skip_all, fields(records = roster.len()))]
pub fn expel_sequential(
    roster: &[Student],
    thresholds: Thresholds,
    sink: &ExpulsionList,
) -> FilterResult<()> {
    merge_into(roster, thresholds, vec![0..roster.len()], sink)
}

/// Filter `roster` on `parts` threads and concatenate in partition order
///
/// The result equals a sequential scan of the whole roster.
#[instrument(level = "debug", skip_all, fields(records = roster.len(), parts = parts))]
pub fn expel_ordered(
    roster: &[Student],
    thresholds: Thresholds,
    parts: usize,
) -> FilterResult<Vec<String>> {
    let ranges = partition_ranges(roster.len(), parts)?;

    thread::scope(|s| {
        let handles = ranges
            .into_iter()
            .enumerate()
            .map(|(worker, range)| {
                spawn_worker(s, worker, move || scan(roster, range, thresholds))
            })
            .collect::<FilterResult<Vec<_>>>()?;

        let mut names = Vec::new();
        for (worker, handle) in handles.into_iter().enumerate() {
            let batch = handle
                .join()
                .map_err(|_| FilterError::WorkerPanicked { worker })?;
            debug!(worker, matched = batch.len(), "collected worker batch");
            names.extend(batch);
        }
        Ok(names)
    })
}

fn merge_into(
    roster: &[Student],
    thresholds: Thresholds,
    ranges: Vec<Range<usize>>,
    sink: &ExpulsionList,
) -> FilterResult<()> {
    thread::scope(|s| {
        let handles = ranges
            .into_iter()
            .enumerate()
            .map(|(worker, range)| {
                spawn_worker(s, worker, move || {
                    let batch = scan(roster, range, thresholds);
                    debug!(worker, matched = batch.len(), "worker scan complete");
                    sink.merge(batch);
                })
            })
            .collect::<FilterResult<Vec<_>>>()?;

        for (worker, handle) in handles.into_iter().enumerate() {
            handle
                .join()
                .map_err(|_| FilterError::WorkerPanicked { worker })?;
        }
        Ok(())
    })
}

fn spawn_worker<'scope, 'env, T, F>(
    scope: &'scope Scope<'scope, 'env>,
    worker: usize,
    f: F,
) -> FilterResult<ScopedJoinHandle<'scope, T>>
where
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
{
    thread::Builder::new()
        .name(format!("filter-{worker}"))
        .spawn_scoped(scope, f)
        .map_err(|source| FilterError::Spawn { worker, source })
}

/// Configured filter producing one fresh result per run
#[derive(Debug, Clone, Copy)]
pub struct ParallelFilter {
    config: FilterConfig,
}

impl ParallelFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run once into a fresh collection
    pub fn run(&self, roster: &[Student]) -> FilterResult<Vec<String>> {
        match self.config.merge {
            MergeStrategy::SharedLock => {
                let list = ExpulsionList::new();
                self.run_into(roster, &list)?;
                Ok(list.into_names())
            }
            MergeStrategy::PartitionOrder => {
                expel_ordered(roster, self.config.thresholds, self.config.partitions)
            }
        }
    }

    /// Run once, appending to an existing collection
    pub fn run_into(&self, roster: &[Student], sink: &ExpulsionList) -> FilterResult<()> {
        let FilterConfig {
            partitions,
            thresholds,
            merge,
        } = self.config;

        match merge {
            MergeStrategy::SharedLock => expel_parallel(roster, thresholds, partitions, sink),
            MergeStrategy::PartitionOrder => {
                let names = expel_ordered(roster, thresholds, partitions)?;
                sink.merge(names);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Student> {
        vec![
            Student::new("A", 2, 5),
            Student::new("B", 3, 12),
            Student::new("C", 1, 1),
        ]
    }

    #[test]
    fn test_scan_keeps_roster_order() {
        let roster = vec![
            Student::new("x", 5, 9),
            Student::new("y", 1, 9),
            Student::new("z", 4, 7),
        ];
        assert_eq!(scan(&roster, 0..3, Thresholds::new(2, 5)), vec!["x", "z"]);
        assert_eq!(scan(&roster, 1..3, Thresholds::new(2, 5)), vec!["z"]);
    }

    #[test]
    fn test_parallel_sample_scenario() {
        let roster = sample_roster();
        let list = ExpulsionList::new();

        expel_parallel(&roster, Thresholds::new(1, 10), 3, &list).unwrap();

        assert_eq!(list.merge_count(), 3);
        assert_eq!(list.into_names(), vec!["B"]);
    }

    #[test]
    fn test_sequential_allows_empty_roster() {
        let list = ExpulsionList::new();
        expel_sequential(&[], Thresholds::new(0, 0), &list).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.merge_count(), 1);
    }

    #[test]
    fn test_precondition_checked_before_spawn() {
        let roster = sample_roster();
        let list = ExpulsionList::new();

        let err = expel_parallel(&roster, Thresholds::new(0, 0), 0, &list).unwrap_err();
        assert!(matches!(err, FilterError::InvalidPartitionCount(0)));

        let err = expel_parallel(&roster, Thresholds::new(0, 0), 4, &list).unwrap_err();
        assert!(matches!(err, FilterError::PartitionsExceedRecords { .. }));

        assert_eq!(list.merge_count(), 0);
    }

    #[test]
    fn test_ordered_matches_sequential_scan() {
        let roster: Vec<Student> = (0..23)
            .map(|i| Student::new(format!("s{i}"), i % 5 + 1, i % 11))
            .collect();
        let thresholds = Thresholds::new(2, 4);

        let ordered = expel_ordered(&roster, thresholds, 4).unwrap();
        assert_eq!(ordered, scan(&roster, 0..roster.len(), thresholds));
    }

    #[test]
    fn test_run_returns_fresh_results() {
        let roster = sample_roster();
        let filter = ParallelFilter::new(FilterConfig::new(2, Thresholds::new(1, 10)));

        assert_eq!(filter.run(&roster).unwrap(), vec!["B"]);
        assert_eq!(filter.run(&roster).unwrap(), vec!["B"]);
    }
}
