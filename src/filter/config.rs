/*!
 * Filter Configuration
 *
 * Runtime configuration for partition count, thresholds and merge strategy
 */

use super::student::Thresholds;
use std::num::NonZeroUsize;

/// How worker results reach the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Each worker appends its batch to one shared list under a lock.
    /// Batch order follows thread completion.
    #[default]
    SharedLock,
    /// Workers return their batch through the join handle and the caller
    /// concatenates in partition order. Deterministic, no shared lock.
    PartitionOrder,
}

/// Parallel filter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Number of contiguous ranges, one worker thread each
    pub partitions: usize,
    pub thresholds: Thresholds,
    pub merge: MergeStrategy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            partitions: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            thresholds: Thresholds::default(),
            merge: MergeStrategy::default(),
        }
    }
}

impl FilterConfig {
    pub const fn new(partitions: usize, thresholds: Thresholds) -> Self {
        Self {
            partitions,
            thresholds,
            merge: MergeStrategy::SharedLock,
        }
    }

    /// One worker over the whole roster
    pub const fn sequential(thresholds: Thresholds) -> Self {
        Self::new(1, thresholds)
    }

    pub const fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub const fn with_merge(mut self, merge: MergeStrategy) -> Self {
        self.merge = merge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_at_least_one_partition() {
        let config = FilterConfig::default();
        assert!(config.partitions >= 1);
        assert_eq!(config.merge, MergeStrategy::SharedLock);
    }

    #[test]
    fn test_builder() {
        let config = FilterConfig::sequential(Thresholds::new(2, 3))
            .with_partitions(4)
            .with_merge(MergeStrategy::PartitionOrder);

        assert_eq!(config.partitions, 4);
        assert_eq!(config.thresholds, Thresholds::new(2, 3));
        assert_eq!(config.merge, MergeStrategy::PartitionOrder);
    }
}
