/*!
 * Student Filter
 *
 * Parallel partition-and-merge over an immutable student roster:
 * - Contiguous ranges, last range absorbs the remainder
 * - Private per-worker buffers, one guarded merge per worker
 * - Optional fan-out/fan-in merge in partition order
 */

mod config;
mod expel;
mod parallel;
mod partition;
mod student;

pub use config::{FilterConfig, MergeStrategy};
pub use expel::ExpulsionList;
pub use parallel::{expel_ordered, expel_parallel, expel_sequential, scan, ParallelFilter};
pub use partition::{partition_ranges, validate as validate_partitions};
pub use student::{Student, Thresholds};
