/*!
 * Range Partitioning
 *
 * Splits `[0, len)` into `parts` contiguous ranges of `len / parts`
 * records each. The last range absorbs the remainder, so it holds
 * `len - (parts - 1) * (len / parts)` records. The split is deliberately
 * unbalanced: with 4 parts over 10 records the ranges are
 * `[0,2) [2,4) [4,6) [6,10)`.
 */

use crate::core::errors::{FilterError, FilterResult};
use std::ops::Range;

/// Check partition preconditions without building the ranges
pub fn validate(len: usize, parts: usize) -> FilterResult<()> {
    if parts == 0 {
        return Err(FilterError::InvalidPartitionCount(0));
    }
    if parts > len {
        return Err(FilterError::PartitionsExceedRecords {
            partitions: parts,
            records: len,
        });
    }
    Ok(())
}

/// Contiguous, non-overlapping ranges covering `[0, len)`
pub fn partition_ranges(len: usize, parts: usize) -> FilterResult<Vec<Range<usize>>> {
    validate(len, parts)?;

    let chunk = len / parts;
    let ranges = (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i == parts - 1 { len } else { start + chunk };
            start..end
        })
        .collect();

    Ok(ranges)
}
