/*!
 * Limits and Constants
 *
 * Centralized location for demo sizes and generated value ranges.
 */

use std::ops::RangeInclusive;

// =============================================================================
// MONITOR DEMO
// =============================================================================

/// Threads racing for the monitor in the demo
pub const MONITOR_DEMO_THREADS: usize = 4;

/// Random characters each demo thread prints
pub const MONITOR_DEMO_LETTERS: usize = 10;

/// Printable ASCII (space through tilde)
pub const PRINTABLE_ASCII: RangeInclusive<u8> = 32..=126;

// =============================================================================
// ROSTER GENERATION
// =============================================================================

/// Course assigned to a generated student
pub const COURSE_RANGE: RangeInclusive<u32> = 1..=5;

/// Debt count assigned to a generated student
pub const DEBT_RANGE: RangeInclusive<u32> = 0..=10;

// =============================================================================
// LOGGING
// =============================================================================

/// Environment variable switching tracing output to JSON
pub const TRACE_JSON_ENV: &str = "SYNC_LAB_TRACE_JSON";

/// Filter directive used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
