/*!
 * Sync Lab
 * Binary monitor and parallel partition filter exposed as a library
 */

pub mod core;
pub mod demo;
pub mod filter;
pub mod monitoring;
pub mod roster;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::sync::{Monitor, MonitorGuard, MonitorState, MonitorStats, WakeResult};
pub use demo::{run_monitor_demo, run_students_demo};
pub use filter::{ExpulsionList, FilterConfig, MergeStrategy, ParallelFilter, Student, Thresholds};
pub use monitoring::init_tracing;
pub use roster::RosterGenerator;
