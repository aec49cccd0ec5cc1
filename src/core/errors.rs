/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Result type for demo orchestration
pub type DemoResult<T> = Result<T, DemoError>;

/// Parallel filter errors
///
/// Precondition variants are raised before any worker thread is spawned.
#[derive(Error, Debug, Diagnostic)]
pub enum FilterError {
    #[error("Invalid partition count: {0}")]
    #[diagnostic(
        code(filter::invalid_partition_count),
        help("The thread count must be at least 1.")
    )]
    InvalidPartitionCount(i64),

    #[error("{partitions} partitions requested for {records} records")]
    #[diagnostic(
        code(filter::partitions_exceed_records),
        help("Use at most as many threads as there are students.")
    )]
    PartitionsExceedRecords { partitions: usize, records: usize },

    #[error("Failed to spawn filter worker {worker}")]
    #[diagnostic(
        code(filter::spawn_failed),
        help("The system refused to create another thread. Lower the thread count.")
    )]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("Filter worker {worker} panicked")]
    #[diagnostic(code(filter::worker_panicked), help("Check the logs for the panic message."))]
    WorkerPanicked { worker: usize },
}

/// Errors reading the students demo input
#[derive(Error, Debug, Diagnostic)]
pub enum InputError {
    #[error("Failed to read input")]
    #[diagnostic(code(input::io))]
    Io(#[from] io::Error),

    #[error("Missing value for {field}")]
    #[diagnostic(
        code(input::missing_value),
        help("Enter four integers: students, threads, course, debts.")
    )]
    MissingValue { field: &'static str },

    #[error("Invalid number for {field}: {value:?}")]
    #[diagnostic(code(input::invalid_number), help("Values must be whole numbers."))]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} cannot be negative: {value}")]
    #[diagnostic(code(input::negative_count))]
    NegativeCount { field: &'static str, value: i64 },
}

/// Monitor demo errors
#[derive(Error, Debug, Diagnostic)]
pub enum DemoError {
    #[error("Failed to write demo output")]
    #[diagnostic(code(demo::io))]
    Io(#[from] io::Error),

    #[error("Failed to spawn demo worker {worker}")]
    #[diagnostic(code(demo::spawn_failed))]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("Demo worker {worker} panicked")]
    #[diagnostic(code(demo::worker_panicked))]
    WorkerPanicked { worker: usize },

    #[error("Demo requires at least one thread")]
    #[diagnostic(code(demo::no_threads))]
    NoThreads,
}
