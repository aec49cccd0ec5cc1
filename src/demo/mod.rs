/*!
 * Demo Orchestration
 *
 * Thread spawning, timing and I/O around the monitor and the filter.
 */

mod input;
mod monitor_demo;
mod students_demo;

pub use input::{read_filter_input, FilterInput};
pub use monitor_demo::{
    random_chars, run_monitor_demo, LineSink, MemorySink, MonitorDemoConfig, MonitorDemoReport,
};
pub use students_demo::{run_students_demo, PhaseReport, StudentsDemoOptions, StudentsDemoReport};
