/*!
 * Monitor Demo - Entry Point
 *
 * Four threads take turns printing random characters through one monitor.
 */

use std::io;

use sync_lab::demo::MonitorDemoConfig;
use sync_lab::{init_tracing, run_monitor_demo};

fn main() -> miette::Result<()> {
    init_tracing();

    let report = run_monitor_demo(&MonitorDemoConfig::default(), &io::stdout())?;

    tracing::info!(
        acquisitions = report.stats.acquisitions,
        contended = report.stats.contended,
        "monitor demo complete"
    );
    println!("Time taken: {} microseconds", report.elapsed.as_micros());
    Ok(())
}
