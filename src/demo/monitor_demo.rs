/*!
 * Monitor Demo
 *
 * A fixed set of threads each build and print a line of random printable
 * characters while holding one shared monitor, so lines never interleave.
 */

use crate::core::errors::{DemoError, DemoResult};
use crate::core::limits::{MONITOR_DEMO_LETTERS, MONITOR_DEMO_THREADS, PRINTABLE_ASCII};
use crate::core::sync::{Monitor, MonitorStats};
use parking_lot::Mutex;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info_span};

/// Destination for demo lines
pub trait LineSink: Sync {
    fn emit(&self, line: &str) -> io::Result<()>;
}

impl LineSink for io::Stdout {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut out = self.lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory sink, keeps lines in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorDemoConfig {
    pub threads: usize,
    /// Characters per line
    pub letters: usize,
}

impl Default for MonitorDemoConfig {
    fn default() -> Self {
        Self {
            threads: MONITOR_DEMO_THREADS,
            letters: MONITOR_DEMO_LETTERS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MonitorDemoReport {
    pub elapsed: Duration,
    pub stats: MonitorStats,
}

/// `count` random characters from printable ASCII
pub fn random_chars<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(rng.gen_range(PRINTABLE_ASCII)))
        .collect()
}

/// Spawn the demo threads and wait for all of them
pub fn run_monitor_demo(
    config: &MonitorDemoConfig,
    sink: &dyn LineSink,
) -> DemoResult<MonitorDemoReport> {
    if config.threads == 0 {
        return Err(DemoError::NoThreads);
    }

    let _span = info_span!("monitor_demo", threads = config.threads).entered();
    let monitor = Monitor::new();
    let letters = config.letters;
    let start = Instant::now();

    thread::scope(|s| {
        let handles = (0..config.threads)
            .map(|id| {
                let monitor = &monitor;
                thread::Builder::new()
                    .name(format!("monitor-{id}"))
                    .spawn_scoped(s, move || print_random_chars(monitor, sink, id, letters))
                    .map_err(|source| DemoError::Spawn { worker: id, source })
            })
            .collect::<DemoResult<Vec<_>>>()?;

        for (worker, handle) in handles.into_iter().enumerate() {
            handle
                .join()
                .map_err(|_| DemoError::WorkerPanicked { worker })??;
        }
        Ok::<_, DemoError>(())
    })?;

    let elapsed = start.elapsed();
    let stats = monitor.stats();
    debug!(?elapsed, ?stats, "monitor demo finished");

    Ok(MonitorDemoReport { elapsed, stats })
}

fn print_random_chars(
    monitor: &Monitor,
    sink: &dyn LineSink,
    id: usize,
    letters: usize,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let _guard = monitor.enter();
    let chars = random_chars(&mut rng, letters);
    sink.emit(&format!("Thread {id}: {chars}"))
}
