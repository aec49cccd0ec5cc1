/*!
 * Students Filter Demo - Entry Point
 *
 * Reads student count, thread count, course and debt thresholds from
 * stdin, then times the parallel filter against the single-threaded one.
 */

use clap::Parser;
use std::io;

use sync_lab::demo::{read_filter_input, StudentsDemoOptions};
use sync_lab::{init_tracing, run_students_demo, MergeStrategy};

#[derive(Parser, Debug)]
#[command(name = "students", about = "Parallel student expulsion filter")]
struct Args {
    /// Seed the roster generator for a reproducible roster
    #[arg(long)]
    seed: Option<u64>,

    /// Concatenate worker results in partition order instead of merging
    /// under a shared lock
    #[arg(long)]
    ordered: bool,

    /// Append the single-threaded run to the parallel run's list
    #[arg(long)]
    accumulate: bool,

    /// Print the students selected by the parallel run
    #[arg(long)]
    show: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_tracing();

    let input = read_filter_input(io::stdin().lock(), io::stdout())?;

    let options = StudentsDemoOptions {
        seed: args.seed,
        merge: if args.ordered {
            MergeStrategy::PartitionOrder
        } else {
            MergeStrategy::SharedLock
        },
        accumulate: args.accumulate,
    };
    let report = run_students_demo(&input, &options)?;

    println!(
        "With multithreads, time taken: {} microseconds",
        report.parallel.elapsed.as_micros()
    );
    println!(
        "Without multithreads, time taken: {} microseconds",
        report.sequential.elapsed.as_micros()
    );

    if args.show {
        println!("Students to expel:");
        for name in &report.parallel.expelled {
            println!("{name}");
        }
    }

    Ok(())
}
