/*!
 * Demo Integration Tests
 */

use pretty_assertions::assert_eq;
use sync_lab::demo::{
    read_filter_input, run_monitor_demo, run_students_demo, MemorySink, MonitorDemoConfig,
    StudentsDemoOptions,
};
use sync_lab::{FilterError, MergeStrategy};

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn test_monitor_demo_prints_one_line_per_thread() {
    let sink = MemorySink::new();
    let report = run_monitor_demo(&MonitorDemoConfig::default(), &sink).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);

    let mut ids = Vec::new();
    for line in &lines {
        let (label, chars) = line.split_once(": ").unwrap();
        let id: usize = label.strip_prefix("Thread ").unwrap().parse().unwrap();
        ids.push(id);

        assert_eq!(chars.len(), 10);
        assert!(chars.bytes().all(|b| (32..=126).contains(&b)));
    }
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    assert_eq!(report.stats.acquisitions, 4);
    assert_eq!(report.stats.releases, 4);
}

#[test]
fn test_monitor_demo_many_threads() {
    let sink = MemorySink::new();
    let config = MonitorDemoConfig {
        threads: 32,
        letters: 64,
    };
    run_monitor_demo(&config, &sink).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 32);
    for line in lines {
        let (_, chars) = line.split_once(": ").unwrap();
        assert_eq!(chars.len(), 64);
    }
}

#[test]
fn test_students_demo_fresh_lists() {
    let input = read_filter_input("500\n4\n2\n5\n".as_bytes(), std::io::sink()).unwrap();
    let options = StudentsDemoOptions {
        seed: Some(2024),
        ..Default::default()
    };

    let report = run_students_demo(&input, &options).unwrap();
    let thresholds = input.thresholds();
    let expected: Vec<String> = report
        .roster
        .iter()
        .filter(|s| thresholds.admits(s))
        .map(|s| s.name.clone())
        .collect();

    assert_eq!(report.roster.len(), 500);
    assert_eq!(report.sequential.expelled, expected);
    assert_eq!(sorted(report.parallel.expelled), sorted(expected));
}

#[test]
fn test_students_demo_accumulate() {
    let input = read_filter_input("200 3 1 4".as_bytes(), std::io::sink()).unwrap();
    let options = StudentsDemoOptions {
        seed: Some(8),
        accumulate: true,
        ..Default::default()
    };

    let report = run_students_demo(&input, &options).unwrap();
    let matched = report.parallel.expelled.len();

    assert_eq!(report.sequential.expelled.len(), matched * 2);
    assert_eq!(
        &report.sequential.expelled[..matched],
        report.parallel.expelled.as_slice()
    );
}

#[test]
fn test_students_demo_ordered_matches_sequential() {
    let input = read_filter_input("321 5 2 3".as_bytes(), std::io::sink()).unwrap();
    let options = StudentsDemoOptions {
        seed: Some(77),
        merge: MergeStrategy::PartitionOrder,
        accumulate: false,
    };

    let report = run_students_demo(&input, &options).unwrap();
    assert_eq!(report.parallel.expelled, report.sequential.expelled);
}

#[test]
fn test_students_demo_zero_threads() {
    let input = read_filter_input("10 0 1 1".as_bytes(), std::io::sink()).unwrap();
    let err = run_students_demo(&input, &StudentsDemoOptions::default()).unwrap_err();
    assert!(matches!(err, FilterError::InvalidPartitionCount(0)));
}
