use std::fs;
use std::path::PathBuf;

use proc_schedule::config::SimulationConfig;
use proc_schedule::loader::{load_processes, load_processes_file};
use proc_schedule::models::{total_burst, ExecutionInterval};
use proc_schedule::report::write_reports;
use proc_schedule::scheduler::{run_policies, Policy};
use proc_schedule::SimErrorKind;

fn temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "proc-schedule-{}-{name}.csv",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_fcfs_from_file() {
    let path = temp_csv("fcfs", "1,4,0\n2,3,1\n3,2,2\n");
    let processes = load_processes_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let config = SimulationConfig::new().with_policies(vec![Policy::Fcfs]);
    let outcome = &run_policies(&processes, &config)[0];

    assert_eq!(
        outcome.timeline.intervals(),
        &[
            ExecutionInterval::new(1, 0, 4),
            ExecutionInterval::new(2, 4, 7),
            ExecutionInterval::new(3, 7, 9),
        ]
    );
    assert_eq!(
        format!(
            "{:.3} {:.3} {:.3}",
            outcome.summary.average_waiting,
            outcome.summary.average_turnaround,
            outcome.summary.throughput
        ),
        "2.667 5.667 0.333"
    );
}

#[test]
fn test_srtf_from_reader() {
    let processes = load_processes("1,5,0\n2,2,1\n".as_bytes()).unwrap();
    let config = SimulationConfig::new().with_policies(vec![Policy::Srtf]);
    let outcome = &run_policies(&processes, &config)[0];

    assert_eq!(
        outcome.timeline.intervals(),
        &[
            ExecutionInterval::new(1, 0, 1),
            ExecutionInterval::new(2, 1, 3),
            ExecutionInterval::new(1, 3, 7),
        ]
    );
    let p1 = outcome.stats_for(1).unwrap();
    let p2 = outcome.stats_for(2).unwrap();
    assert_eq!((p1.waiting_time, p1.turnaround_time, p1.completion_time), (2, 7, 7));
    assert_eq!((p2.waiting_time, p2.turnaround_time, p2.completion_time), (0, 2, 3));
}

#[test]
fn test_all_policies_over_one_input() {
    let csv = "1,5,0,3\n2,3,1,1\n3,8,2,4\n4,6,3,2\n5,2,9,0\n";
    let processes = load_processes(csv.as_bytes()).unwrap();
    let outcomes = run_policies(&processes, &SimulationConfig::new().with_parallel(true));

    assert_eq!(outcomes.len(), 3);
    for outcome in &outcomes {
        assert_eq!(outcome.stats.len(), processes.len());
        assert_eq!(outcome.timeline.busy_time(), total_burst(&processes));
        assert!(outcome.timeline.is_well_formed(), "{}", outcome.policy);
        for s in &outcome.stats {
            assert_eq!(s.turnaround_time, s.process.burst_duration + s.waiting_time);
        }
    }

    let mut rendered = Vec::new();
    write_reports(&mut rendered, &outcomes).unwrap();
    let text = String::from_utf8(rendered).unwrap();
    for policy in Policy::ALL {
        assert!(text.contains(policy.title()));
    }
    assert_eq!(text.matches("Schedule table").count(), 3);
}

#[test]
fn test_single_process_every_policy() {
    let processes = load_processes("7,5,0,2\n".as_bytes()).unwrap();
    for outcome in run_policies(&processes, &SimulationConfig::new()) {
        let s = &outcome.stats[0];
        assert_eq!(s.waiting_time, 0, "{}", outcome.policy);
        assert_eq!(s.completion_time, 5, "{}", outcome.policy);
        assert!((outcome.summary.throughput - 0.2).abs() < 1e-10);
    }
}

#[test]
fn test_bad_input_aborts_before_scheduling() {
    let path = temp_csv("bad", "1,4,0\n2,three,1\n");
    let err = load_processes_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert_eq!(err.kind, SimErrorKind::MalformedInput);
    assert_eq!(err.line, Some(2));
}
