use proc_schedule::config::SimulationConfig;
use proc_schedule::models::{Discipline, Process, SimulationOutcome};
use proc_schedule::registry::ProcessRegistry;
use proc_schedule::report::round2;
use proc_schedule::scheduler::simulate;
use proc_schedule::validation::ErrorKind;
use proc_schedule::workload::WorkloadGenerator;

fn scenario() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5),
        Process::new("P2", 1, 3),
        Process::new("P3", 2, 8),
    ]
}

fn assert_invariants(processes: &[Process], outcome: &SimulationOutcome) {
    assert_eq!(outcome.results.len(), processes.len());
    for (p, r) in processes.iter().zip(&outcome.results) {
        assert_eq!(r.process_id, p.id);
        assert_eq!(r.waiting_time, r.turnaround_time - p.burst_time);
        assert_eq!(r.turnaround_time, r.completion_time - p.arrival_time);
        assert!(r.completion_time >= p.arrival_time + p.burst_time);
        assert!(r.waiting_time >= 0);
        assert!(r.is_consistent());
    }
    let max_completion = outcome
        .results
        .iter()
        .map(|r| r.completion_time)
        .max()
        .unwrap();
    assert_eq!(outcome.summary.makespan, max_completion);
    let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
    assert_eq!(outcome.summary.busy_time, total_burst);
}

#[test]
fn test_fcfs_scenario_a() {
    let outcome = simulate(&scenario(), Discipline::Fcfs).unwrap();

    assert_eq!(outcome.completion_times(), vec![5, 8, 16]);
    assert_eq!(outcome.waiting_times(), vec![0, 4, 6]);
    assert_eq!(outcome.turnaround_times(), vec![5, 7, 14]);

    let s = &outcome.summary;
    assert!((s.average_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
    assert!((s.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
    assert!((s.throughput - 3.0 / 16.0).abs() < 1e-10);
    assert!((round2(s.average_turnaround_time) - 8.67).abs() < 1e-10);
    assert!((round2(s.average_waiting_time) - 3.33).abs() < 1e-10);
    assert!((round2(s.throughput) - 0.19).abs() < 1e-10);
}

#[test]
fn test_round_robin_scenario_b() {
    // q=4: P1 0..4 | P2 4..7 | P3 7..11 | P1 11..12 | P3 12..16
    let outcome = simulate(&scenario(), Discipline::round_robin(4)).unwrap();

    assert_eq!(outcome.completion_times(), vec![12, 7, 16]);
    assert_eq!(outcome.turnaround_times(), vec![12, 6, 14]);
    assert_eq!(outcome.waiting_times(), vec![7, 3, 6]);

    let response: Vec<i64> = outcome.results.iter().map(|r| r.response_time).collect();
    assert_eq!(response, vec![0, 3, 5]);

    let s = &outcome.summary;
    assert_eq!(s.makespan, 16);
    assert_eq!(s.dispatch_count, 5);
    assert!((s.average_turnaround_time - 32.0 / 3.0).abs() < 1e-10);
    assert!((s.average_waiting_time - 16.0 / 3.0).abs() < 1e-10);
    assert!((s.throughput - 3.0 / 16.0).abs() < 1e-10);
}

#[test]
fn test_round_robin_quantum_two() {
    // q=2 trace:
    // P1 0..2 (rem 3), P2,P3 arrive -> [P2,P3,P1]
    // P2 2..4 (rem 1) -> [P3,P1,P2]
    // P3 4..6 (rem 6) -> [P1,P2,P3]
    // P1 6..8 (rem 1) -> [P2,P3,P1]
    // P2 8..9 done
    // P3 9..11 (rem 4) -> [P1,P3]
    // P1 11..12 done
    // P3 12..14, 14..16 done
    let outcome = simulate(&scenario(), Discipline::round_robin(2)).unwrap();
    assert_eq!(outcome.completion_times(), vec![12, 9, 16]);
    assert_eq!(outcome.waiting_times(), vec![7, 5, 6]);
    assert_invariants(&scenario(), &outcome);
}

#[test]
fn test_single_process_both_disciplines() {
    let processes = vec![Process::new("solo", 3, 4)];
    for discipline in [Discipline::Fcfs, Discipline::round_robin(1), Discipline::round_robin(10)] {
        let outcome = simulate(&processes, discipline).unwrap();
        let r = &outcome.results[0];
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.completion_time, 7);
        assert!((outcome.summary.throughput - 1.0 / 7.0).abs() < 1e-10);
    }
}

#[test]
fn test_fcfs_idempotent() {
    let processes = WorkloadGenerator::new(12).with_seed(3).generate().unwrap();
    let first = simulate(&processes, Discipline::Fcfs).unwrap();
    let second = simulate(&processes, Discipline::Fcfs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invariants_over_random_workloads() {
    for seed in 0..25 {
        let processes = WorkloadGenerator::new(8)
            .with_max_arrival(30)
            .with_burst_range(1, 9)
            .with_seed(seed)
            .generate()
            .unwrap();

        for discipline in [
            Discipline::Fcfs,
            Discipline::round_robin(1),
            Discipline::round_robin(3),
        ] {
            let outcome = simulate(&processes, discipline).unwrap();
            assert_invariants(&processes, &outcome);
        }
    }
}

#[test]
fn test_large_quantum_degenerates_to_fcfs() {
    for seed in 0..25 {
        let processes = WorkloadGenerator::new(6)
            .with_max_arrival(15)
            .with_burst_range(1, 8)
            .with_seed(seed)
            .generate()
            .unwrap();
        let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap();

        let fcfs = simulate(&processes, Discipline::Fcfs).unwrap();
        let rr = simulate(&processes, Discipline::round_robin(max_burst)).unwrap();
        assert_eq!(rr.completion_times(), fcfs.completion_times());
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    let err = simulate(&[], Discipline::Fcfs).unwrap_err();
    assert!(err.has_kind(ErrorKind::EmptyInput));

    let err = simulate(&[Process::new("P1", 0, 0)], Discipline::Fcfs).unwrap_err();
    assert!(err.has_kind(ErrorKind::InvalidProcess));

    let err = simulate(&[Process::new("P1", 0, -2)], Discipline::round_robin(2)).unwrap_err();
    assert!(err.has_kind(ErrorKind::InvalidProcess));

    for q in [0, -1] {
        let err = simulate(&scenario(), Discipline::round_robin(q)).unwrap_err();
        assert!(err.has_kind(ErrorKind::InvalidQuantum));
    }
}

#[test]
fn test_large_values_rejected_or_computed() {
    // Fits: the latest tick reached is exactly i64::MAX.
    let late = i64::MAX - 1000;
    let processes = vec![Process::new("P1", late, 600), Process::new("P2", late, 400)];
    for discipline in [Discipline::Fcfs, Discipline::round_robin(i64::MAX)] {
        let outcome = simulate(&processes, discipline).unwrap();
        assert_eq!(outcome.completion_times(), vec![late + 600, i64::MAX]);
        assert_eq!(outcome.summary.makespan, i64::MAX);
        assert_invariants(&processes, &outcome);
    }

    let huge = vec![Process::new("P1", 0, i64::MAX / 2), Process::new("P2", 0, i64::MAX / 2)];
    let outcome = simulate(&huge, Discipline::round_robin(i64::MAX / 2)).unwrap();
    assert!(outcome.summary.average_turnaround_time > 0.0);
    assert_eq!(outcome.summary.idle_time, 0);

    // Overflows: rejected before anything runs.
    let err = simulate(&[Process::new("P1", i64::MAX, 1)], Discipline::Fcfs).unwrap_err();
    assert_eq!(err.kinds(), vec![ErrorKind::InvalidProcess]);

    let processes = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
    for discipline in [Discipline::Fcfs, Discipline::round_robin(i64::MAX)] {
        let err = simulate(&processes, discipline).unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::InvalidProcess]);
    }
}

#[test]
fn test_registry_round_trip_through_config() {
    let json = r#"{
        "discipline": "round_robin",
        "quantum": 4,
        "processes": [
            {"id": "P1", "arrival_time": 0, "burst_time": 5},
            {"id": "P2", "arrival_time": 1, "burst_time": 3},
            {"id": "P3", "arrival_time": 2, "burst_time": 8}
        ]
    }"#;
    let config = SimulationConfig::from_json_str(json).unwrap();
    let registry = ProcessRegistry::from_processes(config.processes.clone()).unwrap();
    let outcome = registry.simulate(config.discipline().unwrap()).unwrap();

    assert_eq!(outcome.completion_times(), vec![12, 7, 16]);
    assert_eq!(registry.processes(), config.processes.as_slice());

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["summary"]["makespan"], 16);
    assert_eq!(value["discipline"]["quantum"], 4);
}
