use check_redfish::core::run_check;
use check_redfish::{CheckKind, CheckTarget, Severity};
use serde_json::{json, Value};

use super::support::FakeBoard;

fn run(system: Value, kind: CheckKind) -> (Severity, String) {
    let board = FakeBoard::new().with_system(system);
    run_check(&board, kind, &CheckTarget::default()).combine()
}

fn cpus(count: u64) -> Value {
    json!({"Id": "1", "ProcessorSummary": {"Count": count}})
}

#[test]
fn test_cpu_count_against_target() {
    assert_eq!(
        run(cpus(2), CheckKind::InstalledCpus(4)),
        (
            Severity::Critical,
            "Only 2 CPUs (instead of 4) installed".to_string()
        )
    );
    assert_eq!(
        run(cpus(6), CheckKind::InstalledCpus(4)),
        (Severity::Warning, "6 CPUs (instead of 4) installed".to_string())
    );
    assert_eq!(
        run(cpus(4), CheckKind::InstalledCpus(4)),
        (Severity::Ok, "4 CPUs installed".to_string())
    );
}

#[test]
fn test_zero_cpus_means_not_reported() {
    let (severity, msg) = run(cpus(0), CheckKind::InstalledCpus(4));
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(
        msg,
        "No Count reported in ProcessorSummary data for system with ID 1"
    );
}

#[test]
fn test_missing_processor_summary() {
    let (severity, msg) = run(json!({"Id": "1"}), CheckKind::InstalledCpus(2));
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "No ProcessorSummary data found for system with ID 1");
}

#[test]
fn test_memory_against_target() {
    let system = json!({"Id": "1", "MemorySummary": {"TotalSystemMemoryGiB": 512}});
    assert_eq!(
        run(system.clone(), CheckKind::InstalledMemory(256)),
        (
            Severity::Warning,
            "512 GiB of memory (instead of 256) installed".to_string()
        )
    );
    assert_eq!(
        run(system, CheckKind::InstalledMemory(512)),
        (Severity::Ok, "512 GiB of memory installed".to_string())
    );
}

#[test]
fn test_memory_not_reported() {
    let (severity, msg) = run(
        json!({"Id": "1", "MemorySummary": {}}),
        CheckKind::InstalledMemory(64),
    );
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(
        msg,
        "No TotalSystemMemoryGiB reported in MemorySummary data for system with ID 1"
    );

    let (_, msg) = run(json!({"Id": "1"}), CheckKind::InstalledMemory(64));
    assert_eq!(msg, "No MemorySummary data found for system with ID 1");
}
