use check_redfish::core::run_check;
use check_redfish::{CheckKind, CheckTarget, Severity};
use serde_json::json;

use super::support::FakeBoard;

fn general_health(board: &FakeBoard, system_id: Option<&str>) -> (Severity, String) {
    let target = CheckTarget {
        system_id: system_id.map(str::to_string),
        chassis_id: None,
    };
    run_check(board, CheckKind::GeneralHealth, &target).combine()
}

fn system(state: Option<&str>, health: Option<&str>) -> FakeBoard {
    FakeBoard::new().with_system(json!({
        "Id": "1",
        "Status": {"State": state, "Health": health}
    }))
}

#[test]
fn test_health_ok() {
    let result = general_health(&system(Some("Enabled"), Some("OK")), None);
    assert_eq!(
        result,
        (Severity::Ok, "General health is reported as OK".to_string())
    );
}

#[test]
fn test_health_is_case_insensitive() {
    for (state, health) in [("ENABLED", "OK"), ("enabled", "ok"), ("Enabled", "Ok")] {
        let (severity, _) = general_health(&system(Some(state), Some(health)), None);
        assert_eq!(severity, Severity::Ok, "{state}/{health}");
    }
}

#[test]
fn test_health_warning_and_critical() {
    let (severity, msg) = general_health(&system(Some("Enabled"), Some("Warning")), None);
    assert_eq!(severity, Severity::Warning);
    assert_eq!(msg, "General health is reported as warning");

    let (severity, msg) = general_health(&system(Some("Enabled"), Some("CRITICAL")), None);
    assert_eq!(severity, Severity::Critical);
    assert_eq!(msg, "General health is reported as critical");
}

#[test]
fn test_failed_is_critical() {
    let (severity, msg) = general_health(&system(Some("Enabled"), Some("Failed")), None);
    assert_eq!(severity, Severity::Critical);
    assert_eq!(msg, "General health is reported as failed");
}

#[test]
fn test_unrecognized_health_is_quoted() {
    let (severity, msg) = general_health(&system(Some("Enabled"), Some("Degraded")), None);
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "General health is reported as \"Degraded\"");
}

#[test]
fn test_state_not_enabled() {
    let (severity, msg) = general_health(&system(Some("StandbyOffline"), Some("OK")), None);
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(
        msg,
        "System reports \"StandbyOffline\" instead of \"Enabled\" for health information"
    );
}

#[test]
fn test_missing_state() {
    for state in [None, Some("")] {
        let (severity, msg) = general_health(&system(state, Some("OK")), None);
        assert_eq!(severity, Severity::Unknown);
        assert_eq!(msg, "System with ID 1 does not define a state");
    }
}

#[test]
fn test_missing_health() {
    let (severity, msg) = general_health(&system(Some("Enabled"), None), None);
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "System with ID 1 does not define a health state");
}

#[test]
fn test_no_system_at_all() {
    let (severity, msg) = general_health(&FakeBoard::new(), None);
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "No system endpoint reported at all");
}

#[test]
fn test_select_system_by_id() {
    let board = FakeBoard::new()
        .with_system(json!({"Id": "A", "Status": {"State": "Enabled", "Health": "OK"}}))
        .with_system(json!({"Id": "B", "Status": {"State": "Enabled", "Health": "Critical"}}));

    assert_eq!(general_health(&board, None).0, Severity::Ok);
    assert_eq!(general_health(&board, Some("B")).0, Severity::Critical);

    let (severity, msg) = general_health(&board, Some("C"));
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "System with ID C not found");
}

#[test]
fn test_transport_error_is_reported_verbatim() {
    let board = system(Some("Enabled"), Some("OK")).failing("session expired");
    let (severity, msg) = general_health(&board, None);
    assert_eq!(severity, Severity::Unknown);
    assert_eq!(msg, "Authentication failed: session expired");
}
