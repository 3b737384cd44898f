use check_redfish::core::checks::check_voltages;
use check_redfish::Severity;
use serde_json::{json, Value};

use super::support::{FakeBoard, POWER};

fn voltage_board(voltages: Vec<Value>) -> FakeBoard {
    FakeBoard::new()
        .with_default_chassis()
        .with_document(POWER, json!({"Voltages": voltages}))
}

#[test]
fn test_voltage_readings() {
    let board = voltage_board(vec![
        json!({
            "Name": "PS1 Voltage 1",
            "Status": {"State": "Enabled", "Health": "OK"},
            "ReadingVolts": 230.5,
            "MinReadingRange": 180,
            "MaxReadingRange": 264.25
        }),
        json!({
            "Name": "VBAT",
            "Status": {"State": "Enabled", "Health": "Warning"},
            "ReadingVolts": 2.75
        }),
    ]);

    let findings = check_voltages(&board, None).unwrap();
    assert_eq!(findings.ok, vec!["Voltage PS1 Voltage 1 is reported as ok"]);
    assert_eq!(findings.warning, vec!["Voltage VBAT is reported as warning"]);
    assert_eq!(
        findings.perf_data,
        vec!["'voltage_PS1 Voltage 1'=230.5;;;180;264.25", "voltage_VBAT=2.75;;;;"]
    );
    assert_eq!(findings.combine().0, Severity::Warning);
}

#[test]
fn test_thresholds_do_not_replace_range() {
    let board = voltage_board(vec![json!({
        "Name": "12V",
        "Status": {"State": "Enabled", "Health": "OK"},
        "ReadingVolts": 12.1,
        "MinReadingRange": 10,
        "MaxReadingRange": 14,
        "UpperThresholdNonCritical": 12.6,
        "UpperThresholdCritical": 13.2
    })]);

    let findings = check_voltages(&board, None).unwrap();
    assert_eq!(findings.perf_data, vec!["voltage_12V=12.1;;;10;14"]);
}

#[test]
fn test_absent_and_disabled_voltages_are_skipped() {
    let board = voltage_board(vec![
        json!({"Name": "A", "Status": {"State": "Absent"}, "ReadingVolts": 5}),
        json!({"Name": "B", "Status": {"State": "Disabled", "Health": "Critical"}}),
        json!({"Name": "C", "Status": {"State": "Enabled", "Health": "OK"}}),
    ]);

    let findings = check_voltages(&board, None).unwrap();
    assert_eq!(findings.ok, vec!["Voltage C is reported as ok"]);
    assert!(findings.critical.is_empty());
    assert!(findings.perf_data.is_empty());
}

#[test]
fn test_power_fetch_failure() {
    let board = FakeBoard::new().with_default_chassis();

    let err = check_voltages(&board, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "HTTP status 404 returned for /redfish/v1/Chassis/1/Power"
    );
}
