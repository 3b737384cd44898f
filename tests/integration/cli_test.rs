use check_redfish::commands::build_cli;
use check_redfish::commands::check::{check_kind, check_target, connection_config, read_password_file};
use check_redfish::core::RedundancyThresholds;
use check_redfish::CheckKind;
use std::fs;
use tempfile::TempDir;

fn parse(args: &[&str]) -> clap::error::Result<clap::ArgMatches> {
    let mut argv = vec!["check_redfish", "--host", "bmc", "--user", "monitor"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv)
}

#[test]
fn test_general_health_is_default() {
    let matches = parse(&["--password", "pw"]).unwrap();
    assert_eq!(check_kind(&matches), CheckKind::GeneralHealth);
    assert_eq!(check_target(&matches).system_id, None);
}

#[test]
fn test_select_checks() {
    let matches = parse(&["--password", "pw", "--check-installed-cpus", "2"]).unwrap();
    assert_eq!(check_kind(&matches), CheckKind::InstalledCpus(2));

    let matches = parse(&["--password", "pw", "--check-installed-memory", "256"]).unwrap();
    assert_eq!(check_kind(&matches), CheckKind::InstalledMemory(256));

    let matches = parse(&["--password", "pw", "--check-psu", "3,2"]).unwrap();
    assert_eq!(
        check_kind(&matches),
        CheckKind::Psu(RedundancyThresholds { warning: 3, critical: 2 })
    );

    let matches = parse(&["--password", "pw", "--check-thermal", "--chassis-id", "1"]).unwrap();
    assert_eq!(check_kind(&matches), CheckKind::Thermal);
    assert_eq!(check_target(&matches).chassis_id.as_deref(), Some("1"));

    let matches = parse(&["--password", "pw", "--check-voltages"]).unwrap();
    assert_eq!(check_kind(&matches), CheckKind::Voltages);
}

#[test]
fn test_only_one_check_at_a_time() {
    assert!(parse(&["--password", "pw", "--check-thermal", "--check-voltages"]).is_err());
}

#[test]
fn test_invalid_psu_thresholds() {
    assert!(parse(&["--password", "pw", "--check-psu", "2,3"]).is_err());
    assert!(parse(&["--password", "pw", "--check-psu", "0,0"]).is_err());
    assert!(parse(&["--password", "pw", "--check-psu", "two,one"]).is_err());
}

#[test]
fn test_password_required() {
    assert!(parse(&[]).is_err());
    assert!(parse(&["--password", "pw", "--password-file", "/tmp/pw"]).is_err());
}

#[test]
fn test_connection_config() {
    let matches = parse(&["--password", "pw", "--port", "8443", "--insecure-ssl"]).unwrap();
    let config = connection_config(&matches).unwrap();
    assert_eq!(config.host, "bmc");
    assert_eq!(config.port, Some(8443));
    assert_eq!(config.password, "pw");
    assert!(config.insecure_ssl);
    assert_eq!(config.timeout.as_secs(), 60);

    let matches = parse(&["--password", "pw", "--port", "0"]).unwrap();
    assert_eq!(connection_config(&matches).unwrap().port, None);
}

#[test]
fn test_password_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("password");
    fs::write(&path, "s3cret\r\nsecond line\n").unwrap();

    assert_eq!(read_password_file(&path).unwrap(), "s3cret");

    let matches = parse(&["--password-file", path.to_str().unwrap()]).unwrap();
    assert_eq!(connection_config(&matches).unwrap().password, "s3cret");
}

#[test]
fn test_empty_or_missing_password_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty");
    fs::write(&path, "\nsecond line\n").unwrap();

    assert!(read_password_file(&path).is_err());
    assert!(read_password_file(&temp_dir.path().join("missing")).is_err());
}
