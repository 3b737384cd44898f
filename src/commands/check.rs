use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::warn;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::{run_check, CheckKind, CheckTarget, RedundancyThresholds, Severity};
use crate::redfish::{ConnectionConfig, RedfishClient};
use crate::ui::format_plugin_output;

/// Run the requested check and print the plugin output line.
pub fn execute(matches: &ArgMatches) -> Result<Severity> {
    let config = connection_config(matches)?;
    let kind = check_kind(matches);
    let target = check_target(matches);

    let mut client = RedfishClient::new(&config)?;
    client
        .initialise()
        .with_context(|| format!("Initialisation failed for {}", config.host))?;
    client
        .login()
        .with_context(|| format!("Login on {} failed for user {}", config.host, config.username))?;

    let findings = run_check(&client, kind, &target);

    if let Err(e) = client.logout() {
        warn!("Logout from {} failed: {}", config.host, e);
    }

    let (severity, line) = format_plugin_output(&findings);
    println!("{}", line);
    Ok(severity)
}

pub fn connection_config(matches: &ArgMatches) -> Result<ConnectionConfig> {
    let host = matches
        .get_one::<String>("host")
        .context("No hostname specified")?
        .clone();
    let username = matches
        .get_one::<String>("user")
        .context("No username specified")?
        .clone();

    let password = match matches.get_one::<String>("password-file") {
        Some(path) => read_password_file(Path::new(path))?,
        None => matches
            .get_one::<String>("password")
            .context("No password or password file specified")?
            .clone(),
    };

    let port = matches.get_one::<u16>("port").copied().filter(|p| *p != 0);
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(60);

    Ok(ConnectionConfig {
        host,
        port,
        username,
        password,
        insecure_ssl: matches.get_flag("insecure-ssl"),
        timeout: Duration::from_secs(timeout),
    })
}

/// Selected check; general health when none was requested
pub fn check_kind(matches: &ArgMatches) -> CheckKind {
    if let Some(&gib) = matches.get_one::<u64>("check-installed-memory") {
        CheckKind::InstalledMemory(gib)
    } else if let Some(&cpus) = matches.get_one::<u64>("check-installed-cpus") {
        CheckKind::InstalledCpus(cpus)
    } else if let Some(&thresholds) = matches.get_one::<RedundancyThresholds>("check-psu") {
        CheckKind::Psu(thresholds)
    } else if matches.get_flag("check-thermal") {
        CheckKind::Thermal
    } else if matches.get_flag("check-voltages") {
        CheckKind::Voltages
    } else {
        CheckKind::GeneralHealth
    }
}

pub fn check_target(matches: &ArgMatches) -> CheckTarget {
    CheckTarget {
        system_id: matches.get_one::<String>("system-id").cloned(),
        chassis_id: matches.get_one::<String>("chassis-id").cloned(),
    }
}

/// Read the password from the first line of a file.
pub fn read_password_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read password file: {:?}", path))?;

    let password = content.lines().next().unwrap_or_default();
    if password.is_empty() {
        bail!("Password file {:?} does not contain a password", path);
    }
    Ok(password.to_string())
}
