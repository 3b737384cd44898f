//! Power supply redundancy check.

use std::str::FromStr;

use log::debug;

use crate::core::perfdata::{positive_integer, PerfData};
use crate::core::severity::{Findings, Severity};
use crate::core::status::{classify_health, classify_state, Health, ResourceClass, StateClass};
use crate::error::{CheckError, Result};
use crate::redfish::{PowerSupply, TelemetrySource};

use super::target::{power_endpoint, resolve_chassis};

const UNNAMED_PSU: &str = "<unnamed PSU>";
const NO_SERIAL: &str = "<no serial number reported>";

/// Minimum number of working power supplies before warning / critical is
/// reported. `0 < critical <= warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedundancyThresholds {
    pub warning: u32,
    pub critical: u32,
}

impl RedundancyThresholds {
    pub fn new(warning: u32, critical: u32) -> Result<Self> {
        if warning == 0 || critical == 0 {
            return Err(CheckError::invalid_argument(
                "Warning and critical threshold must be greater than zero",
            ));
        }
        if critical > warning {
            return Err(CheckError::invalid_argument(
                "Critical threshold must be less than or equal to warning threshold",
            ));
        }
        Ok(Self { warning, critical })
    }
}

impl FromStr for RedundancyThresholds {
    type Err = CheckError;

    /// Parse `<warn>,<crit>`
    fn from_str(s: &str) -> Result<Self> {
        let (warning, critical) = s.split_once(',').ok_or_else(|| {
            CheckError::invalid_argument(format!(
                "Invalid format {:?}, expected <warn>,<crit>",
                s
            ))
        })?;

        let parse = |value: &str| {
            value.trim().parse::<u32>().map_err(|e| {
                CheckError::invalid_argument(format!("Can't convert {} to a number: {}", value, e))
            })
        };

        Self::new(parse(warning)?, parse(critical)?)
    }
}

#[derive(Debug, Default)]
struct PsuCount {
    present: u32,
    working: u32,
}

/// Check power supplies of a chassis against the redundancy thresholds.
pub fn check_psu(
    source: &dyn TelemetrySource,
    chassis_id: Option<&str>,
    thresholds: RedundancyThresholds,
) -> Result<Findings> {
    let chassis = resolve_chassis(source, chassis_id)?;
    let power = source.power(&power_endpoint(&chassis)?)?;

    let mut findings = Findings::new();
    let mut count = PsuCount::default();

    for psu in &power.power_supplies {
        evaluate_psu(psu, &mut findings, &mut count);
    }

    if count.present == 0 {
        findings.push(
            Severity::Unknown,
            "No power supplies reported at all. This may be a firmware bug!",
        );
        return Ok(findings);
    }

    if count.working == 0 {
        findings.push(
            Severity::Unknown,
            "No working power supplies reported. This may be a firmware bug!",
        );
        return Ok(findings);
    }

    if count.working < thresholds.critical {
        findings.prepend(
            Severity::Critical,
            format!(
                "Only {} out of {} power supplies are working",
                count.working, count.present
            ),
        );
    } else if count.working < thresholds.warning {
        findings.prepend(
            Severity::Warning,
            format!(
                "Only {} out of {} power supplies are working",
                count.working, count.present
            ),
        );
    } else {
        findings.prepend(
            Severity::Ok,
            format!(
                "{} out of {} power supplies are working",
                count.working, count.present
            ),
        );
    }

    Ok(findings)
}

fn evaluate_psu(psu: &PowerSupply, findings: &mut Findings, count: &mut PsuCount) {
    let name = psu.name.as_deref().unwrap_or(UNNAMED_PSU);
    let serial = psu.serial_number.as_deref().unwrap_or(NO_SERIAL);

    match classify_state(ResourceClass::PowerSupply, psu.status.state.as_deref()) {
        StateClass::Skip => return,
        StateClass::Unknown(state) => {
            findings.push(
                Severity::Unknown,
                format!("PSU {} (SN: {}) reports unknown state {}", name, serial, state),
            );
            return;
        }
        StateClass::Proceed => {}
    }

    let (severity, message) = match classify_health(psu.status.health.as_deref()) {
        // an active unit without health is neither present nor working
        Health::Missing => {
            debug!("PSU {} (SN: {}) reports no health, ignoring it", name, serial);
            return;
        }
        Health::Ok => {
            count.working += 1;
            (Severity::Ok, format!("PSU {} (SN: {}) is reported as ok", name, serial))
        }
        Health::Warning => (
            Severity::Warning,
            format!("PSU {} (SN: {}) is reported as warning", name, serial),
        ),
        Health::Critical => (
            Severity::Critical,
            format!("PSU {} (SN: {}) is reported as critical", name, serial),
        ),
        Health::Unrecognized(reported) => (
            Severity::Unknown,
            format!(
                "PSU {} (SN: {}) reports unknown health \"{}\"",
                name, serial, reported
            ),
        ),
    };
    count.present += 1;
    findings.push(severity, message);

    let output = positive_integer(psu.last_power_output_watts);
    if !output.is_empty() {
        let token = PerfData::new(format!("power_output_{}", name), output)
            .with_max(positive_integer(psu.power_capacity_watts));
        if let Ok(token) = token.format() {
            findings.push_perf_data(token);
        }
    }

    let voltage = positive_integer(psu.line_input_voltage);
    if !voltage.is_empty() {
        if let Ok(token) = PerfData::new(format!("input_voltage_{}", name), voltage).format() {
            findings.push_perf_data(token);
        }
    }
}
