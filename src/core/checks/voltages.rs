use log::debug;

use crate::core::perfdata::{positive_decimal, PerfData};
use crate::core::severity::{Findings, Severity};
use crate::core::status::{classify_health, classify_state, Health, ResourceClass, StateClass};
use crate::error::Result;
use crate::redfish::{TelemetrySource, Voltage};

use super::target::{power_endpoint, resolve_chassis};

const UNNAMED_VOLTAGE: &str = "<unnamed voltage>";

/// Check the voltage sensors reported in the chassis' power resource.
pub fn check_voltages(source: &dyn TelemetrySource, chassis_id: Option<&str>) -> Result<Findings> {
    let chassis = resolve_chassis(source, chassis_id)?;
    let power = source.power(&power_endpoint(&chassis)?)?;

    let mut findings = Findings::new();
    for voltage in &power.voltages {
        evaluate_voltage(voltage, &mut findings);
    }
    Ok(findings)
}

fn evaluate_voltage(voltage: &Voltage, findings: &mut Findings) {
    let name = voltage.name.as_deref().unwrap_or(UNNAMED_VOLTAGE);

    if classify_state(ResourceClass::VoltageSensor, voltage.status.state.as_deref())
        != StateClass::Proceed
    {
        return;
    }
    match classify_health(voltage.status.health.as_deref()) {
        Health::Missing => {
            debug!("Voltage {} reports no health, ignoring it", name);
            return;
        }
        Health::Ok => findings.push(Severity::Ok, format!("Voltage {} is reported as ok", name)),
        Health::Warning => findings.push(
            Severity::Warning,
            format!("Voltage {} is reported as warning", name),
        ),
        Health::Critical => findings.push(
            Severity::Critical,
            format!("Voltage {} is reported as critical", name),
        ),
        Health::Unrecognized(reported) => {
            debug!("Voltage {} reports health {:?}", name, reported)
        }
    }

    // TODO: surface the Lower/UpperThreshold* values as warning and critical ranges
    let current = positive_decimal(voltage.reading_volts);
    if current.is_empty() {
        return;
    }
    let token = PerfData::new(format!("voltage_{}", name), current)
        .with_min(positive_decimal(voltage.min_reading_range))
        .with_max(positive_decimal(voltage.max_reading_range));
    if let Ok(token) = token.format() {
        findings.push_perf_data(token);
    }
}
