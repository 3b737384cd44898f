use log::debug;

use crate::core::perfdata::{positive_integer, PerfData};
use crate::core::severity::{Findings, Severity};
use crate::core::status::{classify_health, classify_state, Health, ResourceClass, StateClass};
use crate::error::Result;
use crate::redfish::{Temperature, TelemetrySource};

use super::target::{resolve_chassis, thermal_endpoint};

const UNNAMED_SENSOR: &str = "<unnamed sensor>";

/// Check the temperature sensors of a chassis.
pub fn check_thermal(source: &dyn TelemetrySource, chassis_id: Option<&str>) -> Result<Findings> {
    let chassis = resolve_chassis(source, chassis_id)?;
    let thermal = source.thermal(&thermal_endpoint(&chassis)?)?;

    let mut findings = Findings::new();
    for sensor in &thermal.temperatures {
        evaluate_sensor(sensor, &mut findings);
    }
    Ok(findings)
}

fn evaluate_sensor(sensor: &Temperature, findings: &mut Findings) {
    let name = sensor.name.as_deref().unwrap_or(UNNAMED_SENSOR);

    if classify_state(ResourceClass::TemperatureSensor, sensor.status.state.as_deref())
        != StateClass::Proceed
    {
        return;
    }
    match classify_health(sensor.status.health.as_deref()) {
        Health::Missing => {
            debug!("Sensor {:?} reports no health, ignoring it", name);
            return;
        }
        Health::Ok => findings.push(
            Severity::Ok,
            format!("Sensor \"{}\" is reported as ok", name),
        ),
        Health::Warning => findings.push(
            Severity::Warning,
            format!("Sensor \"{}\" is reported as warning", name),
        ),
        Health::Critical => findings.push(
            Severity::Critical,
            format!("Sensor \"{}\" is reported as critical", name),
        ),
        // temperature sensors have no unknown fallback
        Health::Unrecognized(reported) => {
            debug!("Sensor {:?} reports health {:?}", name, reported)
        }
    }

    let current = positive_integer(sensor.reading_celsius);
    if current.is_empty() {
        return;
    }

    // upper thresholds replace the raw reading range when reported
    let mut min = positive_integer(sensor.min_reading_range_temp);
    let mut max = positive_integer(sensor.max_reading_range_temp);
    let upper_non_critical = positive_integer(sensor.upper_threshold_non_critical);
    if !upper_non_critical.is_empty() {
        min = upper_non_critical;
    }
    let upper_critical = positive_integer(sensor.upper_threshold_critical);
    if !upper_critical.is_empty() {
        max = upper_critical;
    }

    let token = PerfData::new(format!("temperature_{}", name), current)
        .with_min(min)
        .with_max(max);
    if let Ok(token) = token.format() {
        findings.push_perf_data(token);
    }
}
