use crate::core::severity::{Findings, Severity};
use crate::core::status::{
    classify_state, classify_system_health, Health, ResourceClass, StateClass,
};
use crate::error::{CheckError, Result};
use crate::redfish::TelemetrySource;

use super::target::resolve_system;

/// Report the overall health of a system.
pub fn check_general_health(
    source: &dyn TelemetrySource,
    system_id: Option<&str>,
) -> Result<Findings> {
    let system = resolve_system(source, system_id)?;
    let status = &system.data.status;

    let state = status.state.as_deref().filter(|s| !s.is_empty()).ok_or_else(|| {
        CheckError::data(format!("System with ID {} does not define a state", system.id))
    })?;

    if let StateClass::Unknown(reported) = classify_state(ResourceClass::System, Some(state)) {
        return Err(CheckError::data(format!(
            "System reports \"{}\" instead of \"Enabled\" for health information",
            reported
        )));
    }

    let mut findings = Findings::new();
    match classify_system_health(status.health.as_deref()) {
        Health::Missing => {
            return Err(CheckError::data(format!(
                "System with ID {} does not define a health state",
                system.id
            )))
        }
        Health::Ok => findings.push(Severity::Ok, "General health is reported as OK"),
        Health::Warning => findings.push(Severity::Warning, "General health is reported as warning"),
        Health::Critical => {
            let word = match status.health.as_deref() {
                Some(h) if h.eq_ignore_ascii_case("failed") => "failed",
                _ => "critical",
            };
            findings.push(
                Severity::Critical,
                format!("General health is reported as {}", word),
            )
        }
        Health::Unrecognized(health) => findings.push(
            Severity::Unknown,
            format!("General health is reported as \"{}\"", health),
        ),
    }

    Ok(findings)
}
