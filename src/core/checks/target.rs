//! Resolution of the system or chassis a check runs against.

use log::debug;

use crate::error::{CheckError, Result};
use crate::redfish::{ChassisData, Link, SystemData, TelemetrySource};

/// Which system and chassis to check. `None` selects the first one reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckTarget {
    pub system_id: Option<String>,
    pub chassis_id: Option<String>,
}

/// A resolved resource together with the ID used in messages
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub id: String,
    pub data: T,
}

fn display_id(reported: Option<&str>, requested: Option<&str>) -> String {
    reported
        .filter(|id| !id.is_empty())
        .or(requested)
        .unwrap_or_default()
        .to_string()
}

pub fn resolve_system(
    source: &dyn TelemetrySource,
    system_id: Option<&str>,
) -> Result<Resolved<SystemData>> {
    let endpoints = source.systems()?;

    let data = match system_id {
        None => {
            let first = endpoints
                .first()
                .ok_or_else(|| CheckError::data("No system endpoint reported at all"))?;
            debug!("No system ID given, using {}", first);
            source.system(first)?
        }
        Some(wanted) => find_by_id(&endpoints, wanted, |ep| source.system(ep), |s| s.id.as_deref())?
            .ok_or_else(|| CheckError::data(format!("System with ID {} not found", wanted)))?,
    };

    Ok(Resolved {
        id: display_id(data.id.as_deref(), system_id),
        data,
    })
}

pub fn resolve_chassis(
    source: &dyn TelemetrySource,
    chassis_id: Option<&str>,
) -> Result<Resolved<ChassisData>> {
    let endpoints = source.chassis()?;

    let data = match chassis_id {
        None => {
            let first = endpoints
                .first()
                .ok_or_else(|| CheckError::data("No chassis endpoint reported at all"))?;
            debug!("No chassis ID given, using {}", first);
            source.chassis_data(first)?
        }
        Some(wanted) => find_by_id(
            &endpoints,
            wanted,
            |ep| source.chassis_data(ep),
            |c| c.id.as_deref(),
        )?
        .ok_or_else(|| CheckError::data(format!("Chassis with ID {} not found", wanted)))?,
    };

    Ok(Resolved {
        id: display_id(data.id.as_deref(), chassis_id),
        data,
    })
}

/// Fetch resources in reported order until one carries the wanted `Id`.
fn find_by_id<T>(
    endpoints: &[String],
    wanted: &str,
    fetch: impl Fn(&str) -> Result<T>,
    id_of: impl Fn(&T) -> Option<&str>,
) -> Result<Option<T>> {
    for endpoint in endpoints {
        let data = fetch(endpoint)?;
        if id_of(&data) == Some(wanted) {
            return Ok(Some(data));
        }
    }
    Ok(None)
}

fn sub_resource(link: Option<&Link>, kind: &str, chassis_id: &str) -> Result<String> {
    let link = link.ok_or_else(|| {
        CheckError::data(format!(
            "No {} endpoint defined for chassis with ID {}",
            kind, chassis_id
        ))
    })?;

    link.odata_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CheckError::data(format!(
                "{} endpoint of chassis with ID {} has no Id attribute",
                kind, chassis_id
            ))
        })
}

/// Identifier of the chassis' `Power` resource
pub fn power_endpoint(chassis: &Resolved<ChassisData>) -> Result<String> {
    sub_resource(chassis.data.power.as_ref(), "Power", &chassis.id)
}

/// Identifier of the chassis' `Thermal` resource
pub fn thermal_endpoint(chassis: &Resolved<ChassisData>) -> Result<String> {
    sub_resource(chassis.data.thermal.as_ref(), "Thermal", &chassis.id)
}
