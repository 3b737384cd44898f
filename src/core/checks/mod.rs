//! Check evaluators.
//!
//! Each check resolves its target through a [`TelemetrySource`], classifies
//! what it finds and returns a [`Findings`] set. Errors abort the check and
//! are reported as UNKNOWN by [`run_check`].

mod general_health;
mod installed;
mod psu;
mod target;
mod thermal;
mod voltages;

pub use general_health::check_general_health;
pub use installed::{check_installed, InstalledComponent, CPUS, MEMORY};
pub use psu::{check_psu, RedundancyThresholds};
pub use target::{resolve_chassis, resolve_system, CheckTarget, Resolved};
pub use thermal::check_thermal;
pub use voltages::check_voltages;

use log::{debug, warn};

use super::severity::Findings;
use crate::error::Result;
use crate::redfish::TelemetrySource;

/// The check selected for one plugin run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    GeneralHealth,
    /// Expected number of CPUs
    InstalledCpus(u64),
    /// Expected memory in GiB
    InstalledMemory(u64),
    Psu(RedundancyThresholds),
    Thermal,
    Voltages,
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::GeneralHealth => "general health",
            CheckKind::InstalledCpus(_) => "installed CPUs",
            CheckKind::InstalledMemory(_) => "installed memory",
            CheckKind::Psu(_) => "power supplies",
            CheckKind::Thermal => "thermal",
            CheckKind::Voltages => "voltages",
        }
    }
}

/// Run the selected check without reporting errors.
pub fn evaluate(
    source: &dyn TelemetrySource,
    kind: CheckKind,
    target: &CheckTarget,
) -> Result<Findings> {
    let system_id = target.system_id.as_deref();
    let chassis_id = target.chassis_id.as_deref();

    match kind {
        CheckKind::GeneralHealth => check_general_health(source, system_id),
        CheckKind::InstalledCpus(expected) => check_installed(source, system_id, &CPUS, expected),
        CheckKind::InstalledMemory(expected) => {
            check_installed(source, system_id, &MEMORY, expected)
        }
        CheckKind::Psu(thresholds) => check_psu(source, chassis_id, thresholds),
        CheckKind::Thermal => check_thermal(source, chassis_id),
        CheckKind::Voltages => check_voltages(source, chassis_id),
    }
}

/// Run the selected check; a failed check becomes a single UNKNOWN finding
/// carrying the error text.
pub fn run_check(source: &dyn TelemetrySource, kind: CheckKind, target: &CheckTarget) -> Findings {
    debug!("Running {} check", kind.name());
    match evaluate(source, kind, target) {
        Ok(findings) => findings,
        Err(err) => {
            warn!("{} check failed: {}", kind.name(), err);
            err.into()
        }
    }
}
