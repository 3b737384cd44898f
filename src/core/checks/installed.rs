//! Installed CPU count and memory size checks.
//!
//! Both compare one number from the system record with an expected value; a
//! missing summary or a reported zero means the board did not report it.

use crate::core::severity::{Findings, Severity};
use crate::error::{CheckError, Result};
use crate::redfish::{SystemData, TelemetrySource};

use super::target::resolve_system;

/// Which installed quantity to compare and how to describe it
pub struct InstalledComponent {
    /// Redfish object holding the value, e.g. `ProcessorSummary`
    pub summary: &'static str,
    /// Property inside the summary, e.g. `Count`
    pub field: &'static str,
    /// `None` if the summary object is missing; a missing value reads as 0
    pub read: fn(&SystemData) -> Option<u64>,
    /// Human readable quantity, e.g. `4 CPUs`
    pub describe: fn(u64) -> String,
}

fn cpu_count(system: &SystemData) -> Option<u64> {
    system
        .processor_summary
        .as_ref()
        .map(|summary| summary.count.unwrap_or(0))
}

fn memory_gib(system: &SystemData) -> Option<u64> {
    system.memory_summary.as_ref().map(|summary| {
        summary
            .total_system_memory_gib
            .filter(|gib| *gib > 0.0)
            .map_or(0, |gib| gib.trunc() as u64)
    })
}

fn describe_cpus(n: u64) -> String {
    format!("{} CPUs", n)
}

fn describe_memory(n: u64) -> String {
    format!("{} GiB of memory", n)
}

pub const CPUS: InstalledComponent = InstalledComponent {
    summary: "ProcessorSummary",
    field: "Count",
    read: cpu_count,
    describe: describe_cpus,
};

pub const MEMORY: InstalledComponent = InstalledComponent {
    summary: "MemorySummary",
    field: "TotalSystemMemoryGiB",
    read: memory_gib,
    describe: describe_memory,
};

/// Compare an installed quantity against the expected value.
pub fn check_installed(
    source: &dyn TelemetrySource,
    system_id: Option<&str>,
    component: &InstalledComponent,
    expected: u64,
) -> Result<Findings> {
    let system = resolve_system(source, system_id)?;
    let installed = (component.read)(&system.data).ok_or_else(|| {
        CheckError::data(format!(
            "No {} data found for system with ID {}",
            component.summary, system.id
        ))
    })?;

    compare_installed(component, installed, expected, &system.id)
}

fn compare_installed(
    component: &InstalledComponent,
    installed: u64,
    expected: u64,
    system_id: &str,
) -> Result<Findings> {
    if installed == 0 {
        return Err(CheckError::data(format!(
            "No {} reported in {} data for system with ID {}",
            component.field, component.summary, system_id
        )));
    }

    let mut findings = Findings::new();
    let have = (component.describe)(installed);
    if installed < expected {
        findings.push(
            Severity::Critical,
            format!("Only {} (instead of {}) installed", have, expected),
        );
    } else if installed > expected {
        findings.push(
            Severity::Warning,
            format!("{} (instead of {}) installed", have, expected),
        );
    } else {
        findings.push(Severity::Ok, format!("{} installed", have));
    }
    Ok(findings)
}
