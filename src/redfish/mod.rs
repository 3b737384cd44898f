//! Access to Redfish telemetry.
//!
//! Checks only see the [`TelemetrySource`] trait; [`RedfishClient`] is the
//! HTTP implementation used by the plugin.

mod client;
pub mod types;

pub use client::{ConnectionConfig, RedfishClient};
pub use types::{
    ChassisData, Link, MemorySummary, PowerData, PowerSupply, ProcessorSummary, Status,
    SystemData, Temperature, ThermalData, Voltage,
};

use crate::error::Result;

/// Telemetry needed by the checks.
///
/// Identifiers are the resource paths (`@odata.id`) reported by the board.
pub trait TelemetrySource {
    /// Identifiers of all systems, in reported order
    fn systems(&self) -> Result<Vec<String>>;

    fn system(&self, id: &str) -> Result<SystemData>;

    /// Identifiers of all chassis, in reported order
    fn chassis(&self) -> Result<Vec<String>>;

    fn chassis_data(&self, id: &str) -> Result<ChassisData>;

    fn power(&self, id: &str) -> Result<PowerData>;

    fn thermal(&self, id: &str) -> Result<ThermalData>;
}
