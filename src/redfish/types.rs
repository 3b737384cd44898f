use serde::Deserialize;

/// Link to another resource (`{"@odata.id": "/redfish/v1/..."}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: Option<String>,
}

/// Resource collection, only the member links are used
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Collection {
    #[serde(default)]
    pub members: Vec<Link>,
}

/// `Status` object shared by all resources
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRoot {
    #[serde(default)]
    pub systems: Option<Link>,
    #[serde(default)]
    pub chassis: Option<Link>,
    #[serde(default)]
    pub links: Option<ServiceRootLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootLinks {
    #[serde(default)]
    pub sessions: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub processor_summary: Option<ProcessorSummary>,
    #[serde(default)]
    pub memory_summary: Option<MemorySummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorSummary {
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySummary {
    #[serde(rename = "TotalSystemMemoryGiB", default)]
    pub total_system_memory_gib: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub power: Option<Link>,
    #[serde(default)]
    pub thermal: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerData {
    #[serde(default)]
    pub power_supplies: Vec<PowerSupply>,
    #[serde(default)]
    pub voltages: Vec<Voltage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerSupply {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub last_power_output_watts: Option<f64>,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
    #[serde(default)]
    pub line_input_voltage: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voltage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub reading_volts: Option<f64>,
    #[serde(default)]
    pub min_reading_range: Option<f64>,
    #[serde(default)]
    pub max_reading_range: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThermalData {
    #[serde(default)]
    pub temperatures: Vec<Temperature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Temperature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub reading_celsius: Option<f64>,
    #[serde(default)]
    pub min_reading_range_temp: Option<f64>,
    #[serde(default)]
    pub max_reading_range_temp: Option<f64>,
    #[serde(default)]
    pub upper_threshold_non_critical: Option<f64>,
    #[serde(default)]
    pub upper_threshold_critical: Option<f64>,
}
