//! Normalization of Redfish `Status.State` / `Status.Health` values.
//!
//! The schema defines the enumerations in CamelCase, but boards return them
//! all-uppercase, all-lowercase or with non-standard extras. Every table here
//! compares lower-cased values.

/// What a check should do with a component given its reported state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateClass {
    /// Component is active; read its health
    Proceed,
    /// Component is not present or not relevant; ignore it
    Skip,
    /// State outside the accepted vocabulary, carrying the reported value
    Unknown(String),
}

/// Resource class whose state vocabulary is being interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass {
    System,
    PowerSupply,
    TemperatureSensor,
    VoltageSensor,
}

const POWER_SUPPLY_ACTIVE_STATES: &[&str] = &[
    "enabled",
    "standbyspare",
    "quiesced",
    "standbyoffline",
    "intest",
    "disabled",
    "starting",
    "deferring",
    "updating",
    "unavailableoffline",
];

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Classify a reported state for the given resource class.
pub fn classify_state(class: ResourceClass, state: Option<&str>) -> StateClass {
    let reported = non_empty(state);
    let lowered = reported.map(str::to_lowercase);

    match (class, lowered.as_deref()) {
        (_, Some("enabled")) => StateClass::Proceed,
        (ResourceClass::System, _) => StateClass::Unknown(reported.unwrap_or_default().to_string()),
        (ResourceClass::PowerSupply, None) | (ResourceClass::PowerSupply, Some("absent")) => {
            StateClass::Skip
        }
        (ResourceClass::PowerSupply, Some(s)) if POWER_SUPPLY_ACTIVE_STATES.contains(&s) => {
            StateClass::Proceed
        }
        (ResourceClass::PowerSupply, Some(_)) => {
            StateClass::Unknown(reported.unwrap_or_default().to_string())
        }
        // sensors routinely report "Disabled"
        (ResourceClass::TemperatureSensor | ResourceClass::VoltageSensor, _) => StateClass::Skip,
    }
}

/// Reported health of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    Ok,
    Warning,
    Critical,
    /// Health attribute absent or empty
    Missing,
    /// Value outside the accepted vocabulary, carrying the reported value
    Unrecognized(String),
}

/// Classify a health value using the standard `OK/Warning/Critical`
/// vocabulary.
pub fn classify_health(health: Option<&str>) -> Health {
    let Some(reported) = non_empty(health) else {
        return Health::Missing;
    };
    match reported.to_lowercase().as_str() {
        "ok" => Health::Ok,
        "warning" => Health::Warning,
        "critical" => Health::Critical,
        _ => Health::Unrecognized(reported.to_string()),
    }
}

/// Health of a whole system. Some boards report `Failed`, which is accepted as
/// critical.
pub fn classify_system_health(health: Option<&str>) -> Health {
    match health {
        Some(h) if h.eq_ignore_ascii_case("failed") => Health::Critical,
        _ => classify_health(health),
    }
}
