//! Nagios performance data tokens: `label=current;warning;critical;min;max`.

use crate::error::{CheckError, Result};

/// One performance data value. Empty strings mean "not reported".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfData {
    pub label: String,
    pub current: String,
    pub warning: String,
    pub critical: String,
    pub min: String,
    pub max: String,
}

impl PerfData {
    pub fn new<L: Into<String>, C: Into<String>>(label: L, current: C) -> Self {
        Self {
            label: label.into(),
            current: current.into(),
            ..Default::default()
        }
    }

    pub fn with_min<S: Into<String>>(mut self, min: S) -> Self {
        self.min = min.into();
        self
    }

    pub fn with_max<S: Into<String>>(mut self, max: S) -> Self {
        self.max = max.into();
        self
    }

    /// Render the token. All five value positions are always present.
    pub fn format(&self) -> Result<String> {
        if self.label.is_empty() {
            return Err(CheckError::invalid_argument(
                "Performance data label must not be empty",
            ));
        }
        if self.current.is_empty() {
            return Err(CheckError::invalid_argument(format!(
                "No current value for performance data {}",
                self.label
            )));
        }

        Ok(format!(
            "{}={};{};{};{};{}",
            quote_label(&self.label),
            self.current,
            self.warning,
            self.critical,
            self.min,
            self.max
        ))
    }
}

/// Labels with blanks, `=` or quotes must be single-quoted, doubling
/// embedded quotes.
fn quote_label(label: &str) -> String {
    if label
        .chars()
        .any(|c| c.is_whitespace() || c == '=' || c == '\'')
    {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

/// Integer rendering of a reading, truncating any fractional part.
/// Returns an empty string unless the truncated value is positive.
pub fn positive_integer(value: Option<f64>) -> String {
    match value.map(f64::trunc) {
        Some(v) if v >= 1.0 => format!("{}", v as i64),
        _ => String::new(),
    }
}

/// Shortest exact decimal rendering of a reading.
/// Returns an empty string unless the value is positive.
pub fn positive_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{}", v),
        _ => String::new(),
    }
}
