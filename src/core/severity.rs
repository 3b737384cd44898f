//! Severity model shared by every check.
//!
//! A check collects its observations into a [`Findings`] set, one ordered
//! bucket per severity, and [`Findings::combine`] folds the set into the single
//! outcome reported to the monitoring system.

use std::fmt;

use crate::error::CheckError;

/// Nagios/Icinga service state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Plugin exit code expected by Nagios/Icinga
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const NO_RESULTS: &str = "No results at all found";

/// Messages and perfdata produced by one check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub critical: Vec<String>,
    pub warning: Vec<String>,
    pub ok: Vec<String>,
    pub unknown: Vec<String>,
    pub perf_data: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings of a check that could not complete
    pub fn failed<S: Into<String>>(msg: S) -> Self {
        let mut findings = Self::new();
        findings.push(Severity::Unknown, msg);
        findings
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<String> {
        match severity {
            Severity::Ok => &mut self.ok,
            Severity::Warning => &mut self.warning,
            Severity::Critical => &mut self.critical,
            Severity::Unknown => &mut self.unknown,
        }
    }

    pub fn bucket(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Ok => &self.ok,
            Severity::Warning => &self.warning,
            Severity::Critical => &self.critical,
            Severity::Unknown => &self.unknown,
        }
    }

    pub fn push<S: Into<String>>(&mut self, severity: Severity, msg: S) {
        self.bucket_mut(severity).push(msg.into());
    }

    /// Insert a message so it renders first within its bucket.
    pub fn prepend<S: Into<String>>(&mut self, severity: Severity, msg: S) {
        self.bucket_mut(severity).insert(0, msg.into());
    }

    pub fn push_perf_data(&mut self, token: String) {
        self.perf_data.push(token);
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty()
            && self.warning.is_empty()
            && self.ok.is_empty()
            && self.unknown.is_empty()
    }

    /// Fold all buckets into the overall outcome and its message.
    ///
    /// The highest non-empty bucket (`unknown > critical > warning > ok`) wins.
    /// The message lists that bucket and every lower one, messages joined by
    /// `", "` and buckets by `"; "`.
    pub fn combine(&self) -> (Severity, String) {
        const PRECEDENCE: [Severity; 4] = [
            Severity::Unknown,
            Severity::Critical,
            Severity::Warning,
            Severity::Ok,
        ];

        let Some(start) = PRECEDENCE
            .iter()
            .position(|&severity| !self.bucket(severity).is_empty())
        else {
            return (Severity::Unknown, NO_RESULTS.to_string());
        };

        let message = PRECEDENCE[start..]
            .iter()
            .map(|&severity| self.bucket(severity))
            .filter(|bucket| !bucket.is_empty())
            .map(|bucket| bucket.join(", "))
            .collect::<Vec<_>>()
            .join("; ");

        (PRECEDENCE[start], message)
    }
}

impl From<CheckError> for Findings {
    fn from(err: CheckError) -> Self {
        Findings::failed(err.to_string())
    }
}
