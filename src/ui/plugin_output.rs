use crate::core::{Findings, Severity};

/// Render findings as the single plugin output line:
/// `<message>` or `<message> | <perfdata> <perfdata> ...`
pub fn format_plugin_output(findings: &Findings) -> (Severity, String) {
    let (severity, message) = findings.combine();

    if findings.perf_data.is_empty() {
        (severity, message)
    } else {
        let line = format!("{} | {}", message, findings.perf_data.join(" "));
        (severity, line)
    }
}
