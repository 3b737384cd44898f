// Core evaluation logic

pub mod checks;
pub mod perfdata;
pub mod severity;
pub mod status;

// Re-export commonly used items
pub use checks::{run_check, CheckKind, CheckTarget, RedundancyThresholds};
pub use perfdata::PerfData;
pub use severity::{Findings, Severity};
