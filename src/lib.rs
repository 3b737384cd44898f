// check_redfish library - Public API

// Re-export error types
pub mod error;
pub use error::{CheckError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod redfish;
pub mod ui;

// Re-export commonly used types
pub use core::{CheckKind, CheckTarget, Findings, Severity};
pub use redfish::TelemetrySource;

/// Initialize logging to stderr. The default level is `warn`; each `-v`
/// raises it by one step. `RUST_LOG` still applies when no `-v` is given.
pub fn init_logging(verbosity: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let level = match verbosity {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.target(env_logger::Target::Stderr).init();
}
