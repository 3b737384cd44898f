use clap::error::ErrorKind;
use std::process;

use check_redfish::commands::{self, build_cli};
use check_redfish::Severity;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => Severity::Unknown.exit_code(),
            };
            process::exit(code);
        }
    };

    check_redfish::init_logging(matches.get_count("verbose"));

    match commands::check::execute(&matches) {
        Ok(severity) => process::exit(severity.exit_code()),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            process::exit(Severity::Unknown.exit_code());
        }
    }
}
