// Command handlers module
pub mod check;

use clap::{Arg, ArgAction, ArgGroup, Command};

use crate::core::RedundancyThresholds;

/// Command line definition of the plugin
pub fn build_cli() -> Command {
    Command::new("check_redfish")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check hardware health of a server through its Redfish management board")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Hostname or IP address of management board")
                .required(true),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port to connect to (default: HTTPS port)")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .value_name("USER")
                .help("Username for authentication")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .value_name("PASSWORD")
                .help("Password for authentication")
                .required_unless_present("password-file")
                .conflicts_with("password-file"),
        )
        .arg(
            Arg::new("password-file")
                .long("password-file")
                .value_name("FILE")
                .help("Read password from the first line of FILE"),
        )
        .arg(
            Arg::new("insecure-ssl")
                .long("insecure-ssl")
                .help("Don't verify SSL certificate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Connection timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("60"),
        )
        .arg(
            Arg::new("chassis-id")
                .long("chassis-id")
                .value_name("ID")
                .help("Check specific chassis (default: first chassis reported)"),
        )
        .arg(
            Arg::new("system-id")
                .long("system-id")
                .value_name("ID")
                .help("Check specific system (default: first system reported)"),
        )
        .arg(
            Arg::new("check-general-health")
                .long("check-general-health")
                .help("Check general health (default when no check is requested)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-installed-cpus")
                .long("check-installed-cpus")
                .value_name("CPUS")
                .help("Check number of installed CPUs")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("check-installed-memory")
                .long("check-installed-memory")
                .value_name("GIB")
                .help("Check that GIB GiB of memory are installed")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("check-psu")
                .long("check-psu")
                .value_name("WARN,CRIT")
                .help("Check power supplies, report warning/critical if fewer than WARN/CRIT are working")
                .value_parser(|s: &str| s.parse::<RedundancyThresholds>()),
        )
        .arg(
            Arg::new("check-thermal")
                .long("check-thermal")
                .help("Check thermal sensors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-voltages")
                .long("check-voltages")
                .help("Check voltage sensors")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("check")
                .args([
                    "check-general-health",
                    "check-installed-cpus",
                    "check-installed-memory",
                    "check-psu",
                    "check-thermal",
                    "check-voltages",
                ])
                .multiple(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log to stderr, repeat for more detail")
                .action(ArgAction::Count),
        )
}
