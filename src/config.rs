use crate::configuration::{DEFAULT_EXPIRY_DAYS, DEFAULT_REPORT_FILE};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;


#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "certs-cli",
    version,
    about = "This cli parses 'cert-expiry-report.json' and outputs expired certs.",
    long_about = "OpenShift uses SSL certificates for encrypting communication between its components. \
It's crucial to monitor their expiry date and renew them as needed. The JSON file cert-expiry-report.json \
is generated via /usr/share/ansible/openshift-ansible/playbooks/certificate_expiry/easy-mode.yaml."
)]
/// Runtime configuration of certs-cli, built once at startup
pub struct Config {
    /// Location of the JSON file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_REPORT_FILE)]
    pub file: PathBuf,

    /// Number of days left before cert expires
    #[arg(short, long, value_name = "DAYS", default_value_t = DEFAULT_EXPIRY_DAYS, allow_negative_numbers = true)]
    pub expiry: i64,

    /// Print debug messages (also mirrored to syslog)
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}


impl Default for Config {
    fn default() -> Config {
        Config {
            file: PathBuf::from(DEFAULT_REPORT_FILE),
            expiry: DEFAULT_EXPIRY_DAYS,
            debug: false,
        }
    }
}


impl Config {
    /// Get LevelFilter (log level) from configuration
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}
