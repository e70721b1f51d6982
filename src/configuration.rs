//
// Default configuration and default values:
//


/// Default location of the report produced by the certificate_expiry playbook:
pub const DEFAULT_REPORT_FILE: &str = "/tmp/cert-expiry-report.json";

/// Default expiry threshold in days:
pub const DEFAULT_EXPIRY_DAYS: i64 = 90;


/// Layout of the "checked_at_time" field of the report metadata
pub const CHECKED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Report older than this amount of hours is considered stale
pub const STALE_REPORT_HOURS: i64 = 24;


/// Log line timestamp format
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Syslog identity
pub const SYSLOG_IDENT: &str = "openshift-monitoring-cli";

/// Local syslog socket
pub const SYSLOG_SOCKET: &str = "/dev/log";

/// Syslog facility: "user"
pub const SYSLOG_FACILITY: u8 = 1;
