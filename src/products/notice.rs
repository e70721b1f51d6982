use crate::report::Category;
use std::fmt;
use tracing::Level;


/// Alias Type for Vec<Notice>
pub type Notices = Vec<Notice>;


#[derive(Debug, Clone, PartialEq)]
/// Notice produced by checks, to be passed to a Reporter
pub enum Notice {
    /// Certificate observation, classified against the expiry threshold
    Certificate {
        /// Info when at or below threshold, Debug otherwise
        level: Level,

        /// Owning server
        server: String,

        /// Category the entry came from
        category: Category,

        /// Certificate common name
        cn: String,

        /// Days until expiry
        days_remaining: i64,

        /// Expiry date as found in the report
        expiry: String,

        /// Certificate location
        path: String,
    },

    /// Report data of a server is older than a day
    StaleReport {
        /// Server name
        server: String,

        /// Age of the report in days
        days_old: f64,
    },

    /// Report timestamp of a server couldn't be parsed
    UnparsableTimestamp {
        /// Server name
        server: String,

        /// Raw timestamp value
        checked_at: String,

        /// Parser failure details
        reason: String,
    },
}


impl Notice {
    /// Severity of the notice
    pub fn level(&self) -> Level {
        match self {
            Notice::Certificate { level, .. } => *level,
            Notice::StaleReport { .. } => Level::ERROR,
            Notice::UnparsableTimestamp { .. } => Level::WARN,
        }
    }
}


impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Certificate {
                server,
                cn,
                days_remaining,
                expiry,
                path,
                ..
            } => {
                write!(
                    f,
                    "{} days left until {} for {} @ {}: {}",
                    days_remaining, expiry, path, server, cn
                )
            }
            Notice::StaleReport { server, days_old } => {
                write!(f, "Report for {} is {:.1} days old!", server, days_old)
            }
            Notice::UnparsableTimestamp {
                server,
                checked_at,
                reason,
            } => {
                write!(
                    f,
                    "Can't parse checked_at_time: '{}' for {}. Details: {}",
                    checked_at, server, reason
                )
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    impl Notice {
        /// Server the notice is about
        pub(crate) fn server(&self) -> &str {
            match self {
                Notice::Certificate { server, .. }
                | Notice::StaleReport { server, .. }
                | Notice::UnparsableTimestamp { server, .. } => server,
            }
        }


        /// True for certificate notices
        pub(crate) fn is_certificate(&self) -> bool {
            matches!(self, Notice::Certificate { .. })
        }
    }


    #[test]
    fn test_certificate_notice_template() {
        let notice = Notice::Certificate {
            level: Level::INFO,
            server: "cluster-a".to_string(),
            category: Category::Etcd,
            cn: "etcd-peer".to_string(),
            days_remaining: 10,
            expiry: "2025-01-01".to_string(),
            path: "/etc/etcd/peer.crt".to_string(),
        };
        assert_eq!(
            notice.to_string(),
            "10 days left until 2025-01-01 for /etc/etcd/peer.crt @ cluster-a: etcd-peer"
        );
        assert_eq!(notice.level(), Level::INFO);
        assert_eq!(notice.server(), "cluster-a");
        assert!(notice.is_certificate());
    }


    #[test]
    fn test_stale_report_notice_uses_one_decimal() {
        let notice = Notice::StaleReport {
            server: "cluster-a".to_string(),
            days_old: 3.04,
        };
        assert_eq!(notice.to_string(), "Report for cluster-a is 3.0 days old!");
        assert_eq!(notice.level(), Level::ERROR);
        assert!(!notice.is_certificate());
    }


    #[test]
    fn test_unparsable_timestamp_notice_is_a_warning() {
        let notice = Notice::UnparsableTimestamp {
            server: "cluster-b".to_string(),
            checked_at: "not-a-date".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(notice.level(), Level::WARN);
        assert!(notice.to_string().contains("'not-a-date'"));
    }
}
