use crate::products::notice::{Notice, Notices};
use tracing::{debug, error, info, trace, warn, Level};


/// Reporter receives every Notice produced by checks
pub trait Reporter {
    /// Report single notice
    fn report(&mut self, notice: Notice);
}


/// Collects notices in memory (handy for tests and library users)
impl Reporter for Notices {
    fn report(&mut self, notice: Notice) {
        self.push(notice);
    }
}


#[derive(Debug, Copy, Clone, Default)]
/// Reporter writing notices as tracing events
pub struct TracingReporter;


impl Reporter for TracingReporter {
    fn report(&mut self, notice: Notice) {
        match &notice {
            Notice::Certificate {
                level,
                server,
                category,
                cn,
                days_remaining,
                expiry,
                path,
            } => {
                macro_rules! certificate {
                    ($event:ident) => {
                        $event!(
                            %server,
                            %category,
                            %path,
                            %cn,
                            days_remaining,
                            %expiry,
                            "{}",
                            notice
                        )
                    };
                }
                if *level == Level::ERROR {
                    certificate!(error)
                } else if *level == Level::WARN {
                    certificate!(warn)
                } else if *level == Level::INFO {
                    certificate!(info)
                } else if *level == Level::DEBUG {
                    certificate!(debug)
                } else {
                    certificate!(trace)
                }
            }

            Notice::StaleReport { server, days_old } => {
                error!(%server, days_old, "{}", notice);
            }

            Notice::UnparsableTimestamp {
                server, checked_at, ..
            } => {
                warn!(%server, %checked_at, "{}", notice);
            }
        }
    }
}
