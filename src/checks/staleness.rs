use crate::{
    configuration::{CHECKED_AT_FORMAT, STALE_REPORT_HOURS},
    products::{notice::Notice, unexpected::ReportError},
    report::ServerMeta,
    reporter::Reporter,
};
use chrono::{Duration, NaiveDateTime};
use std::error::Error;
use tracing::debug;


/// Parse "checked_at_time" of report metadata
pub fn parse_checked_at(value: &str) -> Result<NaiveDateTime, ReportError> {
    NaiveDateTime::parse_from_str(value, CHECKED_AT_FORMAT).map_err(|source| {
        ReportError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}


/// Age of the report in days, or None when fresh
pub fn stale_days(checked_at: NaiveDateTime, now: NaiveDateTime) -> Option<f64> {
    let age = now - checked_at;
    if age > Duration::hours(STALE_REPORT_HOURS) {
        Some(age.num_seconds() as f64 / 86_400.0)
    } else {
        None
    }
}


/// Check if report data of given server is fresh. Never fatal.
pub fn check_staleness<R: Reporter + ?Sized>(
    server: &str,
    meta: &ServerMeta,
    now: NaiveDateTime,
    reporter: &mut R,
) {
    match parse_checked_at(&meta.checked_at_time) {
        Ok(checked_at) => {
            match stale_days(checked_at, now) {
                Some(days_old) => {
                    reporter.report(Notice::StaleReport {
                        server: server.to_string(),
                        days_old,
                    })
                }
                None => debug!("Report for {} checked at: {}", server, checked_at),
            }
        }
        Err(err) => {
            reporter.report(Notice::UnparsableTimestamp {
                server: server.to_string(),
                checked_at: meta.checked_at_time.clone(),
                reason: err
                    .source()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| err.to_string()),
            })
        }
    }
}
