use crate::{
    checks::{expiry::report_server, staleness::check_staleness},
    config::Config,
    inputs::file::load_report,
    products::unexpected::ReportError,
    report::CertExpiryReport,
    reporter::Reporter,
};
use chrono::NaiveDateTime;
use tracing::debug;


/**
    Public library API for certs-cli
 **/


/// Report all servers of a decoded report: staleness first, then certificates
pub fn process_report<R: Reporter + ?Sized>(
    report: &CertExpiryReport,
    threshold: i64,
    now: NaiveDateTime,
    reporter: &mut R,
) {
    let summary = &report.summary;
    debug!(
        "Report summary: total: {}, ok: {}, warning: {}, expired: {}",
        summary.total, summary.ok, summary.warning, summary.expired
    );
    for (server_name, server) in &report.data {
        debug!(
            "Processing {} certificates of: {}",
            server.length(),
            server_name
        );
        check_staleness(server_name, &server.meta, now, reporter);
        report_server(server_name, server, threshold, reporter);
    }
}


/// Load report defined by config and report it
pub fn run<R: Reporter + ?Sized>(
    config: &Config,
    now: NaiveDateTime,
    reporter: &mut R,
) -> Result<(), ReportError> {
    debug!(
        "Parsing JSON @ {}. Expiry is set to {} days.",
        config.file.display(),
        config.expiry
    );
    let report = load_report(&config.file)?;
    process_report(&report, config.expiry, now, reporter);
    Ok(())
}
