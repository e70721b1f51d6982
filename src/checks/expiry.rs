use crate::{
    products::notice::Notice,
    report::{Category, CertEntry, ServerReport},
    reporter::Reporter,
};
use tracing::Level;


/// Certificates at or below the threshold are reported on Info level, the rest on Debug
pub fn classify(days_remaining: i64, threshold: i64) -> Level {
    if days_remaining <= threshold {
        Level::INFO
    } else {
        Level::DEBUG
    }
}


/// Build a certificate notice for given entry
pub fn certificate_notice(
    entry: &CertEntry,
    category: Category,
    server: &str,
    threshold: i64,
) -> Notice {
    Notice::Certificate {
        level: classify(entry.days_remaining, threshold),
        server: server.to_string(),
        category,
        cn: entry.cert_cn.clone(),
        days_remaining: entry.days_remaining,
        expiry: entry.expiry.clone(),
        path: entry.path.clone(),
    }
}


/// Report every entry of a single category
pub fn report_category<R: Reporter + ?Sized>(
    entries: &[CertEntry],
    category: Category,
    server: &str,
    threshold: i64,
    reporter: &mut R,
) {
    for entry in entries {
        reporter.report(certificate_notice(entry, category, server, threshold));
    }
}


/// Report all categories of a server, in fixed category order
pub fn report_server<R: Reporter + ?Sized>(
    server_name: &str,
    server: &ServerReport,
    threshold: i64,
    reporter: &mut R,
) {
    for category in Category::ALL {
        report_category(
            server.entries(category),
            category,
            server_name,
            threshold,
            reporter,
        );
    }
}
