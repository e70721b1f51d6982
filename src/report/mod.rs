/// Single certificate entry:
pub mod entry;

/// Per server inventory:
pub mod server;


pub use crate::report::{entry::*, server::*};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;


/// Servers keyed by name. Sorted, so reports come out in stable order.
pub type Servers = BTreeMap<String, ServerReport>;


#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
/// Whole "cert-expiry-report.json" document
pub struct CertExpiryReport {
    /// Inventory of each monitored server
    #[serde(deserialize_with = "null_servers_as_empty")]
    pub data: Servers,

    /// Counters as calculated by the report generator
    #[serde(deserialize_with = "null_as_default")]
    pub summary: Summary,
}


#[derive(Debug, Copy, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
/// Report summary. Carried as is, never recomputed from entries.
pub struct Summary {
    /// Number of expired certificates
    #[serde(deserialize_with = "null_as_default")]
    pub expired: i64,

    /// Number of healthy certificates
    #[serde(deserialize_with = "null_as_default")]
    pub ok: i64,

    /// Number of all certificates
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,

    /// Number of certificates in warning window
    #[serde(deserialize_with = "null_as_default")]
    pub warning: i64,
}


/// Treat explicit JSON null the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}


/// Null server inventory is an empty one
fn null_servers_as_empty<'de, D>(deserializer: D) -> Result<Servers, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeMap<String, Option<ServerReport>>>::deserialize(deserializer).map(|servers| {
        servers
            .unwrap_or_default()
            .into_iter()
            .map(|(name, server)| (name, server.unwrap_or_default()))
            .collect()
    })
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_report_with_missing_sections_decodes_to_defaults() {
        let report: CertExpiryReport = serde_json::from_str("{}").unwrap();
        assert!(report.data.is_empty());
        assert_eq!(report.summary, Summary::default());
    }


    #[test]
    fn test_report_null_data_is_empty() {
        let report: CertExpiryReport =
            serde_json::from_str(r#"{"data": null, "summary": {"total": 3}}"#).unwrap();
        assert!(report.data.is_empty());
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.expired, 0);
    }


    #[test]
    fn test_report_null_summary_and_counters_are_zero() {
        let report: CertExpiryReport =
            serde_json::from_str(r#"{"data": {}, "summary": null}"#).unwrap();
        assert_eq!(report.summary, Summary::default());

        let report: CertExpiryReport = serde_json::from_str(
            r#"{"summary": {"expired": null, "ok": 2, "total": null, "warning": 1}}"#,
        )
        .unwrap();
        assert_eq!(
            report.summary,
            Summary {
                expired: 0,
                ok: 2,
                total: 0,
                warning: 1,
            }
        );
    }


    #[test]
    fn test_report_null_server_is_empty() {
        let report: CertExpiryReport =
            serde_json::from_str(r#"{"data": {"cluster-a": null}}"#).unwrap();
        assert_eq!(report.data["cluster-a"], ServerReport::default());
    }


    #[test]
    fn test_report_servers_are_sorted_by_name() {
        let report: CertExpiryReport = serde_json::from_str(
            r#"{"data": {"node-b": {}, "master-a": {}, "infra-c": {}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = report.data.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["infra-c", "master-a", "node-b"]);
    }


    #[test]
    fn test_report_summary_with_wrong_type_fails() {
        let result =
            serde_json::from_str::<CertExpiryReport>(r#"{"summary": {"total": "many"}}"#);
        assert!(result.is_err());
    }
}
