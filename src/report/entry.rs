use crate::report::null_as_default;
use serde::Deserialize;


#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
/// Certificate observation as reported by the playbook
pub struct CertEntry {
    /// Certificate common name
    #[serde(deserialize_with = "null_as_default")]
    pub cert_cn: String,

    /// Days until expiry (negative when already expired)
    #[serde(deserialize_with = "null_as_default")]
    pub days_remaining: i64,

    /// Expiry date, free-form as found in the report
    #[serde(deserialize_with = "null_as_default")]
    pub expiry: String,

    /// Health label: "ok", "warning", "expired"
    #[serde(deserialize_with = "null_as_default")]
    pub health: String,

    /// Certificate location on the server
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,

    /// Serial number
    #[serde(deserialize_with = "null_as_default")]
    pub serial: f64,

    /// Serial number (hex)
    #[serde(deserialize_with = "null_as_default")]
    pub serial_hex: String,
}


/// CertEntry list type
pub type CertEntries = Vec<CertEntry>;
