use std::{io, path::PathBuf};
use thiserror::Error;


#[derive(Debug, Error)]
/// Unexpected problems met while reading the report
pub enum ReportError {
    /// Report file is missing or unreadable
    #[error("Can't open the JSON file: {path}. Details: {source}")]
    FileAccess {
        /// Report file path
        path: PathBuf,

        /// I/O failure
        #[source]
        source: io::Error,
    },

    /// Report file isn't a valid certificate expiry report
    #[error("Can't unmarshall JSON file: {path}. Details: {source}")]
    Decode {
        /// Report file path
        path: PathBuf,

        /// Decoder failure
        #[source]
        source: serde_json::Error,
    },

    /// Report metadata carries an unexpected timestamp. Never fatal.
    #[error("Can't parse report timestamp: '{value}'. Details: {source}")]
    Timestamp {
        /// Raw timestamp
        value: String,

        /// Parser failure
        #[source]
        source: chrono::ParseError,
    },
}
