use crate::{products::unexpected::ReportError, report::CertExpiryReport};
use std::{fs, path::Path};
use tracing::debug;


/// Read whole report file
pub fn read_report_file(path: &Path) -> Result<Vec<u8>, ReportError> {
    fs::read(path).map_err(|source| {
        ReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    })
}


/// Decode report from JSON bytes
pub fn decode_report(path: &Path, bytes: &[u8]) -> Result<CertExpiryReport, ReportError> {
    serde_json::from_slice(bytes).map_err(|source| {
        ReportError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })
}


/// Load certificate expiry report from file
pub fn load_report(path: &Path) -> Result<CertExpiryReport, ReportError> {
    read_report_file(path).and_then(|bytes| {
        debug!("Read {} bytes from: {}", bytes.len(), path.display());
        decode_report(path, &bytes)
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;


    fn report_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }


    #[test]
    fn test_load_report_from_file() {
        let file = report_file(
            r#"{"data": {"cluster-a": {"etcd": [{"cert_cn": "etcd-peer", "days_remaining": 10}]}},
                "summary": {"expired": 0, "ok": 0, "total": 1, "warning": 1}}"#,
        );
        let report = load_report(file.path()).unwrap();
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.data["cluster-a"].etcd[0].days_remaining, 10);
        assert_eq!(report.summary.warning, 1);
    }


    #[test]
    fn test_load_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("cert-expiry-report.json");
        match load_report(&missing) {
            Err(ReportError::FileAccess { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected FileAccess error, got: {:?}", other),
        }
    }


    #[test]
    fn test_load_report_truncated_json() {
        let file = report_file(r#"{"data": {"cluster-a": {"etcd": [{"cert_cn": "#);
        assert!(matches!(
            load_report(file.path()),
            Err(ReportError::Decode { .. })
        ));
    }


    #[test]
    fn test_load_report_type_mismatch() {
        let file = report_file(r#"{"data": {"cluster-a": {"etcd": [{"days_remaining": "ten"}]}}}"#);
        assert!(matches!(
            load_report(file.path()),
            Err(ReportError::Decode { .. })
        ));
    }


    #[test]
    fn test_decode_empty_input_fails() {
        assert!(decode_report(Path::new("empty.json"), b"").is_err());
    }
}
