use crate::{
    config::Config,
    configuration::{LOG_TIME_FORMAT, SYSLOG_SOCKET},
};
use chrono::Local;
use std::{fmt, io, path::Path};
use tracing::warn;
use tracing_subscriber::{
    fmt::{format::Writer, layer, time::FormatTime},
    prelude::*,
    registry,
    util::TryInitError,
};


/// Secondary sink for log lines
#[cfg(unix)]
pub type Mirror = crate::syslog::Syslog;

/// Secondary sink for log lines
#[cfg(not(unix))]
pub type Mirror = fn() -> io::Sink;


#[derive(Debug, Copy, Clone, Default)]
/// Local time of day for log lines (HH:MM:SS.mmm)
pub struct LocalTimeOnly;


impl FormatTime for LocalTimeOnly {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(LOG_TIME_FORMAT))
    }
}


/// Connect secondary sink. Only in debug mode.
#[cfg(unix)]
pub fn connect_mirror(
    config: &Config,
    socket_path: &Path,
) -> (Option<Mirror>, Option<io::Error>) {
    if !config.debug {
        return (None, None);
    }
    match Mirror::connect_to(socket_path) {
        Ok(syslog) => (Some(syslog), None),
        Err(err) => (None, Some(err)),
    }
}


/// Connect secondary sink. Not available on this platform.
#[cfg(not(unix))]
pub fn connect_mirror(
    _config: &Config,
    _socket_path: &Path,
) -> (Option<Mirror>, Option<io::Error>) {
    (None, None)
}


/// Warning logged when syslog can't be used
pub fn mirror_problem_message(err: &io::Error) -> String {
    format!("Wasn't able to initialize syslog. Details: {}", err)
}


/// Initialize logger: stdout, plus syslog in debug mode
pub fn setup_logger(config: &Config) -> Result<(), TryInitError> {
    let level = config.log_level();
    let (mirror, mirror_problem) = connect_mirror(config, Path::new(SYSLOG_SOCKET));

    let stdout_layer = layer()
        .with_target(false)
        .with_timer(LocalTimeOnly)
        .with_writer(io::stdout)
        .with_filter(level);

    let mirror_layer = mirror.map(|writer| {
        layer()
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .with_writer(writer)
            .with_filter(level)
    });

    registry()
        .with(stdout_layer)
        .with(mirror_layer)
        .try_init()?;

    if let Some(err) = mirror_problem {
        warn!("{}", mirror_problem_message(&err));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_local_time_only_format() {
        let mut line = String::new();
        LocalTimeOnly.format_time(&mut Writer::new(&mut line)).unwrap();
        // HH:MM:SS.mmm
        assert_eq!(line.len(), 12);
        assert_eq!(&line[2..3], ":");
        assert_eq!(&line[8..9], ".");
    }


    #[test]
    fn test_no_mirror_without_debug() {
        let (mirror, problem) = connect_mirror(&Config::default(), Path::new(SYSLOG_SOCKET));
        assert!(mirror.is_none());
        assert!(problem.is_none());
    }


    #[cfg(unix)]
    #[test]
    fn test_unavailable_syslog_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            debug: true,
            ..Config::default()
        };
        let (mirror, problem) = connect_mirror(&config, &dir.path().join("no-syslog-here"));
        assert!(mirror.is_none());
        let problem = problem.expect("missing socket should be reported");
        assert!(mirror_problem_message(&problem).starts_with("Wasn't able to initialize syslog."));
    }


    #[cfg(unix)]
    #[test]
    fn test_mirror_connects_in_debug_mode() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("log");
        let _listener = std::os::unix::net::UnixDatagram::bind(&socket_path).unwrap();
        let config = Config {
            debug: true,
            ..Config::default()
        };
        let (mirror, problem) = connect_mirror(&config, &socket_path);
        assert!(mirror.is_some());
        assert!(problem.is_none());
    }
}
