use crate::configuration::{SYSLOG_FACILITY, SYSLOG_IDENT};
use std::{
    io::{self, Write},
    os::unix::net::UnixDatagram,
    path::Path,
    process,
    sync::Arc,
};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;


/// Syslog severity of a tracing level
pub fn severity(level: &Level) -> u8 {
    if *level == Level::ERROR {
        3
    } else if *level == Level::WARN {
        4
    } else if *level == Level::INFO {
        6
    } else {
        7
    }
}


#[derive(Debug, Clone)]
/// Local syslog connection, usable as a tracing-subscriber writer
pub struct Syslog {
    socket: Arc<UnixDatagram>,
    ident: String,
}


impl Syslog {
    /// Connect to syslog listening on given socket (usually /dev/log)
    pub fn connect_to(socket_path: &Path) -> io::Result<Syslog> {
        let socket = UnixDatagram::unbound()?;
        socket.connect(socket_path)?;
        Ok(Syslog {
            socket: Arc::new(socket),
            ident: format!("{}[{}]", SYSLOG_IDENT, process::id()),
        })
    }


    fn line(&self, level: &Level) -> SyslogLine<'_> {
        SyslogLine {
            syslog: self,
            priority: SYSLOG_FACILITY * 8 + severity(level),
            buffer: Vec::new(),
        }
    }
}


impl<'a> MakeWriter<'a> for Syslog {
    type Writer = SyslogLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.line(&Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.line(meta.level())
    }
}


#[derive(Debug)]
/// Single formatted event, sent as one datagram when dropped
pub struct SyslogLine<'a> {
    syslog: &'a Syslog,
    priority: u8,
    buffer: Vec<u8>,
}


impl SyslogLine<'_> {
    /// RFC 3164 style message, without timestamp and hostname
    fn datagram(&self) -> Vec<u8> {
        let message = String::from_utf8_lossy(&self.buffer);
        format!(
            "<{}>{}: {}",
            self.priority,
            self.syslog.ident,
            message.trim_end()
        )
        .into_bytes()
    }
}


impl Write for SyslogLine<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}


impl Drop for SyslogLine<'_> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            // syslog unavailable mid-run: nothing to report to
            let _ = self.syslog.socket.send(&self.datagram());
        }
    }
}
