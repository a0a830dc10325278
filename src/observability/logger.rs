//! Structured JSON logger
//!
//! One line per event: `event` first, then `severity`, then the caller's
//! fields sorted by key. Lines below the process-wide minimum severity are
//! dropped before any formatting happens.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-request detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Rejected requests, recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Process cannot continue
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Severity::Trace,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognised severity name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}'")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

static MIN_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Info as u8);

/// Stateless JSON logger writing to stdout (stderr for ERROR and above)
pub struct Logger;

impl Logger {
    /// Set the lowest severity that still gets written
    pub fn set_min_severity(severity: Severity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn min_severity() -> Severity {
        Severity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether a line at `severity` would be written
    pub fn enabled(severity: Severity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !Self::enabled(severity) {
            return;
        }
        let line = format_line(severity, event, fields);
        if severity >= Severity::Error {
            write_line(&mut io::stderr().lock(), &line);
        } else {
            write_line(&mut io::stdout().lock(), &line);
        }
    }
}

/// Render one log line, including the trailing newline
pub(crate) fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let mut line = String::with_capacity(64 + fields.len() * 24);
    line.push_str("{\"event\":");
    push_json_str(&mut line, event);
    line.push_str(",\"severity\":");
    push_json_str(&mut line, severity.as_str());
    for (key, value) in sorted {
        line.push(',');
        push_json_str(&mut line, key);
        line.push(':');
        push_json_str(&mut line, value);
    }
    line.push_str("}\n");
    line
}

fn push_json_str(out: &mut String, s: &str) {
    // Serializing a &str cannot fail
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str("\"\""),
    }
}

fn write_line<W: Write>(writer: &mut W, line: &str) {
    // Logging never takes the process down
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("TRACE".parse::<Severity>().unwrap(), Severity::Trace);
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level 'verbose'");
    }

    #[test]
    fn test_line_is_json_with_event_first() {
        let line = format_line(Severity::Warn, "REQUEST_REJECTED", &[("status", "404")]);
        assert!(line.starts_with("{\"event\":\"REQUEST_REJECTED\",\"severity\":\"WARN\""));
        assert!(line.ends_with("}\n"));

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["status"], "404");
    }

    #[test]
    fn test_fields_sorted() {
        let a = format_line(Severity::Info, "E", &[("path", "/shows"), ("method", "GET")]);
        let b = format_line(Severity::Info, "E", &[("method", "GET"), ("path", "/shows")]);
        assert_eq!(a, b);
        assert!(a.find("method").unwrap() < a.find("path").unwrap());
    }

    #[test]
    fn test_values_escaped() {
        let line = format_line(Severity::Info, "E", &[("name", "say \"hi\"\n")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["name"], "say \"hi\"\n");
        assert_eq!(line.matches('\n').count(), 1);
    }
}
