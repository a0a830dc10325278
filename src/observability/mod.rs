//! Observability for showdb
//!
//! Structured JSON logging with typed events.
//!
//! ```ignore
//! use showdb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ShowCreated, &[("id", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, UnknownSeverity};

/// Severity an event is written at
pub fn event_severity(event: Event) -> Severity {
    match event {
        _ if event.is_fatal() => Severity::Fatal,
        Event::RequestFailed => Severity::Error,
        Event::RequestRejected => Severity::Warn,
        Event::ShowCreated | Event::ShowUpdated | Event::ShowDeleted => Severity::Trace,
        _ => Severity::Info,
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severities() {
        assert_eq!(event_severity(Event::BootFailed), Severity::Fatal);
        assert_eq!(event_severity(Event::RequestFailed), Severity::Error);
        assert_eq!(event_severity(Event::RequestRejected), Severity::Warn);
        assert_eq!(event_severity(Event::HttpRequest), Severity::Info);
        assert_eq!(event_severity(Event::ShowDeleted), Severity::Trace);
    }

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "8080")]);
    }
}
