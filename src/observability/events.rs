//! Observable events
//!
//! Every log line the service writes names one of these events.

use std::fmt;

/// Observable events in showdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved from file, environment and flags
    ConfigLoaded,
    /// Datastore populated from a fixture
    StoreSeeded,
    /// Listener bound, serving requests
    ServerListening,
    /// Startup could not complete
    BootFailed,
    /// Server stopped after a shutdown signal
    ShutdownComplete,

    // Requests
    /// One HTTP request served
    HttpRequest,
    /// Request answered with a 4xx envelope
    RequestRejected,
    /// Request failed with a 5xx envelope
    RequestFailed,

    // Shows
    /// Show record created
    ShowCreated,
    /// Show record updated
    ShowUpdated,
    /// Show record deleted
    ShowDeleted,
}

impl Event {
    /// Returns the event name written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::BootFailed => "BOOT_FAILED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::HttpRequest => "HTTP_REQUEST",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::ShowCreated => "SHOW_CREATED",
            Event::ShowUpdated => "SHOW_UPDATED",
            Event::ShowDeleted => "SHOW_DELETED",
        }
    }

    /// Whether this event means the process is going down
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
