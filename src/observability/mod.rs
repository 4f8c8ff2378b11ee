//! Observability for userstore
//!
//! Structured JSON logging of typed events to stderr.
//!
//! ```ignore
//! use userstore::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordAdded, &[("id", "1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a typed event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a typed event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Only verifies no panic
        log_event(Event::StoreOpened);
        log_event_with_fields(Event::RecordRemoved, &[("id", "3")]);
    }
}
