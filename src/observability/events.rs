//! Observable events
//!
//! Events are explicit and typed. Each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events of a store invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Backing file opened (or created)
    StoreOpened,
    /// Backing file decoded
    RecordsLoaded,
    /// Backing file rewritten
    StorePersisted,

    /// User appended
    RecordAdded,
    /// Add rejected, id already present
    RecordDuplicate,
    /// Lookup matched
    RecordFound,
    /// Lookup or removal had no match
    RecordNotFound,
    /// User removed
    RecordRemoved,
    /// Collection written to output
    RecordsListed,

    /// Invocation aborted with an error
    OperationFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreOpened => "STORE_OPENED",
            Event::RecordsLoaded => "RECORDS_LOADED",
            Event::StorePersisted => "STORE_PERSISTED",
            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordDuplicate => "RECORD_DUPLICATE",
            Event::RecordFound => "RECORD_FOUND",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::RecordRemoved => "RECORD_REMOVED",
            Event::RecordsListed => "RECORDS_LISTED",
            Event::OperationFailed => "OPERATION_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreOpened | Event::RecordsLoaded | Event::StorePersisted => Severity::Trace,
            Event::OperationFailed => Severity::Fatal,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::RecordAdded.as_str(), "RECORD_ADDED");
        assert_eq!(Event::RecordNotFound.to_string(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_only_failure_is_fatal() {
        assert!(Event::OperationFailed.is_fatal());
        assert!(!Event::RecordDuplicate.is_fatal());
        assert!(!Event::StorePersisted.is_fatal());
    }
}
