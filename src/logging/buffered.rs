//! In-memory [`Log`] implementation.
use std::sync::Mutex;

use super::types::{LinkEvent, Log};

/// A single buffered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A link event.
    Event(LinkEvent),
    /// An informational message.
    Info(String),
    /// A debug message.
    Debug(String),
}

/// Captures everything reported to it, in order, without printing.
///
/// Useful for library callers that want to inspect the outcome of a run
/// (and for tests).
#[derive(Debug, Default)]
pub struct BufferedLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLog {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(entry);
        }
    }

    /// All entries recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Only the link events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<LinkEvent> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                LogEntry::Event(event) => Some(event),
                LogEntry::Info(_) | LogEntry::Debug(_) => None,
            })
            .collect()
    }
}

impl Log for BufferedLog {
    fn record(&self, event: &LinkEvent) {
        self.push(LogEntry::Event(event.clone()));
    }

    fn info(&self, msg: &str) {
        self.push(LogEntry::Info(msg.to_string()));
    }

    fn debug(&self, msg: &str) {
        self.push(LogEntry::Debug(msg.to_string()));
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn preserves_entry_order() {
        let log = BufferedLog::new();
        log.debug("walking");
        log.record(&LinkEvent::Occupied {
            path: PathBuf::from("/h/.bashrc"),
        });
        log.info("done");
        assert_eq!(
            log.entries(),
            vec![
                LogEntry::Debug("walking".to_string()),
                LogEntry::Event(LinkEvent::Occupied {
                    path: PathBuf::from("/h/.bashrc"),
                }),
                LogEntry::Info("done".to_string()),
            ]
        );
    }

    #[test]
    fn events_skips_plain_messages() {
        let log = BufferedLog::new();
        log.info("ignored");
        log.record(&LinkEvent::AlreadyLinked {
            home_path: PathBuf::from("/h/.vimrc"),
        });
        assert_eq!(log.events().len(), 1);
    }

    #[test]
    fn usable_as_trait_object() {
        let log = BufferedLog::new();
        let dyn_log: &dyn Log = &log;
        dyn_log.info("via trait");
        assert_eq!(log.entries().len(), 1);
    }
}
