//! Leveled diagnostic messages
//!
//! Every pipeline component receives a [`DiagnosticSink`] instead of writing
//! to a global logger. The CLI uses [`ConsoleSink`], tests use [`MemorySink`]
//! to assert on exactly what was reported.

use std::cell::RefCell;
use std::fmt;

use console::{Term, style};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Receiver of leveled diagnostic messages
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Writes diagnostics to stderr, hiding debug messages unless verbose
pub struct ConsoleSink {
    term: Term,
    verbose: bool,
}

impl ConsoleSink {
    pub fn new(verbose: bool) -> Self {
        Self {
            term: Term::stderr(),
            verbose,
        }
    }

    fn format(level: Level, message: &str) -> String {
        match level {
            Level::Debug => format!("{} {}", style("·").dim(), style(message).dim()),
            Level::Info => format!("{} {}", style("ℹ").blue(), message),
            Level::Warn => format!("{} {}", style("⚠").yellow(), message),
            Level::Error => format!("{} {}", style("✗").red().bold(), message),
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, level: Level, message: &str) {
        if level == Level::Debug && !self.verbose {
            return;
        }

        // Diagnostics must never abort the run, a closed stderr is ignored
        let _ = self.term.clear_line();
        let _ = self.term.write_line(&Self::format(level, message));
    }
}

/// A diagnostic captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Messages emitted at exactly `level`, in emission order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|record| record.level == level && record.message.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        self.records.borrow_mut().push(Record {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.debug("first");
        sink.error("second");
        sink.debug("third");
        sink.warn("fourth");

        assert_eq!(
            sink.records(),
            vec![
                Record {
                    level: Level::Debug,
                    message: "first".to_string()
                },
                Record {
                    level: Level::Error,
                    message: "second".to_string()
                },
                Record {
                    level: Level::Debug,
                    message: "third".to_string()
                },
                Record {
                    level: Level::Warn,
                    message: "fourth".to_string()
                },
            ]
        );
        assert_eq!(sink.messages(Level::Debug), vec!["first", "third"]);
        assert!(sink.contains(Level::Error, "sec"));
        assert!(!sink.contains(Level::Warn, "sec"));
        assert_eq!(sink.messages(Level::Warn), vec!["fourth"]);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert_eq!(Level::Warn.to_string(), "warn");
    }

    #[test]
    fn test_console_format_keeps_message() {
        let line = ConsoleSink::format(Level::Warn, "manifest skipped");
        assert!(line.contains("manifest skipped"));
    }
}
