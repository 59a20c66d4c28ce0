//! Destinations for rendered log lines.
//!
//! A [`Sink`] receives fully rendered text. Redaction has already happened by
//! the time a [`Record`] exists, so sinks never see private values.
//!
//! Adapters for `slog` and `tracing` live in their own feature-gated modules.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use crate::level::SinkLevel;

/// One rendered log line on its way to a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    level: SinkLevel,
    label: &'a str,
    message: &'a str,
}

impl<'a> Record<'a> {
    /// Creates a record.
    pub fn new(level: SinkLevel, label: &'a str, message: &'a str) -> Self {
        Self {
            level,
            label,
            message,
        }
    }

    /// Severity after mapping onto the sink's levels.
    pub fn level(&self) -> SinkLevel {
        self.level
    }

    /// Label (category) of the emitting logger.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// The full rendered line, including metadata and location.
    pub fn message(&self) -> &'a str {
        self.message
    }
}

/// Receives rendered log lines.
///
/// Emission is infallible: a sink that cannot write drops the line.
pub trait Sink: Send + Sync {
    /// Emits one record.
    fn emit(&self, record: &Record<'_>);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

// =============================================================================
// MemorySink
// =============================================================================

/// A record captured by [`MemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: SinkLevel,
    pub label: String,
    pub message: String,
}

/// Keeps every record in memory. Clones share the same buffer.
///
/// ```rust
/// use privlog::{Level, Logger, MemorySink, Message, SinkLevel, location};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new("app", sink.clone());
/// logger.log(Level::Notice, Message::literal("ready"), None, location!());
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level, SinkLevel::Default);
/// assert!(records[0].message.starts_with("ready ["));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the captured messages.
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.message)
            .collect()
    }

    /// Drops everything captured so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedRecord {
                level: record.level(),
                label: record.label().to_string(),
                message: record.message().to_string(),
            });
    }
}

// =============================================================================
// WriterSink
// =============================================================================

/// Writes each record as `{level} {label}: {message}` on its own line.
///
/// I/O errors are ignored.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stderr> {
    /// A sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn emit(&self, record: &Record<'_>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(
            writer,
            "{} {}: {}",
            record.level(),
            record.label(),
            record.message()
        );
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_clones_share_records() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.emit(&Record::new(SinkLevel::Info, "net", "hello"));

        assert_eq!(
            sink.records(),
            [CapturedRecord {
                level: SinkLevel::Info,
                label: "net".to_string(),
                message: "hello".to_string(),
            }]
        );
        sink.clear();
        assert!(other.records().is_empty());
    }

    #[test]
    fn writer_sink_formats_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(&Record::new(SinkLevel::Fault, "db", "gone"));
        sink.emit(&Record::new(SinkLevel::Debug, "db", "back"));

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "fault db: gone\ndebug db: back\n");
    }

    fn emit_through<S: Sink>(sink: S, message: &str) {
        sink.emit(&Record::new(SinkLevel::Error, "a", message));
    }

    #[test]
    fn sinks_compose_through_pointers() {
        let sink = MemorySink::new();
        let boxed: Box<dyn Sink> = Box::new(sink.clone());
        let shared = Arc::new(sink.clone());

        boxed.emit(&Record::new(SinkLevel::Error, "a", "1"));
        shared.emit(&Record::new(SinkLevel::Error, "a", "2"));
        emit_through(&sink, "3");

        assert_eq!(sink.messages(), ["1", "2", "3"]);
    }
}
