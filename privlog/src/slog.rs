//! Emitting rendered lines through `slog`.
//!
//! [`SlogSink`] forwards each [`Record`] to a `slog::Logger` as one record whose
//! message is the rendered line, with the logger label under `"label"` and the
//! sink level under `"sink_level"`.
//!
//! `slog` has no level between info and warning, so [`SinkLevel::Default`] is
//! emitted at info. The `"sink_level"` key keeps the distinction.

use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    level::SinkLevel,
    sink::{Record, Sink},
};

impl SlogValue for SinkLevel {
    fn serialize(
        &self,
        _record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}

/// A [`Sink`] backed by a `slog::Logger`.
///
/// ```rust
/// use privlog::{Logger, slog::SlogSink};
///
/// let root = slog::Logger::root(slog::Discard, slog::o!());
/// let logger = Logger::new("db", SlogSink::new(root));
/// logger.info("connected", privlog::location!());
/// ```
#[derive(Clone, Debug)]
pub struct SlogSink {
    logger: slog::Logger,
}

impl SlogSink {
    pub fn new(logger: slog::Logger) -> Self {
        Self { logger }
    }

    /// The wrapped `slog` logger.
    pub fn logger(&self) -> &slog::Logger {
        &self.logger
    }
}

impl Sink for SlogSink {
    fn emit(&self, record: &Record<'_>) {
        let label = record.label();
        let level = record.level();
        let message = record.message();
        match level {
            SinkLevel::Debug => {
                slog::debug!(self.logger, "{}", message; "label" => label, "sink_level" => level);
            }
            SinkLevel::Info | SinkLevel::Default => {
                slog::info!(self.logger, "{}", message; "label" => label, "sink_level" => level);
            }
            SinkLevel::Error => {
                slog::error!(self.logger, "{}", message; "label" => label, "sink_level" => level);
            }
            SinkLevel::Fault => {
                slog::crit!(self.logger, "{}", message; "label" => label, "sink_level" => level);
            }
        }
    }
}
