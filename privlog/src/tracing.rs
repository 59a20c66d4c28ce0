//! Emitting rendered lines through `tracing`.
//!
//! [`TracingSink`] turns each [`Record`] into a `tracing` event whose message is
//! the rendered line, with `label` and `sink_level` fields.
//!
//! | Sink level | `tracing` level |
//! |------------|-----------------|
//! | `debug`    | `DEBUG`         |
//! | `info`     | `INFO`          |
//! | `default`  | `INFO`          |
//! | `error`    | `ERROR`         |
//! | `fault`    | `ERROR`         |
//!
//! Events are emitted under the `privlog` target, so subscribers can filter
//! them as a group.

use tracing::field::display;

use crate::{
    level::SinkLevel,
    sink::{Record, Sink},
};

/// A [`Sink`] that emits `tracing` events to the current subscriber.
///
/// ```rust
/// use privlog::{Logger, tracing::TracingSink};
///
/// let logger = Logger::new("http", TracingSink);
/// logger.notice("listening", privlog::location!());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, record: &Record<'_>) {
        let label = record.label();
        let level = display(record.level());
        let message = record.message();
        match record.level() {
            SinkLevel::Debug => {
                tracing::debug!(target: "privlog", label, sink_level = level, "{message}");
            }
            SinkLevel::Info | SinkLevel::Default => {
                tracing::info!(target: "privlog", label, sink_level = level, "{message}");
            }
            SinkLevel::Error | SinkLevel::Fault => {
                tracing::error!(target: "privlog", label, sink_level = level, "{message}");
            }
        }
    }
}
