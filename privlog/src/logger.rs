//! The logger facade: level gating, sticky metadata and line formatting.
//!
//! A [`Logger`] turns a [`Message`] into one line of text and hands it to a
//! [`Sink`]:
//!
//! ```text
//! <message> -- <k=v k=v ...> [File: <file>, Function: <function>, Line: <line>]
//! ```
//!
//! The metadata segment (and its ` -- ` separator) is omitted when there is no
//! metadata. Calls below the logger's level are dropped before the message is
//! rendered, so none of their producers run.

use std::{collections::BTreeMap, fmt};

use crate::{
    level::{Level, SinkLevel},
    message::Message,
    metadata::{self, Metadata, MetadataValue},
    policy::RenderOptions,
    sink::{Record, Sink},
};

/// Source location of a log call.
///
/// Build one with [`location!`](crate::location). Rust has no macro for the
/// enclosing function's name, so `function` holds the module path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {}, Function: {}, Line: {}",
            self.file, self.function, self.line
        )
    }
}

/// Settings a [`Logger`] can be built from.
///
/// With the `serde` feature this deserializes from e.g.
/// `{"label": "net", "level": "info", "metadata": {"region": "eu"}}`; every
/// field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    pub label: String,
    pub level: Level,
    pub metadata: BTreeMap<String, String>,
}

/// A labelled logger that renders messages and emits them to a sink.
///
/// ```rust
/// use privlog::{Level, Logger, MemorySink, message};
///
/// let sink = MemorySink::new();
/// let mut logger = Logger::new("auth", sink.clone()).with_log_level(Level::Info);
/// logger.set_metadata("request", "r-1");
///
/// let user = "alice";
/// privlog::info!(logger, "login for {user} attempt {}", 3 => public);
/// privlog::debug!(logger, "dropped");
///
/// let messages = sink.messages();
/// assert_eq!(messages.len(), 1);
/// assert!(messages[0].starts_with("login for <redacted> attempt 3 -- request=r-1 [File: "));
/// ```
#[derive(Debug)]
pub struct Logger<S> {
    label: String,
    log_level: Level,
    metadata: Metadata,
    pretty_metadata: Option<String>,
    render_options: Option<RenderOptions>,
    sink: S,
}

impl<S: Sink> Logger<S> {
    /// Creates a logger that lets every level through.
    pub fn new(label: impl Into<String>, sink: S) -> Self {
        Self {
            label: label.into(),
            log_level: Level::default(),
            metadata: Metadata::new(),
            pretty_metadata: None,
            render_options: None,
            sink,
        }
    }

    /// Creates a logger from configuration.
    pub fn from_config(config: LoggerConfig, sink: S) -> Self {
        let mut logger = Self::new(config.label, sink).with_log_level(config.level);
        logger.replace_metadata(
            config
                .metadata
                .into_iter()
                .map(|(key, value)| (key, MetadataValue::String(value)))
                .collect(),
        );
        logger
    }

    /// Sets the threshold below which calls are dropped.
    #[must_use]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Pins the render options instead of reading the process-wide override
    /// on every call.
    #[must_use]
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = Some(options);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // =========================================================================
    // Sticky metadata
    // =========================================================================

    /// Metadata attached to every line this logger emits.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Adds or replaces one sticky metadata entry.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.metadata.insert(key.into(), value.into());
        self.refresh_pretty_metadata();
    }

    /// Removes one sticky metadata entry, returning its value.
    pub fn remove_metadata(&mut self, key: &str) -> Option<MetadataValue> {
        let removed = self.metadata.remove(key);
        if removed.is_some() {
            self.refresh_pretty_metadata();
        }
        removed
    }

    /// Replaces all sticky metadata.
    pub fn replace_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
        self.refresh_pretty_metadata();
    }

    fn refresh_pretty_metadata(&mut self) {
        self.pretty_metadata = metadata::prettify(&self.metadata);
    }

    // =========================================================================
    // Emission
    // =========================================================================

    /// Returns `true` if a call at `level` would be emitted.
    pub fn is_enabled(&self, level: Level) -> bool {
        level.passes(self.log_level)
    }

    /// Renders and emits `message` if `level` is enabled.
    ///
    /// Call-site `metadata` is merged over the sticky metadata; call-site
    /// values win on key collisions.
    pub fn log(
        &self,
        level: Level,
        message: Message<'_>,
        metadata: Option<&Metadata>,
        location: Location,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let options = self
            .render_options
            .unwrap_or_else(RenderOptions::from_process);
        let rendered = message.render_with(&options);
        let line = match metadata.filter(|entries| !entries.is_empty()) {
            Some(call_site) => {
                let merged = metadata::merge(&self.metadata, Some(call_site));
                format_line(&rendered, metadata::prettify(&merged).as_deref(), &location)
            }
            None => format_line(&rendered, self.pretty_metadata.as_deref(), &location),
        };

        self.sink
            .emit(&Record::new(SinkLevel::from(level), &self.label, &line));
    }

    /// Like [`Logger::log`], but the message itself is only built when `level`
    /// is enabled.
    pub fn log_with<'a, F>(
        &self,
        level: Level,
        build: F,
        metadata: Option<&Metadata>,
        location: Location,
    ) where
        F: FnOnce() -> Message<'a>,
    {
        if self.is_enabled(level) {
            self.log(level, build(), metadata, location);
        }
    }

    pub fn trace<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Trace, message.into(), None, location);
    }

    pub fn debug<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Debug, message.into(), None, location);
    }

    pub fn info<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Info, message.into(), None, location);
    }

    pub fn notice<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Notice, message.into(), None, location);
    }

    pub fn warning<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Warning, message.into(), None, location);
    }

    pub fn error<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Error, message.into(), None, location);
    }

    pub fn critical<'a>(&self, message: impl Into<Message<'a>>, location: Location) {
        self.log(Level::Critical, message.into(), None, location);
    }
}

fn format_line(message: &str, metadata: Option<&str>, location: &Location) -> String {
    match metadata {
        Some(metadata) => format!("{message} -- {metadata} [{location}]"),
        None => format!("{message} [{location}]"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{MemorySink, MessageBuilder, ValueOptions};

    const HERE: Location = Location::new("src/main.rs", "app::run", 7);

    fn logger() -> (Logger<MemorySink>, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::new("test", sink.clone()).with_render_options(RenderOptions::new());
        (logger, sink)
    }

    #[test]
    fn line_without_metadata() {
        let (logger, sink) = logger();
        logger.info("hello", HERE);
        assert_eq!(
            sink.messages(),
            ["hello [File: src/main.rs, Function: app::run, Line: 7]"]
        );
    }

    #[test]
    fn sticky_metadata_is_appended() {
        let (mut logger, sink) = logger();
        logger.set_metadata("b", "2");
        logger.set_metadata("a", "1");
        logger.notice("hi", HERE);
        assert_eq!(
            sink.messages(),
            ["hi -- a=1 b=2 [File: src/main.rs, Function: app::run, Line: 7]"]
        );
    }

    #[test]
    fn call_site_metadata_wins() {
        let (mut logger, sink) = logger();
        logger.set_metadata("request", "sticky");
        logger.set_metadata("user", "u1");

        let call_site: Metadata = [("request".to_string(), MetadataValue::from("call"))]
            .into_iter()
            .collect();
        logger.log(Level::Info, Message::literal("m"), Some(&call_site), HERE);

        assert_eq!(
            sink.messages(),
            ["m -- request=call user=u1 [File: src/main.rs, Function: app::run, Line: 7]"]
        );
        assert_eq!(
            logger.metadata_value("request"),
            Some(&MetadataValue::from("sticky"))
        );
    }

    #[test]
    fn removing_metadata_updates_line() {
        let (mut logger, sink) = logger();
        logger.set_metadata("k", "v");
        assert_eq!(logger.remove_metadata("k"), Some(MetadataValue::from("v")));
        assert_eq!(logger.remove_metadata("k"), None);
        logger.info("x", HERE);
        assert_eq!(
            sink.messages(),
            ["x [File: src/main.rs, Function: app::run, Line: 7]"]
        );
    }

    #[test]
    fn levels_map_onto_sink_levels() {
        let (logger, sink) = logger();
        for level in Level::ALL {
            logger.log(level, Message::literal("x"), None, HERE);
        }
        let levels: Vec<SinkLevel> = sink.records().into_iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            [
                SinkLevel::Debug,
                SinkLevel::Debug,
                SinkLevel::Info,
                SinkLevel::Default,
                SinkLevel::Info,
                SinkLevel::Error,
                SinkLevel::Fault,
            ]
        );
        assert!(sink.records().iter().all(|r| r.label == "test"));
    }

    #[test]
    fn filtered_calls_never_run_producers() {
        let (logger, sink) = logger();
        let logger = logger.with_log_level(Level::Error);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut builder = MessageBuilder::new();
        builder.append_value(
            move || counter.fetch_add(1, Ordering::SeqCst),
            ValueOptions::new(),
        );
        logger.log(Level::Warning, builder.build(), None, HERE);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(sink.records().is_empty());
    }

    #[test]
    fn critical_passes_highest_threshold() {
        let (logger, sink) = logger();
        let logger = logger.with_log_level(Level::Critical);
        logger.error("no", HERE);
        logger.critical("yes", HERE);
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].level, SinkLevel::Fault);
    }

    #[test]
    fn log_with_skips_building_when_disabled() {
        let (logger, sink) = logger();
        let logger = logger.with_log_level(Level::Info);
        let mut built = false;
        logger.log_with(
            Level::Debug,
            || {
                built = true;
                Message::literal("never")
            },
            None,
            HERE,
        );
        assert!(!built);
        logger.log_with(Level::Info, || Message::literal("once"), None, HERE);
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn from_config_applies_every_field() {
        let config = LoggerConfig {
            label: "net".to_string(),
            level: Level::Warning,
            metadata: [("region".to_string(), "eu".to_string())]
                .into_iter()
                .collect(),
        };
        let sink = MemorySink::new();
        let logger = Logger::from_config(config, sink.clone());

        assert_eq!(logger.label(), "net");
        assert_eq!(logger.log_level(), Level::Warning);
        logger.info("dropped", HERE);
        logger.warning("kept", HERE);
        assert_eq!(
            sink.messages(),
            ["kept -- region=eu [File: src/main.rs, Function: app::run, Line: 7]"]
        );
    }

    #[test]
    fn default_level_is_trace() {
        let (logger, _) = logger();
        assert_eq!(logger.log_level(), Level::Trace);
        assert!(logger.is_enabled(Level::Trace));
    }
}
