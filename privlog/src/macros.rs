//! Call-site macros: [`location!`](crate::location) and the `log!` family.
//!
//! The `log!` family checks the logger's level first and only then builds the
//! message with `message!`, so a filtered call costs one comparison.

/// Captures the current source location as a [`Location`](crate::Location).
///
/// The function slot is filled with `module_path!()`.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(
            ::core::file!(),
            ::core::module_path!(),
            ::core::line!(),
        )
    };
}

/// Logs a `message!` at the given level.
///
/// ```rust
/// use privlog::{Level, Logger, MemorySink, Metadata, MetadataValue};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new("jobs", sink.clone());
///
/// let mut extra = Metadata::new();
/// extra.insert("job".into(), MetadataValue::from("sync"));
/// privlog::log!(logger, Level::Warning, metadata = &extra; "retry {}", 2_u8 => public);
///
/// assert!(sink.messages()[0].starts_with("retry 2 -- job=sync [File: "));
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, metadata = $metadata:expr; $($message:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                $crate::message!($($message)+),
                ::core::option::Option::Some($metadata),
                $crate::location!(),
            );
        }
    }};
    ($logger:expr, $level:expr, $($message:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                $crate::message!($($message)+),
                ::core::option::Option::None,
                $crate::location!(),
            );
        }
    }};
}

/// Logs a `message!` at [`Level::Trace`](crate::Level::Trace).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Debug`](crate::Level::Debug).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Info`](crate::Level::Info).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Notice`](crate::Level::Notice).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Warning`](crate::Level::Warning).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Error`](crate::Level::Error).
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($rest)+)
    };
}

/// Logs a `message!` at [`Level::Critical`](crate::Level::Critical), which is
/// never filtered.
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($rest)+)
    };
}
