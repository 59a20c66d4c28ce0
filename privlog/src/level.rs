//! Severity levels and their mapping onto a sink's narrower enumeration.

use std::{fmt, str::FromStr};

/// Severity of a log call, ordered from least to most severe.
///
/// The default is [`Level::Trace`], which lets everything through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Level {
    #[default]
    Trace,
    Debug,
    Info,
    Notice,
    #[cfg_attr(feature = "serde", serde(alias = "warn"))]
    Warning,
    Error,
    /// Always emitted, whatever the configured threshold.
    #[cfg_attr(feature = "serde", serde(alias = "crit"))]
    Critical,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Returns `true` if a call at this level passes a `threshold`.
    ///
    /// [`Level::Critical`] passes every threshold.
    pub fn passes(&self, threshold: Level) -> bool {
        *self == Self::Critical || *self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level `{}` (expected one of trace, debug, info, notice, warning, error, critical)",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case. `warn` and `crit` are accepted
    /// as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "notice" => Self::Notice,
            "warning" | "warn" => Self::Warning,
            "error" => Self::Error,
            "critical" | "crit" => Self::Critical,
            _ => {
                return Err(ParseLevelError {
                    input: s.to_string(),
                });
            }
        };
        Ok(level)
    }
}

/// The narrower severity enumeration understood by native sinks.
///
/// Sinks in the style of the OS unified log have no `trace` or `warning`
/// level; [`From<Level>`] folds those onto neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SinkLevel {
    Debug,
    Info,
    /// The sink's default level, used for `notice`.
    Default,
    Error,
    /// The most severe level, used for `critical`.
    Fault,
}

impl SinkLevel {
    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Default => "default",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }
}

impl fmt::Display for SinkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for SinkLevel {
    fn from(level: Level) -> Self {
        match level {
            // no trace level on the sink side
            Level::Trace | Level::Debug => Self::Debug,
            // no warning level on the sink side
            Level::Info | Level::Warning => Self::Info,
            Level::Notice => Self::Default,
            Level::Error => Self::Error,
            Level::Critical => Self::Fault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn critical_passes_every_threshold() {
        for threshold in Level::ALL {
            assert!(Level::Critical.passes(threshold));
        }
        assert!(!Level::Debug.passes(Level::Info));
        assert!(Level::Info.passes(Level::Info));
    }

    #[test]
    fn maps_to_sink_levels() {
        let mapped: Vec<SinkLevel> = Level::ALL.into_iter().map(SinkLevel::from).collect();
        assert_eq!(
            mapped,
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
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" warn ".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("crit".parse::<Level>(), Ok(Level::Critical));
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert_eq!(err.input(), "loud");
        assert!(err.to_string().contains("unknown log level `loud`"));
    }
}
