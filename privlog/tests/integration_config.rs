//! Tests for building loggers from configuration.

use privlog::{Level, LoggerConfig};

mod parse {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!("Notice".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);
    }

    #[test]
    fn unknown_level_reports_input() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.input(), "verbose");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("verbose"));
    }

    #[test]
    fn default_config_lets_everything_through() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::Trace);
        assert!(config.label.is_empty());
        assert!(config.metadata.is_empty());
    }
}

#[cfg(feature = "serde")]
mod serde_config {
    use privlog::{Logger, MemorySink, MetadataValue, RenderOptions, SinkLevel};

    use super::*;

    #[test]
    fn deserializes_full_config() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{"label": "billing", "level": "warning", "metadata": {"region": "eu"}}"#,
        )
        .unwrap();
        assert_eq!(config.label, "billing");
        assert_eq!(config.level, Level::Warning);

        let sink = MemorySink::new();
        let logger =
            Logger::from_config(config, sink.clone()).with_render_options(RenderOptions::new());
        assert_eq!(
            logger.metadata_value("region"),
            Some(&MetadataValue::from("eu"))
        );
        logger.info("dropped", privlog::location!());
        logger.error("kept", privlog::location!());
        assert_eq!(sink.records().len(), 1);
        assert!(sink.messages()[0].starts_with("kept -- region=eu [File: "));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{"label": "x"}"#).unwrap();
        assert_eq!(config.level, Level::Trace);
        assert!(config.metadata.is_empty());
    }

    #[test]
    fn level_aliases_deserialize() {
        let level: Level = serde_json::from_str(r#""warn""#).unwrap();
        assert_eq!(level, Level::Warning);
        let level: Level = serde_json::from_str(r#""crit""#).unwrap();
        assert_eq!(level, Level::Critical);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result: Result<LoggerConfig, _> = serde_json::from_str(r#"{"level": "loud"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn levels_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Notice).unwrap(), r#""notice""#);
        assert_eq!(
            serde_json::to_string(&SinkLevel::Fault).unwrap(),
            r#""fault""#
        );
    }
}
