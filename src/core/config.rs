//! Logger configuration loaded from JSON
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "name": "svc",
//!     "level": "debug",
//!     "outputs": [{ "type": "stdout" }]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.level(), Level::Debug);
//! assert_eq!(logger.output_names(), vec!["stdout"]);
//! ```

use super::{
    error::{LoggerError, Result},
    level::Level,
    logger::Logger,
    sink::Sink,
};
use crate::sinks::{ConsoleSink, FileSink};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where a configured logger writes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputTarget {
    Stderr,
    Stdout,
    File { path: PathBuf },
}

impl OutputTarget {
    /// Open the sink this target describes
    pub fn open(&self) -> Result<Box<dyn Sink>> {
        match self {
            OutputTarget::Stderr => Ok(Box::new(ConsoleSink::stderr())),
            OutputTarget::Stdout => Ok(Box::new(ConsoleSink::stdout())),
            OutputTarget::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config(
                        "outputs",
                        "file output needs a non-empty path",
                    ));
                }
                Ok(Box::new(FileSink::new(path)?))
            }
        }
    }
}

/// Serializable description of a logger.
///
/// Missing fields take their defaults: no name, `info`, no file:line, no
/// colors, stderr. Unlike [`Logger::set_level_str`], an unknown level here
/// is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    pub level: Level,
    pub file_line: bool,
    pub colors: bool,
    pub outputs: Vec<OutputTarget>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config("config file", format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    fn open_outputs(&self) -> Result<Vec<Box<dyn Sink>>> {
        self.outputs.iter().map(OutputTarget::open).collect()
    }

    /// Create a logger from this configuration
    pub fn build(&self) -> Result<Logger> {
        let outputs = self.open_outputs()?;
        Ok(Logger::builder(self.name.clone())
            .level(self.level)
            .file_line(self.file_line)
            .colors(self.colors)
            .outputs(outputs)
            .build())
    }

    /// Reconfigure an existing logger (e.g. the default one) in place.
    ///
    /// All outputs are opened before anything changes, so a failure leaves
    /// `logger` untouched.
    pub fn apply_to(&self, logger: &Logger) -> Result<()> {
        let outputs = self.open_outputs()?;
        logger.set_outputs(outputs);
        logger.set_name(self.name.clone());
        logger.set_level(self.level);
        logger.set_file_line(self.file_line);
        logger.set_colors(self.colors);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());

        let logger = config.build().unwrap();
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.output_names(), vec!["stderr"]);
    }

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let json = format!(
            r#"{{
                "name": "svc",
                "level": "W",
                "file_line": true,
                "outputs": [
                    {{ "type": "stderr" }},
                    {{ "type": "file", "path": {:?} }}
                ]
            }}"#,
            path.display().to_string()
        );

        let config = LoggerConfig::from_json(&json).unwrap();
        assert_eq!(config.level, Level::Warning);
        assert!(config.file_line);
        assert_eq!(config.outputs.len(), 2);

        let logger = config.build().unwrap();
        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.output_names().len(), 2);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = LoggerConfig::from_json(r#"{ "level": "loud" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::Json(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = LoggerConfig::from_json(r#"{ "rotation": "daily" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::Json(_)));
    }

    #[test]
    fn test_empty_file_path_is_rejected() {
        let config = LoggerConfig::from_json(r#"{ "outputs": [{ "type": "file", "path": "" }] }"#)
            .unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_apply_to_reconfigures_in_place() {
        let sink = MemorySink::new();
        let logger = Logger::builder("old").output(sink.clone()).build();

        let config = LoggerConfig {
            name: "new".to_string(),
            level: Level::Error,
            ..LoggerConfig::default()
        };
        config.apply_to(&logger).unwrap();

        assert_eq!(logger.name(), "new");
        assert_eq!(logger.level(), Level::Error);
        assert_eq!(logger.output_names(), vec!["stderr"]);
    }

    #[test]
    fn test_failed_apply_leaves_logger_untouched() {
        let dir = TempDir::new().unwrap();
        let sink = MemorySink::new();
        let logger = Logger::builder("keep").output(sink.clone()).build();

        let config = LoggerConfig {
            name: "changed".to_string(),
            outputs: vec![OutputTarget::File {
                path: dir.path().join("missing").join("app.log"),
            }],
            ..LoggerConfig::default()
        };

        assert!(config.apply_to(&logger).is_err());
        assert_eq!(logger.name(), "keep");
        assert_eq!(logger.output_names(), vec!["memory"]);
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, r#"{ "name": "from-file", "level": "error" }"#).unwrap();

        let config = LoggerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.name, "from-file");
        assert_eq!(config.level, Level::Error);

        let err = LoggerConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
