//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` directive scoped to the stardust crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "stardust=trace",
            LogLevel::Debug => "stardust=debug",
            LogLevel::Info => "stardust=info",
            LogLevel::Warn => "stardust=warn",
            LogLevel::Error => "stardust=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_default_is_info() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Debug.directive(), "stardust=debug");
        assert_eq!(LogLevel::Error.directive(), "stardust=error");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: LoggingConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(config.level, LogLevel::Warn);
    }
}
