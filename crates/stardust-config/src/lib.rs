//! Stardust configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stardust_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{StardustConfig, CONFIG_SCHEMA_VERSION};

use stardust_common::ConfigError;
use std::path::{Path, PathBuf};

/// Load and validate config.
///
/// With `path`, reads that file (it must exist). Without, loads
/// `config.toml` from the OS config directory, creating a default if none
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<StardustConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// The file [`load_config`] reads for `path`: the override itself, or the
/// platform default location.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => toml_loader::default_config_path(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &StardustConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = StardustConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"galaxy\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"animation\""));
        assert!(json.contains("\"fog\""));
        assert!(json.contains("\"renderer\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = StardustConfig::default();
        let json = config_to_json(&config);
        let parsed: StardustConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.galaxy.count, 15_000);
        assert_eq!(parsed.galaxy.inside_color, "#ff00ff");
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[galaxy]\nbranches = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn resolve_config_path_keeps_override() {
        let path = Path::new("/tmp/galaxy.toml");
        assert_eq!(resolve_config_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn resolve_config_path_defaults_to_platform_dir() {
        // No config dir in some sandboxes; only check the shape when there is one.
        if let Ok(path) = resolve_config_path(None) {
            assert!(path.ends_with("stardust/config.toml"));
            assert_eq!(path, toml_loader::default_config_path().unwrap());
        }
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[galaxy]\ncount = 42\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.galaxy.count, 42);
    }
}
