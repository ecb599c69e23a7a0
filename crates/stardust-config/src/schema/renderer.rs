//! Renderer and surface settings.

use serde::{Deserialize, Serialize};

/// Surface presentation mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PresentModeConfig {
    #[default]
    Fifo,
    Mailbox,
    Immediate,
}

/// Renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Upper bound on the device pixel ratio (valid range: 0.5-4.0).
    pub max_pixel_ratio: f64,
    pub clear_color: String,
    /// Valid range: 0.0-1.0.
    pub clear_alpha: f64,
    pub present_mode: PresentModeConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            clear_color: "#000000".into(),
            clear_alpha: 1.0,
            present_mode: PresentModeConfig::Fifo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_config_defaults() {
        let config = RendererConfig::default();
        assert!((config.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.clear_color, "#000000");
        assert!((config.clear_alpha - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.present_mode, PresentModeConfig::Fifo);
    }

    #[test]
    fn present_mode_parses_lowercase() {
        let config: RendererConfig = toml::from_str("present_mode = \"mailbox\"").unwrap();
        assert_eq!(config.present_mode, PresentModeConfig::Mailbox);
    }
}
