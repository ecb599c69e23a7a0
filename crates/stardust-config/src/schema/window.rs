//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown once the effect is running.
    pub title: String,
    /// Title shown while the graphics library is still loading.
    pub loading_title: String,
    /// Initial logical width (valid range: 64-16384).
    pub width: u32,
    /// Initial logical height (valid range: 64-16384).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shocked Future — Under Construction".into(),
            loading_title: "INITIALIZING GALAXY CORE...".into(),
            width: 1280,
            height: 800,
        }
    }
}
