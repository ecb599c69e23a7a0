//! Per-frame animation and scene fog.

use serde::{Deserialize, Serialize};

/// Rigid per-frame motion of the galaxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation about the vertical axis, radians per second.
    pub rotation_speed: f32,
    /// Angular frequency of the vertical bob, radians per second.
    pub bob_frequency: f32,
    /// Peak vertical offset in world units.
    pub bob_amplitude: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.05,
            bob_frequency: 0.2,
            bob_amplitude: 1.0,
        }
    }
}

/// Exponential-squared distance fog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub enabled: bool,
    pub color: String,
    /// Valid range: 0.0-1.0.
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: "#000000".into(),
            density: 0.001,
        }
    }
}
