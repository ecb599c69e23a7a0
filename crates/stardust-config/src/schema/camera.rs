//! Perspective camera configuration.

use serde::{Deserialize, Serialize};

/// Camera placement and projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 1-179).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 10.0, 30.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_config_defaults() {
        let config = CameraConfig::default();
        assert!((config.fov - 75.0).abs() < f32::EPSILON);
        assert!((config.near - 0.1).abs() < f32::EPSILON);
        assert!((config.far - 1000.0).abs() < f32::EPSILON);
        assert_eq!(config.position, [0.0, 10.0, 30.0]);
        assert_eq!(config.target, [0.0, 0.0, 0.0]);
    }
}
