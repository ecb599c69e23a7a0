//! Galaxy generator parameters.

use serde::{Deserialize, Serialize};

/// Procedural spiral-galaxy parameters.
///
/// Fixed for the lifetime of a render session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Number of points (valid range: 0-2000000).
    pub count: u32,
    /// Point size in world units before attenuation.
    pub size: f32,
    /// Nominal disk radius.
    pub radius: f32,
    /// Number of spiral arms (valid range: 1-64).
    pub branches: u32,
    /// Angular shift per unit of radius.
    pub spin: f32,
    /// Offset magnitude as a fraction of the sampled radius.
    pub randomness: f32,
    /// Power-law exponent concentrating points near the arm curve.
    pub randomness_power: f32,
    pub inside_color: String,
    pub outside_color: String,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            count: 15_000,
            size: 0.05,
            radius: 40.0,
            branches: 5,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: "#ff00ff".into(),
            outside_color: "#00ffff".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn galaxy_config_defaults() {
        let config = GalaxyConfig::default();
        assert_eq!(config.count, 15_000);
        assert!((config.size - 0.05).abs() < f32::EPSILON);
        assert!((config.radius - 40.0).abs() < f32::EPSILON);
        assert_eq!(config.branches, 5);
        assert!((config.spin - 1.0).abs() < f32::EPSILON);
        assert!((config.randomness - 0.2).abs() < f32::EPSILON);
        assert!((config.randomness_power - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.inside_color, "#ff00ff");
        assert_eq!(config.outside_color, "#00ffff");
    }
}
