use stardust_common::Rgb;
use stardust_config::schema::FogConfig;

/// Opaque reference to uploaded point geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u32);

/// Opaque reference to a built point material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u32);

/// How fragments combine with what is already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blending {
    /// Source is added on top; overlapping points brighten.
    #[default]
    Additive,
    /// Standard alpha blending.
    Normal,
}

/// Point sprite material. Colors always come from the per-point attribute
/// and depth is never written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    /// Point size in world units when attenuated, pixels otherwise.
    pub size: f32,
    /// Shrink points with distance from the camera.
    pub size_attenuation: bool,
    pub blending: Blending,
}

impl PointsMaterial {
    /// The galaxy look: attenuated, additively blended points.
    pub fn galaxy(size: f32) -> Self {
        Self {
            size,
            size_attenuation: true,
            blending: Blending::Additive,
        }
    }
}

/// Exponential-squared distance fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogExp2 {
    pub color: Rgb,
    pub density: f32,
}

impl FogExp2 {
    /// `None` when fog is disabled or the color does not parse.
    pub fn from_config(config: &FogConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let color = Rgb::from_hex(&config.color)?;
        Some(Self {
            color,
            density: config.density,
        })
    }

    /// Fraction of the fog color mixed in at view depth `depth`.
    pub fn factor(&self, depth: f32) -> f32 {
        let d = self.density * depth;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn galaxy_material_is_additive_and_attenuated() {
        let m = PointsMaterial::galaxy(0.05);
        assert_eq!(m.blending, Blending::Additive);
        assert!(m.size_attenuation);
        assert!((m.size - 0.05).abs() < f32::EPSILON);
    }

    #[test]
    fn fog_from_default_config() {
        let fog = FogExp2::from_config(&FogConfig::default()).unwrap();
        assert_eq!(fog.color, Rgb::BLACK);
        assert!((fog.density - 0.001).abs() < f32::EPSILON);
    }

    #[test]
    fn disabled_fog_is_none() {
        let config = FogConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(FogExp2::from_config(&config).is_none());
    }

    #[test]
    fn fog_factor_grows_with_depth() {
        let fog = FogExp2 {
            color: Rgb::BLACK,
            density: 0.001,
        };
        assert_eq!(fog.factor(0.0), 0.0);
        // Fog is barely visible at the camera-to-core distance.
        assert!(fog.factor(30.0) < 0.001);
        assert!(fog.factor(500.0) < fog.factor(1000.0));
        assert!(fog.factor(1.0e6) <= 1.0);
    }
}
