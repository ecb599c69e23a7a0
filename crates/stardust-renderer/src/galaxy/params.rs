use stardust_common::Rgb;
use stardust_config::schema::GalaxyConfig;

/// Errors for generator parameters that would produce a degenerate galaxy.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GalaxyError {
    #[error("radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("at least one branch is required")]
    NoBranches,

    #[error("randomness must be non-negative, got {0}")]
    NegativeRandomness(f32),

    #[error("randomness power must be at least 1, got {0}")]
    InvalidRandomnessPower(f32),

    #[error("invalid color {0:?}")]
    InvalidColor(String),
}

impl From<GalaxyError> for stardust_common::StardustError {
    fn from(e: GalaxyError) -> Self {
        stardust_common::StardustError::Galaxy(e.to_string())
    }
}

/// Immutable generator input, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyParameters {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: 15_000,
            size: 0.05,
            radius: 40.0,
            branches: 5,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Rgb::new(1.0, 0.0, 1.0),
            outside_color: Rgb::new(0.0, 1.0, 1.0),
        }
    }
}

impl GalaxyParameters {
    /// Build parameters from the `[galaxy]` config section.
    pub fn from_config(config: &GalaxyConfig) -> Result<Self, GalaxyError> {
        let inside_color = Rgb::from_hex(&config.inside_color)
            .ok_or_else(|| GalaxyError::InvalidColor(config.inside_color.clone()))?;
        let outside_color = Rgb::from_hex(&config.outside_color)
            .ok_or_else(|| GalaxyError::InvalidColor(config.outside_color.clone()))?;

        let params = Self {
            count: config.count,
            size: config.size,
            radius: config.radius,
            branches: config.branches,
            spin: config.spin,
            randomness: config.randomness,
            randomness_power: config.randomness_power,
            inside_color,
            outside_color,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants the generator relies on.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if !(self.radius > 0.0) {
            return Err(GalaxyError::InvalidRadius(self.radius));
        }
        if self.branches == 0 {
            return Err(GalaxyError::NoBranches);
        }
        if !(self.randomness >= 0.0) {
            return Err(GalaxyError::NegativeRandomness(self.randomness));
        }
        if !(self.randomness_power >= 1.0) {
            return Err(GalaxyError::InvalidRandomnessPower(self.randomness_power));
        }
        Ok(())
    }
}
