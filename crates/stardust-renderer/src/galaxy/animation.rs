use stardust_config::schema::AnimationConfig;

/// Rigid transform applied to the whole cloud at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyTransform {
    pub rotation_y: f32,
    pub offset_y: f32,
}

/// Slow rotation about the vertical axis plus a sinusoidal bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyAnimation {
    pub rotation_speed: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
}

impl Default for GalaxyAnimation {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl GalaxyAnimation {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            rotation_speed: config.rotation_speed,
            bob_frequency: config.bob_frequency,
            bob_amplitude: config.bob_amplitude,
        }
    }

    /// Transform at `elapsed` seconds since session start.
    pub fn transform_at(&self, elapsed: f32) -> GalaxyTransform {
        GalaxyTransform {
            rotation_y: elapsed * self.rotation_speed,
            offset_y: (elapsed * self.bob_frequency).sin() * self.bob_amplitude,
        }
    }
}
