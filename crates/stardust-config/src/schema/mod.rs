//! Configuration schema types for stardust.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults reproduce the live under-construction page exactly.

mod animation;
mod camera;
mod galaxy;
mod renderer;
mod system;
mod window;

pub use animation::*;
pub use camera::*;
pub use galaxy::*;
pub use renderer::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StardustConfig {
    pub galaxy: GalaxyConfig,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub fog: FogConfig,
    pub renderer: RendererConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
