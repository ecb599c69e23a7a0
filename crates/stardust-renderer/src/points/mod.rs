//! Point-sprite drawing: per-object uniforms and the wgpu pipeline.
//!
//! Each point is drawn as an instanced screen-aligned quad. Sizes follow
//! the attenuation rule `size * (height / 2) / depth` in pixels, and fog is
//! applied per fragment with the exp-squared falloff.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
