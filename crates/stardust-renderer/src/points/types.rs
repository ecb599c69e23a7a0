use crate::gpu::PhysicalSize;
use crate::matrix::{self, Mat4};
use crate::scene::{FogExp2, PerspectiveCamera, Points, PointsMaterial};

/// Per-object uniforms matching the WGSL `Uniforms` struct.
///
/// Layout: 2 × mat4 + 3 × vec4 = 176 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    /// View × model (column-major).
    pub model_view: Mat4,
    pub projection: Mat4,
    /// Fog color (rgb) and density (a). Density 0 disables fog.
    pub fog: [f32; 4],
    /// Point size, pixel scale, attenuation flag (0 or 1), unused.
    pub point: [f32; 4],
    /// Viewport width and height in pixels, unused, unused.
    pub viewport: [f32; 4],
}

impl PointUniforms {
    pub fn compute(
        object: &Points,
        camera: &PerspectiveCamera,
        fog: Option<&FogExp2>,
        material: &PointsMaterial,
        size: PhysicalSize,
    ) -> Self {
        let size = size.non_zero();
        let width = size.width as f32;
        let height = size.height as f32;

        let fog = match fog {
            Some(f) => [f.color.r, f.color.g, f.color.b, f.density],
            None => [0.0; 4],
        };

        Self {
            model_view: matrix::mul(&camera.view_matrix(), &object.model_matrix()),
            projection: camera.projection_matrix(),
            fog,
            point: [
                material.size,
                height * 0.5,
                if material.size_attenuation { 1.0 } else { 0.0 },
                0.0,
            ],
            viewport: [width, height, 0.0, 0.0],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
