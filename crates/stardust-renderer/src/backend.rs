//! Renderer capability used by the render loop.
//!
//! The session drives any [`SurfaceRenderer`]; production uses
//! [`crate::gpu::WgpuRenderer`], tests use a recording fake.

use crate::galaxy::ParticleCloud;
use crate::gpu::{PhysicalSize, RendererError};
use crate::scene::{GeometryHandle, MaterialHandle, PerspectiveCamera, PointsMaterial, Scene};

/// A renderer bound to one output surface.
///
/// Handles returned by `upload_points` and `create_material` stay valid
/// until released or until the renderer is disposed.
pub trait SurfaceRenderer {
    /// Upload a point cloud and return a handle to its GPU geometry.
    fn upload_points(&mut self, cloud: &ParticleCloud) -> Result<GeometryHandle, RendererError>;

    /// Build the pipeline state for `material`.
    fn create_material(&mut self, material: &PointsMaterial)
        -> Result<MaterialHandle, RendererError>;

    /// Resize the drawing surface in physical pixels.
    fn set_size(&mut self, size: PhysicalSize);

    /// Draw one frame of `scene` as seen from `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RendererError>;

    fn release_geometry(&mut self, handle: GeometryHandle);

    fn release_material(&mut self, handle: MaterialHandle);

    /// Detach from the output surface. Idempotent.
    fn dispose(&mut self);
}
