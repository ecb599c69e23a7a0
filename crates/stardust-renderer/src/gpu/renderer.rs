use std::collections::HashMap;
use std::sync::Arc;

use stardust_common::Rgb;
use stardust_config::schema::RendererConfig;
use tracing::{debug, warn};
use winit::window::Window;

use crate::backend::SurfaceRenderer;
use crate::galaxy::ParticleCloud;
use crate::points::{self, PointUniforms, VERTICES_PER_POINT};
use crate::scene::{GeometryHandle, MaterialHandle, PerspectiveCamera, PointsMaterial, Scene};

use super::library::GraphicsLibrary;
use super::surface::WindowSurface;
use super::types::{PhysicalSize, RendererError};

struct GeometryEntry {
    /// `None` for an empty cloud; wgpu rejects zero-sized vertex buffers.
    instance_buffer: Option<wgpu::Buffer>,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct MaterialEntry {
    pipeline: wgpu::RenderPipeline,
    material: PointsMaterial,
}

/// [`SurfaceRenderer`] backed by wgpu, drawing to a window surface.
pub struct WgpuRenderer {
    library: Arc<GraphicsLibrary>,
    target: Option<WindowSurface>,
    uniform_layout: wgpu::BindGroupLayout,
    geometries: HashMap<GeometryHandle, GeometryEntry>,
    materials: HashMap<MaterialHandle, MaterialEntry>,
    next_handle: u32,
    clear_color: wgpu::Color,
    first_frame_logged: bool,
}

impl WgpuRenderer {
    /// Bind a renderer to `window` using an already-loaded library.
    pub fn new(
        library: Arc<GraphicsLibrary>,
        window: Arc<Window>,
        size: PhysicalSize,
        config: &RendererConfig,
    ) -> Result<Self, RendererError> {
        let target = WindowSurface::new(&library, window, size, config.present_mode)?;
        let uniform_layout = points::uniform_bind_group_layout(&library.device);

        Ok(Self {
            library,
            target: Some(target),
            uniform_layout,
            geometries: HashMap::new(),
            materials: HashMap::new(),
            next_handle: 1,
            clear_color: clear_color(config),
            first_frame_logged: false,
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.target.is_none()
    }

    fn target(&self) -> Result<&WindowSurface, RendererError> {
        self.target.as_ref().ok_or(RendererError::Disposed)
    }

    fn next_handle(&mut self) -> u32 {
        let id = self.next_handle;
        self.next_handle = self.next_handle.wrapping_add(1);
        id
    }
}

impl SurfaceRenderer for WgpuRenderer {
    fn upload_points(&mut self, cloud: &ParticleCloud) -> Result<GeometryHandle, RendererError> {
        use wgpu::util::DeviceExt;

        self.target()?;
        let device = &self.library.device;

        let instance_buffer = (!cloud.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("points instance buffer"),
                contents: cloud.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("points bind group"),
            layout: &self.uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let handle = GeometryHandle(self.next_handle());
        self.geometries.insert(
            handle,
            GeometryEntry {
                instance_buffer,
                count: cloud.len() as u32,
                uniform_buffer,
                bind_group,
            },
        );
        debug!("Uploaded {} points as {handle:?}", cloud.len());
        Ok(handle)
    }

    fn create_material(
        &mut self,
        material: &PointsMaterial,
    ) -> Result<MaterialHandle, RendererError> {
        let format = self.target()?.format();
        let pipeline = points::create_points_pipeline(
            &self.library.device,
            format,
            &self.uniform_layout,
            material.blending,
        );

        let handle = MaterialHandle(self.next_handle());
        self.materials.insert(
            handle,
            MaterialEntry {
                pipeline,
                material: *material,
            },
        );
        Ok(handle)
    }

    fn set_size(&mut self, size: PhysicalSize) {
        if let Some(target) = self.target.as_mut() {
            target.resize(&self.library.device, size);
        }
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RendererError> {
        let target = self.target()?;

        let output = match target.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                target.reconfigure(&self.library.device);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("Surface acquire timed out, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let size = target.size();
        let format = target.format();

        // Resolve every drawable first so uniform writes land before submit.
        let mut draws = Vec::with_capacity(scene.len());
        for object in scene.objects() {
            let (Some(geometry), Some(material)) = (object.geometry, object.material) else {
                continue;
            };
            let geometry_entry = self
                .geometries
                .get(&geometry)
                .ok_or_else(|| RendererError::UnknownHandle(format!("{geometry:?}")))?;
            let material_entry = self
                .materials
                .get(&material)
                .ok_or_else(|| RendererError::UnknownHandle(format!("{material:?}")))?;

            let uniforms = PointUniforms::compute(
                object,
                camera,
                scene.fog.as_ref(),
                &material_entry.material,
                size,
            );
            self.library.queue.write_buffer(
                &geometry_entry.uniform_buffer,
                0,
                bytemuck::bytes_of(&uniforms),
            );
            draws.push((geometry_entry, material_entry));
        }

        let mut encoder =
            self.library
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("stardust frame encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stardust points pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (geometry, material) in draws {
                let Some(buffer) = geometry.instance_buffer.as_ref() else {
                    continue;
                };
                pass.set_pipeline(&material.pipeline);
                pass.set_bind_group(0, &geometry.bind_group, &[]);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..VERTICES_PER_POINT, 0..geometry.count);
            }
        }

        self.library.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if !self.first_frame_logged {
            self.first_frame_logged = true;
            tracing::info!(
                "First frame presented ({}x{}, format={:?})",
                size.width,
                size.height,
                format,
            );
        }
        Ok(())
    }

    fn release_geometry(&mut self, handle: GeometryHandle) {
        if let Some(entry) = self.geometries.remove(&handle) {
            if let Some(buffer) = entry.instance_buffer {
                buffer.destroy();
            }
            entry.uniform_buffer.destroy();
            debug!("Released {handle:?}");
        }
    }

    fn release_material(&mut self, handle: MaterialHandle) {
        if self.materials.remove(&handle).is_some() {
            debug!("Released {handle:?}");
        }
    }

    fn dispose(&mut self) {
        if self.target.take().is_some() {
            debug!(
                "Renderer disposed ({} geometries, {} materials still held)",
                self.geometries.len(),
                self.materials.len()
            );
        }
    }
}

/// Clear color from `[renderer]` config; unparsable colors clear to black.
pub fn clear_color(config: &RendererConfig) -> wgpu::Color {
    let rgb = Rgb::from_hex(&config.clear_color).unwrap_or_else(|| {
        warn!("Invalid clear color {:?}, using black", config.clear_color);
        Rgb::BLACK
    });
    wgpu::Color {
        r: rgb.r as f64,
        g: rgb.g as f64,
        b: rgb.b as f64,
        a: config.clear_alpha,
    }
}
