use std::sync::Arc;

use stardust_config::schema::PresentModeConfig;
use tracing::{debug, info};
use winit::window::Window;

use super::library::GraphicsLibrary;
use super::types::{PhysicalSize, RendererError};

/// A configured presentation surface for one window.
pub struct WindowSurface {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl WindowSurface {
    /// Create and configure a surface for `window` on the library's device.
    pub fn new(
        library: &GraphicsLibrary,
        window: Arc<Window>,
        size: PhysicalSize,
        present_mode: PresentModeConfig,
    ) -> Result<Self, RendererError> {
        let size = size.non_zero();
        let surface = library.instance.create_surface(window)?;

        if !library.adapter.is_surface_supported(&surface) {
            return Err(RendererError::SurfaceError(
                "adapter cannot present to this window".into(),
            ));
        }

        let caps = surface.get_capabilities(&library.adapter);
        let format = preferred_format(&caps.formats).ok_or_else(|| {
            RendererError::SurfaceError("surface reports no texture formats".into())
        })?;
        let present_mode = select_present_mode(present_mode, &caps.present_modes);
        info!(
            "Surface format: {format:?}, present mode: {present_mode:?} (available: {:?})",
            caps.formats
        );

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
        };
        surface.configure(&library.device, &config);

        Ok(Self { surface, config })
    }

    /// Reconfigure after a resize. Zero sizes are clamped to one pixel.
    pub fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize) {
        let size = size.non_zero();
        if size.width == self.config.width && size.height == self.config.height {
            return;
        }
        debug!("Surface resized to {}x{}", size.width, size.height);
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(device, &self.config);
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&self, device: &wgpu::Device) {
        self.surface.configure(device, &self.config);
    }

    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> PhysicalSize {
        PhysicalSize::new(self.config.width, self.config.height)
    }
}

/// Pick the first non-sRGB format, falling back to the first offered.
///
/// Point colors are written to the framebuffer as-is, without a
/// linear-to-sRGB encode.
pub fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

/// Map the configured present mode, falling back to FIFO (always supported).
pub fn select_present_mode(
    requested: PresentModeConfig,
    available: &[wgpu::PresentMode],
) -> wgpu::PresentMode {
    let mode = match requested {
        PresentModeConfig::Fifo => wgpu::PresentMode::Fifo,
        PresentModeConfig::Mailbox => wgpu::PresentMode::Mailbox,
        PresentModeConfig::Immediate => wgpu::PresentMode::Immediate,
    };
    if available.contains(&mode) {
        mode
    } else {
        wgpu::PresentMode::Fifo
    }
}
