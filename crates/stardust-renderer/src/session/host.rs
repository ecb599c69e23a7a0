use crate::gpu::PhysicalSize;

/// Ticket for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Ticket for a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeSubscription(pub u64);

/// Current viewport: physical pixel size plus the display scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale_factor: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Width over height; 1 for a collapsed viewport.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Drawing-buffer size with the pixel ratio capped at `max_pixel_ratio`.
    ///
    /// The logical size is kept; only the density is reduced on very
    /// high-DPI displays.
    pub fn surface_size(&self, max_pixel_ratio: f64) -> PhysicalSize {
        let scale = if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        };
        let ratio = scale.min(max_pixel_ratio.max(f64::MIN_POSITIVE));
        let px = |physical: u32| ((physical as f64 / scale) * ratio).round().max(1.0) as u32;
        PhysicalSize::new(px(self.width), px(self.height))
    }
}

/// The window-side capabilities a render session needs: frame scheduling,
/// resize notifications and the current viewport.
pub trait FrameHost {
    /// Ask for one frame callback at the next refresh.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a pending callback. Cancelling an already-fired or unknown
    /// request is a no-op.
    fn cancel_frame(&mut self, request: FrameRequest);

    fn subscribe_resize(&mut self) -> ResizeSubscription;

    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription);

    fn viewport(&self) -> Viewport;
}
