use std::sync::Arc;

use stardust_renderer::{GraphicsLibrary, RenderSession, WgpuRenderer};

use crate::frame_host::WindowFrameHost;

/// Events delivered to the event loop from other threads.
#[derive(Debug)]
pub enum HostEvent {
    /// The graphics library finished loading, or failed to.
    LibraryLoaded(Result<Arc<GraphicsLibrary>, String>),
}

/// The live galaxy session for the app window.
pub(super) type GalaxySession = RenderSession<WgpuRenderer, WindowFrameHost>;
