//! StardustApp struct definition and constructor.

use std::sync::Arc;

use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use stardust_config::schema::StardustConfig;
use stardust_renderer::GraphicsLibrary;

use crate::loader::LibraryLoader;

use super::types::{GalaxySession, HostEvent};

/// Top-level application state.
pub struct StardustApp {
    pub(super) config: StardustConfig,
    pub(super) seed: Option<u64>,

    // Graphics library, resolved once and cached
    pub(super) loader: LibraryLoader<GraphicsLibrary>,
    pub(super) proxy: Option<EventLoopProxy<HostEvent>>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // At most one live session
    pub(super) session: Option<GalaxySession>,
}

impl StardustApp {
    pub fn new(
        config: StardustConfig,
        seed: Option<u64>,
        loader: LibraryLoader<GraphicsLibrary>,
    ) -> Self {
        Self {
            config,
            seed,
            loader,
            proxy: None,
            window: None,
            session: None,
        }
    }

    /// Route library-load completion through `proxy`.
    pub fn with_event_proxy(mut self, proxy: EventLoopProxy<HostEvent>) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn has_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_running())
    }
}
