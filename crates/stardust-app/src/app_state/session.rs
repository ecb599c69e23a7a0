//! Galaxy session setup and teardown.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use stardust_renderer::session::{FrameHost, SessionClock};
use stardust_renderer::{GalaxyParameters, GraphicsLibrary, RenderSession, WgpuRenderer};

use crate::frame_host::WindowFrameHost;

use super::core::StardustApp;
use super::types::GalaxySession;

impl StardustApp {
    /// Build the render session once both the library and the window exist.
    ///
    /// Any existing session is torn down first. Failures are logged and
    /// leave the app without an effect.
    pub(super) fn on_ready_and_surface_available(&mut self) {
        self.teardown();

        let Some(window) = self.window.clone() else {
            tracing::debug!("No window yet, deferring session");
            return;
        };
        let Some(library) = self.loader.library() else {
            tracing::debug!("Graphics library not ready, deferring session");
            return;
        };

        match self.build_session(window, library) {
            Ok(session) => self.session = Some(session),
            Err(e) => tracing::error!("Galaxy effect disabled: {e}"),
        }
        self.update_window_title();
    }

    fn build_session(
        &self,
        window: Arc<Window>,
        library: Arc<GraphicsLibrary>,
    ) -> stardust_common::Result<GalaxySession> {
        let params = GalaxyParameters::from_config(&self.config.galaxy)?;

        let host = WindowFrameHost::new(window.clone());
        let size = host
            .viewport()
            .surface_size(self.config.renderer.max_pixel_ratio);
        let renderer = WgpuRenderer::new(library, window, size, &self.config.renderer)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let session = RenderSession::start(
            renderer,
            host,
            Box::new(SessionClock::start()),
            &params,
            &mut rng,
            &self.config,
        )?;
        Ok(session)
    }

    /// Stop and drop the current session. Safe to call repeatedly.
    pub(super) fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
            tracing::info!("Galaxy session torn down");
        }
        self.update_window_title();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::StardustApp;
    use crate::loader::LibraryLoader;
    use stardust_config::schema::StardustConfig;

    #[test]
    fn teardown_on_fresh_app_does_not_panic() {
        let mut app = StardustApp::new(StardustConfig::default(), None, LibraryLoader::new());
        app.teardown();
        app.teardown();
        assert!(!app.has_session());
    }

    #[test]
    fn ready_without_window_builds_nothing() {
        let mut app = StardustApp::new(StardustConfig::default(), Some(7), LibraryLoader::new());
        app.on_ready_and_surface_available();
        assert!(!app.has_session());
    }
}
