//! Window creation and graphics-library loading.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use stardust_renderer::GraphicsLibrary;

use crate::loader::LoadSignal;

use super::core::StardustApp;
use super::types::HostEvent;

impl StardustApp {
    /// Create the window (the drawable surface).
    /// Returns `false` if creation failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.loading_title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        match event_loop.create_window(attrs) {
            Ok(w) => {
                let size = w.inner_size();
                tracing::info!(
                    "Window created ({}x{}, scale {})",
                    size.width,
                    size.height,
                    w.scale_factor()
                );
                self.window = Some(Arc::new(w));
                true
            }
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                false
            }
        }
    }

    /// Make sure the graphics library is loaded, starting the fetch if needed.
    ///
    /// Builds the session right away when the library is already cached;
    /// otherwise the `HostEvent::LibraryLoaded` event does it later.
    pub(super) fn ensure_graphics_library_loaded(&mut self) {
        let proxy = self.proxy.clone();
        let signal = self.loader.ensure_loaded(
            || pollster::block_on(GraphicsLibrary::acquire()).map_err(|e| e.to_string()),
            move |result| {
                let Some(proxy) = proxy else {
                    tracing::warn!("No event loop to deliver the graphics library to");
                    return;
                };
                if proxy.send_event(HostEvent::LibraryLoaded(result)).is_err() {
                    tracing::debug!("Event loop closed before the graphics library loaded");
                }
            },
        );

        match signal {
            LoadSignal::Ready => self.on_ready_and_surface_available(),
            LoadSignal::Pending => tracing::debug!("Waiting for graphics library"),
            LoadSignal::Failed => {}
        }
    }

    /// Apply a finished library load delivered through the event loop.
    pub(super) fn handle_library_loaded(
        &mut self,
        result: Result<Arc<GraphicsLibrary>, String>,
    ) {
        if self.loader.complete(result) == LoadSignal::Ready {
            self.on_ready_and_surface_available();
        }
    }
}
