//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use stardust_renderer::session::Viewport;

use super::core::StardustApp;
use super::types::HostEvent;

impl ApplicationHandler<HostEvent> for StardustApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }
        self.ensure_graphics_library_loaded();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: HostEvent) {
        match event {
            HostEvent::LibraryLoaded(result) => self.handle_library_loaded(result),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.teardown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                if let Some(ref mut session) = self.session {
                    if session.host().is_subscribed() {
                        session.on_resize(Viewport::new(size.width, size.height, scale_factor));
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(ref mut session) = self.session {
                    if let Some(request) = session.host_mut().take_pending() {
                        session.on_frame(request);
                    }
                }
            }

            _ => {}
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface may not outlive a suspend.
        self.teardown();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
        tracing::info!("Shutdown complete");
    }
}
