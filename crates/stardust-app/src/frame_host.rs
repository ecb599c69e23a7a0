//! [`FrameHost`] over a winit window.
//!
//! Frame callbacks map onto `request_redraw`: a `RedrawRequested` runs a
//! tick only if the host still holds an uncancelled ticket, and that
//! ticket is consumed. Resize notifications come from
//! `WindowEvent::Resized` and are forwarded only while a subscription is
//! live.

use std::sync::Arc;

use stardust_renderer::session::{FrameHost, FrameRequest, ResizeSubscription, Viewport};
use winit::window::Window;

/// Ticket and subscription bookkeeping, independent of the window.
#[derive(Debug, Default)]
struct FrameTickets {
    next_id: u64,
    pending: Option<FrameRequest>,
    subscription: Option<ResizeSubscription>,
}

impl FrameTickets {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn issue_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id());
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }

    fn take_pending(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    fn subscribe(&mut self) -> ResizeSubscription {
        let subscription = ResizeSubscription(self.next_id());
        self.subscription = Some(subscription);
        subscription
    }

    fn unsubscribe(&mut self, subscription: ResizeSubscription) {
        if self.subscription == Some(subscription) {
            self.subscription = None;
        }
    }

    fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

pub struct WindowFrameHost {
    window: Arc<Window>,
    tickets: FrameTickets,
}

impl WindowFrameHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            tickets: FrameTickets::default(),
        }
    }

    /// Consume the outstanding frame ticket, if any. Called on
    /// `RedrawRequested`; `None` means the redraw was not asked for or
    /// was cancelled.
    pub fn take_pending(&mut self) -> Option<FrameRequest> {
        self.tickets.take_pending()
    }

    pub fn is_subscribed(&self) -> bool {
        self.tickets.is_subscribed()
    }
}

impl FrameHost for WindowFrameHost {
    fn request_frame(&mut self) -> FrameRequest {
        let request = self.tickets.issue_frame();
        self.window.request_redraw();
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.tickets.cancel_frame(request);
    }

    fn subscribe_resize(&mut self) -> ResizeSubscription {
        self.tickets.subscribe()
    }

    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription) {
        self.tickets.unsubscribe(subscription);
    }

    fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height, self.window.scale_factor())
    }
}
