//! Render session: the live scene, camera and renderer for one window,
//! plus the frame loop that animates them.
//!
//! A session is `Running` from a successful [`RenderSession::start`] until
//! [`RenderSession::stop`]. Frame callbacks and resize notifications are
//! delivered by the embedding host through [`RenderSession::on_frame`] and
//! [`RenderSession::on_resize`]; anything that arrives after `stop` is
//! ignored.

mod clock;
mod host;
mod state;

pub use clock::*;
pub use host::*;
pub use state::*;
