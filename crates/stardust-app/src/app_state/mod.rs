//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Bridges window lifecycle and graphics-library readiness to
//! the galaxy render session.

mod core;
mod event_handler;
mod init;
mod session;
mod title;
mod types;

pub use core::StardustApp;
pub use types::HostEvent;
