//! Window title management: loading indicator until the galaxy is up.

use super::core::StardustApp;

impl StardustApp {
    /// The title for the current state.
    pub(super) fn window_title(&self) -> &str {
        if self.has_session() {
            &self.config.window.title
        } else {
            &self.config.window.loading_title
        }
    }

    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(self.window_title());
    }
}

// =============================================================================
// TESTS
// =============================================================================
