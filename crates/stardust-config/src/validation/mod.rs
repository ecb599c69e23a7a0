//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod galaxy;
mod helpers;
mod misc;
mod scene;


use crate::schema::StardustConfig;
use stardust_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StardustConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    galaxy::validate_galaxy(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_animation(&mut errors, config);
    scene::validate_fog(&mut errors, config);
    misc::validate_renderer(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
