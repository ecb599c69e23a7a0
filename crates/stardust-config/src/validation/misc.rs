//! Renderer and window validation.

use crate::schema::StardustConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &StardustConfig) {
    validate_range_f64(
        errors,
        "renderer.max_pixel_ratio",
        config.renderer.max_pixel_ratio,
        0.5,
        4.0,
    );
    validate_color(errors, "renderer.clear_color", &config.renderer.clear_color);
    validate_range_f64(
        errors,
        "renderer.clear_alpha",
        config.renderer.clear_alpha,
        0.0,
        1.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &StardustConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16_384);
    validate_range(errors, "window.height", config.window.height, 64, 16_384);
}
