//! Camera, animation, and fog validation.

use crate::schema::StardustConfig;

use super::helpers::{validate_color, validate_positive, validate_range_f64};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &StardustConfig) {
    let camera = &config.camera;

    validate_range_f64(errors, "camera.fov", camera.fov as f64, 1.0, 179.0);
    validate_positive(errors, "camera.near", camera.near as f64, 1_000_000.0);
    validate_positive(errors, "camera.far", camera.far as f64, 1_000_000.0);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    let view = [
        camera.target[0] - camera.position[0],
        camera.target[1] - camera.position[1],
        camera.target[2] - camera.position[2],
    ];
    let length = (view[0] * view[0] + view[1] * view[1] + view[2] * view[2]).sqrt();
    let horizontal = (view[0] * view[0] + view[2] * view[2]).sqrt();
    if camera.position == camera.target {
        errors.push("camera.position must differ from camera.target".to_string());
    } else if horizontal <= length * 1e-6 {
        // The view basis is built against +Y; a vertical view has no right vector.
        errors.push(format!(
            "camera.position = {:?} is directly above or below camera.target = {:?}",
            camera.position, camera.target
        ));
    }
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &StardustConfig) {
    let animation = &config.animation;

    validate_range_f64(
        errors,
        "animation.rotation_speed",
        animation.rotation_speed as f64,
        -10.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "animation.bob_frequency",
        animation.bob_frequency as f64,
        -10.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "animation.bob_amplitude",
        animation.bob_amplitude as f64,
        0.0,
        100.0,
    );
}

pub(crate) fn validate_fog(errors: &mut Vec<String>, config: &StardustConfig) {
    validate_color(errors, "fog.color", &config.fog.color);
    validate_range_f64(errors, "fog.density", config.fog.density as f64, 0.0, 1.0);
}
