//! Galaxy generator parameter validation.

use crate::schema::StardustConfig;

use super::helpers::{validate_color, validate_positive, validate_range, validate_range_f64};

pub(crate) fn validate_galaxy(errors: &mut Vec<String>, config: &StardustConfig) {
    let galaxy = &config.galaxy;

    validate_range(errors, "galaxy.count", galaxy.count, 0, 2_000_000);
    validate_positive(errors, "galaxy.size", galaxy.size as f64, 10.0);
    validate_positive(errors, "galaxy.radius", galaxy.radius as f64, 10_000.0);
    validate_range(errors, "galaxy.branches", galaxy.branches, 1, 64);
    validate_range_f64(errors, "galaxy.spin", galaxy.spin as f64, -100.0, 100.0);
    validate_range_f64(
        errors,
        "galaxy.randomness",
        galaxy.randomness as f64,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "galaxy.randomness_power",
        galaxy.randomness_power as f64,
        1.0,
        20.0,
    );
    validate_color(errors, "galaxy.inside_color", &galaxy.inside_color);
    validate_color(errors, "galaxy.outside_color", &galaxy.outside_color);
}
