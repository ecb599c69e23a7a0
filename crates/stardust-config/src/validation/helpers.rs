//! Shared range-validation helpers used by all domain validators.

use stardust_common::Rgb;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not a number (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not strictly positive or exceeds `max`.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64, max: f64) {
    if !(value > 0.0 && value <= max) {
        errors.push(format!("{name} = {value} is out of range (0, {max}]"));
    }
}

/// Push an error if `value` is not a `#RRGGBB` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Rgb::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a #RRGGBB color"));
    }
}
