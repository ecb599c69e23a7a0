//! Generator, parameter, and animation tests.

use std::f32::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::SeedableRng;
use stardust_common::Rgb;
use stardust_config::schema::{AnimationConfig, GalaxyConfig};

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn distance_xz(p: [f32; 3]) -> f32 {
    (p[0] * p[0] + p[2] * p[2]).sqrt()
}

fn color_distance(a: [f32; 3], b: Rgb) -> f32 {
    let b = b.to_array();
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

#[test]
fn produces_exactly_count_points() {
    let params = GalaxyParameters {
        count: 1234,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    assert_eq!(cloud.len(), 1234);
    assert_eq!(cloud.positions().count(), 1234);
    assert_eq!(cloud.colors().count(), 1234);
    assert_eq!(cloud.as_bytes().len(), 1234 * 24);
}

#[test]
fn zero_count_yields_empty_cloud() {
    let params = GalaxyParameters {
        count: 0,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    assert!(cloud.is_empty());
    assert!(cloud.as_bytes().is_empty());
}

#[test]
fn without_randomness_points_lie_inside_radius_on_flat_disk() {
    let params = GalaxyParameters {
        count: 5000,
        randomness: 0.0,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    for p in cloud.positions() {
        let d = distance_xz(p);
        assert!(d >= 0.0);
        assert!(d < params.radius, "distance {d} not inside radius {}", params.radius);
        assert_eq!(p[1], 0.0);
    }
}

#[test]
fn offsets_stay_within_documented_tolerance() {
    let params = GalaxyParameters::default();
    let cloud = generate(&params, &mut rng());
    let bound = params.radius * (1.0 + std::f32::consts::SQRT_2 * params.randomness) + 1e-3;
    let y_bound = params.radius * params.randomness + 1e-3;
    for p in cloud.positions() {
        assert!(distance_xz(p) <= bound);
        assert!(p[1].abs() <= y_bound);
    }
}

#[test]
fn some_points_bleed_past_nominal_radius() {
    let params = GalaxyParameters {
        count: 20_000,
        randomness: 1.0,
        randomness_power: 1.0,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    assert!(cloud.positions().any(|p| distance_xz(p) > params.radius));
}

#[test]
fn colors_follow_sampled_radius() {
    let params = GalaxyParameters {
        count: 500,
        randomness: 0.0,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    for v in cloud.vertices() {
        let expected = radial_color(
            params.inside_color,
            params.outside_color,
            distance_xz(v.position),
            params.radius,
        );
        assert!(color_distance(v.color, expected) < 1e-3);
    }
}

#[test]
fn color_blend_is_monotonic_in_radius() {
    let inside = Rgb::new(1.0, 0.0, 1.0);
    let outside = Rgb::new(0.0, 1.0, 1.0);
    let mut previous = -1.0;
    for step in 0..=40 {
        let r = step as f32;
        let c = radial_color(inside, outside, r, 40.0);
        let d = color_distance(c.to_array(), inside);
        assert!(d >= previous, "r = {r}: {d} < {previous}");
        previous = d;
    }
}

#[test]
fn branch_angles_for_five_branches() {
    let expected = [0.0, TAU / 5.0, 2.0 * TAU / 5.0, 3.0 * TAU / 5.0, 4.0 * TAU / 5.0];
    for (i, want) in expected.iter().enumerate() {
        assert!((branch_angle(i as u32, 5) - want).abs() < 1e-6);
    }
    assert!((branch_angle(2, 5) - 4.0 * PI / 5.0).abs() < 1e-6);
}

#[test]
fn branch_assignment_repeats_by_index() {
    for i in 0..50 {
        assert_eq!(branch_angle(i, 3), branch_angle(i + 3, 3));
    }
    assert_eq!(branch_angle(7, 1), 0.0);
}

#[test]
fn points_sit_on_their_arm_without_spin_or_randomness() {
    let params = GalaxyParameters {
        count: 300,
        branches: 3,
        spin: 0.0,
        randomness: 0.0,
        ..Default::default()
    };
    let cloud = generate(&params, &mut rng());
    for (i, p) in cloud.positions().enumerate() {
        if distance_xz(p) < 1e-2 {
            continue;
        }
        let angle = p[2].atan2(p[0]).rem_euclid(TAU);
        let want = branch_angle(i as u32, params.branches);
        let diff = (angle - want).abs();
        assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "point {i}: {angle} vs {want}");
    }
}

#[test]
fn same_seed_same_cloud() {
    let params = GalaxyParameters {
        count: 100,
        ..Default::default()
    };
    let a = generate(&params, &mut StdRng::seed_from_u64(7));
    let b = generate(&params, &mut StdRng::seed_from_u64(7));
    let c = generate(&params, &mut StdRng::seed_from_u64(8));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn random_offset_is_bounded_and_signed() {
    let mut rng = rng();
    let mut saw_positive = false;
    let mut saw_negative = false;
    for _ in 0..1000 {
        let o = random_offset(&mut rng, 3.0, 0.2, 10.0);
        assert!(o.abs() <= 2.0);
        saw_positive |= o > 0.0;
        saw_negative |= o < 0.0;
    }
    assert!(saw_positive && saw_negative);
}

#[test]
fn higher_power_concentrates_offsets() {
    let mean_abs = |power: f32| {
        let mut rng = rng();
        (0..5000)
            .map(|_| random_offset(&mut rng, power, 1.0, 1.0).abs())
            .sum::<f32>()
            / 5000.0
    };
    assert!(mean_abs(5.0) < mean_abs(1.0));
}

#[test]
fn particle_vertex_size_is_24_bytes() {
    assert_eq!(std::mem::size_of::<ParticleVertex>(), 24);
}

#[test]
fn parameters_from_default_config_match_default() {
    let params = GalaxyParameters::from_config(&GalaxyConfig::default()).unwrap();
    assert_eq!(params, GalaxyParameters::default());
}

#[test]
fn parameters_reject_bad_color() {
    let config = GalaxyConfig {
        inside_color: "magenta".into(),
        ..Default::default()
    };
    let err = GalaxyParameters::from_config(&config).unwrap_err();
    assert_eq!(err, GalaxyError::InvalidColor("magenta".into()));
}

#[test]
fn parameters_validate_invariants() {
    let base = GalaxyParameters::default();
    assert!(base.validate().is_ok());

    let p = GalaxyParameters { radius: 0.0, ..base.clone() };
    assert_eq!(p.validate(), Err(GalaxyError::InvalidRadius(0.0)));

    let p = GalaxyParameters { branches: 0, ..base.clone() };
    assert_eq!(p.validate(), Err(GalaxyError::NoBranches));

    let p = GalaxyParameters { randomness: -1.0, ..base.clone() };
    assert_eq!(p.validate(), Err(GalaxyError::NegativeRandomness(-1.0)));

    let p = GalaxyParameters { randomness_power: 0.5, ..base };
    assert_eq!(p.validate(), Err(GalaxyError::InvalidRandomnessPower(0.5)));
}

#[test]
fn animation_starts_at_rest() {
    let t = GalaxyAnimation::default().transform_at(0.0);
    assert_eq!(t.rotation_y, 0.0);
    assert_eq!(t.offset_y, 0.0);
}

#[test]
fn animation_rotates_at_configured_rate() {
    let t = GalaxyAnimation::default().transform_at(10.0);
    assert!((t.rotation_y - 0.5).abs() < 1e-6);
    assert!((t.offset_y - 2.0f32.sin()).abs() < 1e-6);
}

#[test]
fn animation_bob_period_is_about_31_seconds() {
    let animation = GalaxyAnimation::default();
    let period = TAU / 0.2;
    let a = animation.transform_at(3.0).offset_y;
    let b = animation.transform_at(3.0 + period).offset_y;
    assert!((a - b).abs() < 1e-4);
    assert!((period - 31.4159).abs() < 1e-3);
}

#[test]
fn animation_amplitude_bounds_offset() {
    let animation = GalaxyAnimation::from_config(&AnimationConfig {
        bob_amplitude: 2.5,
        ..Default::default()
    });
    for step in 0..200 {
        let t = animation.transform_at(step as f32 * 0.37);
        assert!(t.offset_y.abs() <= 2.5 + 1e-6);
    }
}
