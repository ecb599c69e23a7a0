use std::f32::consts::TAU;

use rand::Rng;
use stardust_common::Rgb;

use super::cloud::{ParticleCloud, ParticleVertex};
use super::params::GalaxyParameters;

/// Arm angle for point `index`: arms are assigned round-robin by index.
pub fn branch_angle(index: u32, branches: u32) -> f32 {
    let branches = branches.max(1);
    (index % branches) as f32 / branches as f32 * TAU
}

/// One axis of jitter: `random^power * ±1 * randomness * radius`.
pub fn random_offset<R: Rng + ?Sized>(rng: &mut R, power: f32, randomness: f32, radius: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    magnitude * sign * randomness * radius
}

/// Color for a point at distance `radius` from the core.
pub fn radial_color(inside: Rgb, outside: Rgb, radius: f32, max_radius: f32) -> Rgb {
    inside.lerp(outside, radius / max_radius)
}

/// Generate the spiral point cloud. Shape is fixed by `params`, placement
/// by `rng`.
pub fn generate<R: Rng + ?Sized>(params: &GalaxyParameters, rng: &mut R) -> ParticleCloud {
    let mut vertices = Vec::with_capacity(params.count as usize);

    for i in 0..params.count {
        let radius = rng.gen::<f32>() * params.radius;
        let spin_angle = radius * params.spin;
        let angle = branch_angle(i, params.branches) + spin_angle;

        let offset_x = random_offset(rng, params.randomness_power, params.randomness, radius);
        let offset_y = random_offset(rng, params.randomness_power, params.randomness, radius);
        let offset_z = random_offset(rng, params.randomness_power, params.randomness, radius);

        // Flat disk: no base elevation, only jitter on y.
        let position = [
            angle.cos() * radius + offset_x,
            offset_y,
            angle.sin() * radius + offset_z,
        ];
        let color = radial_color(
            params.inside_color,
            params.outside_color,
            radius,
            params.radius,
        );

        vertices.push(ParticleVertex {
            position,
            color: color.to_array(),
        });
    }

    ParticleCloud::from_vertices(vertices)
}
