use stardust_config::schema::CameraConfig;

use crate::matrix::{self, Mat4, Vec3};

/// Perspective camera looking from `position` at `target`, y-up.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov: config.fov,
            aspect: sanitize_aspect(aspect),
            near: config.near,
            far: config.far,
            position: config.position,
            target: config.target,
        }
    }

    /// Update the aspect ratio. Degenerate values fall back to 1.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    pub fn view_matrix(&self) -> Mat4 {
        matrix::look_at(self.position, self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection_matrix(&self) -> Mat4 {
        matrix::perspective(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let cam = PerspectiveCamera::from_config(&CameraConfig::default(), 16.0 / 9.0);
        assert!((cam.fov - 75.0).abs() < f32::EPSILON);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(cam.position, [0.0, 10.0, 30.0]);
    }

    #[test]
    fn degenerate_aspect_falls_back() {
        let mut cam = PerspectiveCamera::from_config(&CameraConfig::default(), 0.0);
        assert_eq!(cam.aspect, 1.0);
        cam.set_aspect(f32::NAN);
        assert_eq!(cam.aspect, 1.0);
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = PerspectiveCamera::from_config(&CameraConfig::default(), 1.5);
        let vp = matrix::mul(&cam.projection_matrix(), &cam.view_matrix());
        let clip = matrix::transform_point(&vp, cam.target);
        assert!(clip[3] > 0.0);
        assert!((clip[0] / clip[3]).abs() < 1e-5);
        assert!((clip[1] / clip[3]).abs() < 1e-5);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }

    #[test]
    fn aspect_change_only_scales_x() {
        let mut cam = PerspectiveCamera::from_config(&CameraConfig::default(), 1.0);
        let before = cam.projection_matrix();
        cam.set_aspect(2.0);
        let after = cam.projection_matrix();
        assert!((after[0] - before[0] / 2.0).abs() < 1e-6);
        assert_eq!(after[5], before[5]);
    }
}
