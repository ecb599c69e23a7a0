use crate::matrix::{self, Mat4};

use super::{GeometryHandle, MaterialHandle};

/// A point-cloud object: geometry and material handles plus a rigid
/// transform (y-rotation and translation).
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    pub geometry: Option<GeometryHandle>,
    pub material: Option<MaterialHandle>,
    pub rotation_y: f32,
    pub position: [f32; 3],
    pub point_count: usize,
}

impl Points {
    /// A detached object; handles are attached once the renderer has
    /// uploaded the geometry and built the material.
    pub fn new(point_count: usize) -> Self {
        Self {
            geometry: None,
            material: None,
            rotation_y: 0.0,
            position: [0.0; 3],
            point_count,
        }
    }

    /// Object-to-world transform: translate after rotating about y.
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        matrix::mul(&matrix::translate(x, y, z), &matrix::rotate_y(self.rotation_y))
    }
}
