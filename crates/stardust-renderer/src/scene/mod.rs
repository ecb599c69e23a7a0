//! Retained scene graph for the galaxy effect.
//!
//! The scene is deliberately flat: a list of point objects plus optional
//! fog. Objects reference GPU resources by handle; the renderer that minted
//! a handle is the only one that can release it.

mod camera;
mod material;
mod object;

pub use camera::*;
pub use material::*;
pub use object::*;

/// Index of an object inside its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Root container: fog settings plus the drawable objects.
#[derive(Debug, Default)]
pub struct Scene {
    pub fog: Option<FogExp2>,
    children: Vec<Points>,
}

impl Scene {
    pub fn new(fog: Option<FogExp2>) -> Self {
        Self {
            fog,
            children: Vec::new(),
        }
    }

    /// Insert `object` and return its id.
    pub fn add(&mut self, object: Points) -> ObjectId {
        self.children.push(object);
        ObjectId(self.children.len() - 1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Points> {
        self.children.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Points> {
        self.children.get_mut(id.0)
    }

    pub fn objects(&self) -> &[Points] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit every object mutably, in insertion order.
    pub fn traverse_mut(&mut self, mut visit: impl FnMut(&mut Points)) {
        for child in &mut self.children {
            visit(child);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
