//! Procedural spiral-galaxy point cloud.
//!
//! Each point is assigned to an arm by index, pushed along the arm by a
//! radius-dependent spin, then jittered with power-law shaped offsets.
//! Colors blend linearly from the inside color to the outside color by
//! normalized radius.

mod animation;
mod cloud;
mod generator;
mod params;

pub use animation::*;
pub use cloud::*;
pub use generator::*;
pub use params::*;

#[cfg(test)]
mod tests;
