//! Cube cell geometry: corner positions and edge midpoints.
//!
//! The cube is centered on the origin. Each corner coordinate is
//! `((index >> axis) & 1) * size - size / 2`, so a size of 2 puts the corners
//! at ±1 on every axis.

use glam::Vec3;

use crate::constants::{corner_offset, CORNER_COUNT, DEFAULT_CUBE_SIZE, EDGE_COUNT};
use crate::edge_table::edge_corners;

/// Axis-aligned cube centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeGeometry {
  /// Full edge length per axis.
  pub size: Vec3,
}

impl Default for CubeGeometry {
  fn default() -> Self {
    Self::uniform(DEFAULT_CUBE_SIZE)
  }
}

impl CubeGeometry {
  pub fn new(size: Vec3) -> Self {
    Self { size }
  }

  /// Cube with the same edge length on every axis.
  pub fn uniform(size: f32) -> Self {
    Self {
      size: Vec3::splat(size),
    }
  }

  /// Distance from the center to a face, per axis.
  #[inline]
  pub fn half_extent(&self) -> Vec3 {
    self.size / 2.0
  }

  /// Position of a corner.
  ///
  /// # Panics
  ///
  /// Panics if `corner >= 8`.
  #[inline]
  pub fn corner_position(&self, corner: u8) -> Vec3 {
    assert!(
      (corner as usize) < CORNER_COUNT,
      "corner index {corner} out of range"
    );
    let [x, y, z] = corner_offset(corner);
    Vec3::new(
      x as f32 * self.size.x - self.size.x / 2.0,
      y as f32 * self.size.y - self.size.y / 2.0,
      z as f32 * self.size.z - self.size.z / 2.0,
    )
  }

  /// All 8 corner positions, indexed by corner.
  pub fn corner_positions(&self) -> [Vec3; CORNER_COUNT] {
    std::array::from_fn(|corner| self.corner_position(corner as u8))
  }

  /// Midpoint of a cube edge: the mean of its two corner positions.
  #[inline]
  pub fn edge_midpoint(&self, edge: usize) -> Vec3 {
    let [a, b] = edge_corners(edge);
    (self.corner_position(a) + self.corner_position(b)) * 0.5
  }

  /// The 12 cube edges as line-segment endpoint pairs.
  pub fn wireframe_segments(&self) -> Vec<[f32; 3]> {
    let mut segments = Vec::with_capacity(EDGE_COUNT * 2);
    for edge in 0..EDGE_COUNT {
      let [a, b] = edge_corners(edge);
      segments.push(self.corner_position(a).to_array());
      segments.push(self.corner_position(b).to_array());
    }
    segments
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
