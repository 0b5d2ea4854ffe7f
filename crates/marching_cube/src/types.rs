//! Core data types for single-cell triangulation.

use glam::Vec3;

use crate::constants::*;
use crate::error::ConfigError;

/// How a renderer should materialize the triangle soup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriangleOutput {
  /// One shared mesh (and one outline) for the whole surface.
  #[default]
  Shared,

  /// One mesh (and one outline) per triangle.
  PerTriangle,
}

/// Triangulation result: a flat point list, 3 points per triangle.
///
/// No index buffer and no identity across passes; each pass replaces the
/// whole soup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSoup {
  /// Configuration this soup was built from.
  pub configuration: u8,

  /// Triangle vertices in winding order.
  pub positions: Vec<[f32; 3]>,
}

impl TriangleSoup {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all points, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.configuration = EMPTY_CONFIGURATION;
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of triangles in the soup.
  pub fn triangle_count(&self) -> usize {
    self.positions.len() / 3
  }

  /// Triangles as vertex triples.
  pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    self
      .positions
      .chunks_exact(3)
      .map(|t| [Vec3::from(t[0]), Vec3::from(t[1]), Vec3::from(t[2])])
  }
}

/// Configuration for the visualizer core.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
  /// Full cube edge length per axis.
  pub cube_size: Vec3,

  /// Radius of the pickable corner markers.
  pub marker_radius: f32,

  /// Drag rotation multiplier.
  pub rotation_speed: f32,

  /// Mesh layout requested from the renderer.
  pub triangle_output: TriangleOutput,

  /// Shared outline edges between faces closer than this angle are hidden.
  pub outline_threshold_degrees: f32,
}

impl Default for VisualizerConfig {
  fn default() -> Self {
    Self {
      cube_size: Vec3::splat(DEFAULT_CUBE_SIZE),
      marker_radius: DEFAULT_MARKER_RADIUS,
      rotation_speed: DEFAULT_ROTATION_SPEED,
      triangle_output: TriangleOutput::default(),
      outline_threshold_degrees: DEFAULT_OUTLINE_THRESHOLD_DEGREES,
    }
  }
}

impl VisualizerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_cube_size(mut self, size: Vec3) -> Self {
    self.cube_size = size;
    self
  }

  pub fn with_marker_radius(mut self, radius: f32) -> Self {
    self.marker_radius = radius;
    self
  }

  pub fn with_rotation_speed(mut self, speed: f32) -> Self {
    self.rotation_speed = speed;
    self
  }

  pub fn with_triangle_output(mut self, output: TriangleOutput) -> Self {
    self.triangle_output = output;
    self
  }

  pub fn with_outline_threshold(mut self, degrees: f32) -> Self {
    self.outline_threshold_degrees = degrees;
    self
  }

  /// Reject values the geometry cannot use.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let size = self.cube_size;
    if !size.is_finite() || size.min_element() <= 0.0 {
      return Err(ConfigError::InvalidCubeSize(size.to_array()));
    }
    if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
      return Err(ConfigError::InvalidMarkerRadius(self.marker_radius));
    }
    if !self.rotation_speed.is_finite() {
      return Err(ConfigError::InvalidRotationSpeed(self.rotation_speed));
    }
    if !(0.0..=180.0).contains(&self.outline_threshold_degrees) {
      return Err(ConfigError::InvalidOutlineThreshold(
        self.outline_threshold_degrees,
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
