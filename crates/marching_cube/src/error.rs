//! Error types for case table validation and visualizer configuration.

use thiserror::Error;

/// Consistency violation in the static case tables, or a lookup outside the
/// table domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
  #[error("edge index {edge} is outside 0..12")]
  EdgeOutOfRange { edge: usize },

  #[error("edge {edge} references corner {corner}, outside 0..8")]
  CornerOutOfRange { edge: usize, corner: u8 },

  #[error("edge {edge} connects corner {corner} to itself")]
  DegenerateEdge { edge: usize, corner: u8 },

  #[error("configuration {configuration:#010b} has {count} triangles (max {max})")]
  TooManyTriangles {
    configuration: u8,
    count: usize,
    max: usize,
  },

  #[error("configuration {configuration:#010b} places a vertex on edge {edge}, which the surface does not cross")]
  EdgeNotCrossed { configuration: u8, edge: usize },

  #[error("configuration {configuration:#010b} never places a vertex on crossed edge {edge}")]
  EdgeMissing { configuration: u8, edge: usize },

  #[error("configuration {configuration:#010b} has triangle {triangle:?} with a repeated edge")]
  DegenerateTriangle {
    configuration: u8,
    triangle: [u8; 3],
  },

  #[error("configuration {configuration:#010b}: interior segment between edges {edges:?} is not shared by two oppositely wound triangles")]
  InteriorSegment { configuration: u8, edges: [usize; 2] },

  #[error("configuration {configuration:#010b}: face segment between edges {edges:?} is repeated or crosses an ambiguous face")]
  FaceSegment { configuration: u8, edges: [usize; 2] },

  #[error("configuration {value} is outside 0..=255")]
  ConfigurationOutOfRange { value: u32 },
}

/// Invalid [`VisualizerConfig`](crate::types::VisualizerConfig) value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("cube size must be positive and finite on every axis, got {0:?}")]
  InvalidCubeSize([f32; 3]),

  #[error("marker radius must be positive and finite, got {0}")]
  InvalidMarkerRadius(f32),

  #[error("rotation speed must be finite, got {0}")]
  InvalidRotationSpeed(f32),

  #[error("outline threshold must be within 0..=180 degrees, got {0}")]
  InvalidOutlineThreshold(f32),
}
