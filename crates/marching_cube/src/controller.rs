//! Interaction controller: the visualizer's whole mutable state.
//!
//! Owns the corner flags, the assembly orientation and the current surface.
//! Input handlers mutate state and then run at most one triangulation pass,
//! so a pass always sees settled flags.

use glam::Vec2;

use crate::corners::CornerStates;
use crate::error::ConfigError;
use crate::geometry::CubeGeometry;
use crate::orientation::DragRotation;
use crate::outline::outline_segments;
use crate::picking::{pick_corners, CornerHits, PickRay};
use crate::triangulate::triangulate_into;
use crate::types::{TriangleSoup, VisualizerConfig};

/// Visualizer state for one cube.
#[derive(Clone, Debug)]
pub struct CubeVisualizer {
  config: VisualizerConfig,
  geometry: CubeGeometry,
  corners: CornerStates,
  rotation: DragRotation,
  surface: TriangleSoup,
  generation: u64,
}

impl Default for CubeVisualizer {
  fn default() -> Self {
    Self::build(VisualizerConfig::default(), CornerStates::new())
  }
}

impl CubeVisualizer {
  /// Create a visualizer with every corner empty.
  pub fn new(config: VisualizerConfig) -> Result<Self, ConfigError> {
    Self::with_corners(config, CornerStates::new())
  }

  /// Create a visualizer starting from the given corner states.
  pub fn with_corners(config: VisualizerConfig, corners: CornerStates) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::build(config, corners))
  }

  fn build(config: VisualizerConfig, corners: CornerStates) -> Self {
    debug_assert_eq!(crate::edge_table::validate_tables(), Ok(()));

    let mut visualizer = Self {
      geometry: CubeGeometry::new(config.cube_size),
      rotation: DragRotation::new(config.rotation_speed),
      config,
      corners,
      surface: TriangleSoup::new(),
      generation: 0,
    };
    visualizer.retriangulate();
    visualizer
  }

  pub fn config(&self) -> &VisualizerConfig {
    &self.config
  }

  pub fn geometry(&self) -> &CubeGeometry {
    &self.geometry
  }

  pub fn corners(&self) -> &CornerStates {
    &self.corners
  }

  pub fn rotation(&self) -> &DragRotation {
    &self.rotation
  }

  /// Current corner configuration.
  pub fn configuration(&self) -> u8 {
    self.corners.configuration()
  }

  /// Surface from the latest triangulation pass.
  pub fn surface(&self) -> &TriangleSoup {
    &self.surface
  }

  /// Outline segments of the current surface.
  pub fn outline(&self) -> Vec<[f32; 3]> {
    outline_segments(&self.surface, self.config.outline_threshold_degrees)
  }

  /// Incremented by every triangulation pass.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  /// True when the surface no longer matches the corner flags.
  pub fn is_stale(&self) -> bool {
    self.surface.configuration != self.corners.configuration()
  }

  /// Flip one corner. Does not retriangulate.
  pub fn toggle(&mut self, corner: u8) -> bool {
    let solid = self.corners.toggle(corner);

    #[cfg(feature = "tracing")]
    tracing::debug!(corner, solid, "toggled corner");

    solid
  }

  /// Run a full triangulation pass, replacing the surface.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "controller::retriangulate"))]
  pub fn retriangulate(&mut self) {
    triangulate_into(&self.corners, &self.geometry, &mut self.surface);
    self.generation += 1;

    #[cfg(feature = "tracing")]
    tracing::debug!(
      configuration = self.surface.configuration,
      triangles = self.surface.triangle_count(),
      generation = self.generation,
      "surface rebuilt"
    );
  }

  /// Toggle every picked corner, then triangulate once.
  ///
  /// Returns false (and leaves the surface untouched) when nothing was
  /// picked.
  pub fn apply_picks(&mut self, corners: &[u8]) -> bool {
    if corners.is_empty() {
      return false;
    }
    for &corner in corners {
      self.toggle(corner);
    }
    self.retriangulate();
    true
  }

  /// Corners under a pick ray, nearest first.
  pub fn hits(&self, ray: &PickRay) -> CornerHits {
    pick_corners(
      ray,
      &self.geometry,
      self.rotation.orientation,
      self.config.marker_radius,
    )
  }

  /// Pick with a ray and apply the result.
  pub fn pick(&mut self, ray: &PickRay) -> bool {
    let picked: Vec<u8> = self.hits(ray).iter().map(|hit| hit.corner).collect();
    self.apply_picks(&picked)
  }

  /// Feed a normalized cursor sample of an ongoing drag.
  pub fn drag_to(&mut self, cursor: Vec2) -> Option<Vec2> {
    self.rotation.drag_to(cursor)
  }

  /// End the current drag.
  pub fn release_drag(&mut self) {
    self.rotation.release();
  }

  /// Set every corner from a configuration and triangulate.
  pub fn set_configuration(&mut self, configuration: u8) {
    self.corners = CornerStates::from_configuration(configuration);
    self.retriangulate();
  }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
