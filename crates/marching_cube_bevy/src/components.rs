//! Bevy components for the cube visualizer scene.

use bevy::prelude::*;

/// Root of the rotating assembly: wireframe, corner markers and surface.
#[derive(Component)]
pub struct CubeAssembly;

/// Sphere marking one cube corner.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerMarker {
  /// Corner index (0..8).
  pub corner: u8,
}

/// The 12-edge cube wireframe.
#[derive(Component)]
pub struct CubeWireframe;

/// Parent of every surface entity. Its children are replaced on each
/// triangulation pass.
#[derive(Component)]
pub struct SurfaceRoot;

/// Filled surface mesh (whole soup, or one triangle in per-triangle mode).
#[derive(Component)]
pub struct SurfaceFill;

/// Outline mesh drawn over the surface fill.
#[derive(Component)]
pub struct SurfaceOutline;

/// Camera used for picking.
#[derive(Component)]
pub struct MainCamera;
