//! Bevy resources for the cube visualizer.

use bevy::prelude::*;
use marching_cube::CubeVisualizer;

/// Shared visualizer state.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Visualizer(pub CubeVisualizer);

/// Marker materials for the two corner states.
#[derive(Resource, Clone)]
pub struct CornerMaterials {
  pub empty: Handle<StandardMaterial>,
  pub solid: Handle<StandardMaterial>,
}

impl CornerMaterials {
  /// Material for a corner in the given state.
  pub fn for_state(&self, solid: bool) -> Handle<StandardMaterial> {
    if solid {
      self.solid.clone()
    } else {
      self.empty.clone()
    }
  }
}

/// Surface fill and outline materials.
#[derive(Resource, Clone)]
pub struct SurfaceMaterials {
  pub fill: Handle<StandardMaterial>,
  pub outline: Handle<StandardMaterial>,
}

/// Press tracking used to tell a click from a drag.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct PointerState {
  /// Screen position where the current press started.
  pub press: Option<Vec2>,
  /// Largest distance (pixels) from the press point so far.
  pub travel: f32,
}

impl PointerState {
  /// Travel below which a release counts as a click.
  pub const CLICK_TOLERANCE: f32 = 5.0;

  pub fn begin(&mut self, position: Vec2) {
    self.press = Some(position);
    self.travel = 0.0;
  }

  pub fn track(&mut self, position: Vec2) {
    if let Some(start) = self.press {
      self.travel = self.travel.max(start.distance(position));
    }
  }

  /// Finish the press. Returns true when it was a click.
  pub fn end(&mut self) -> bool {
    let was_click = self.press.is_some() && self.travel < Self::CLICK_TOLERANCE;
    self.press = None;
    self.travel = 0.0;
    was_click
  }
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;
