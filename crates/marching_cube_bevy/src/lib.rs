//! Bevy presentation layer for marching_cube.
//!
//! Renders the cube wireframe, the eight corner markers and the current
//! surface, and feeds mouse and touch input back into the visualizer.

pub mod components;
pub mod input;
pub mod mesh;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use components::*;
pub use input::{apply_pointer, mouse_input, touch_input, PointerPhase};
pub use resources::*;

use marching_cube::CubeVisualizer;

/// Bevy plugin for the single-cell marching cubes visualizer.
#[derive(Default)]
pub struct MarchingCubePlugin {
  /// Initial visualizer state.
  pub visualizer: CubeVisualizer,
}

impl MarchingCubePlugin {
  pub fn new(visualizer: CubeVisualizer) -> Self {
    Self { visualizer }
  }
}

impl Plugin for MarchingCubePlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(Visualizer(self.visualizer.clone()))
      .init_resource::<PointerState>()
      .insert_resource(ClearColor(Color::BLACK))
      .add_systems(Startup, systems::startup::setup_scene)
      .add_systems(
        Update,
        (
          (input::mouse_input, input::touch_input),
          (
            systems::markers::sync_assembly_rotation,
            systems::markers::sync_corner_markers,
            systems::surface::rebuild_surface,
          ),
        )
          .chain(),
      );
  }
}
