//! Corner marker colors and assembly rotation.

use bevy::prelude::*;

use crate::components::{CornerMarker, CubeAssembly};
use crate::resources::{CornerMaterials, Visualizer};

/// Recolor markers to match the corner flags.
pub fn sync_corner_markers(
  visualizer: Res<Visualizer>,
  materials: Option<Res<CornerMaterials>>,
  mut markers: Query<(&CornerMarker, &mut MeshMaterial3d<StandardMaterial>)>,
) {
  let Some(materials) = materials else {
    return;
  };
  if !visualizer.is_changed() && !materials.is_added() {
    return;
  }

  for (marker, mut material) in &mut markers {
    let handle = materials.for_state(visualizer.corners().is_solid(marker.corner));
    if material.0 != handle {
      material.0 = handle;
    }
  }
}

/// Apply the drag orientation to the assembly root.
pub fn sync_assembly_rotation(
  visualizer: Res<Visualizer>,
  mut assemblies: Query<&mut Transform, With<CubeAssembly>>,
) {
  let orientation = visualizer.rotation().orientation;
  for mut transform in &mut assemblies {
    if transform.rotation != orientation {
      transform.rotation = orientation;
    }
  }
}
