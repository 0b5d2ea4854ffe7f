//! Surface entity rebuild after each triangulation pass.

use bevy::prelude::*;
use marching_cube::outline::triangle_outline;
use marching_cube::TriangleOutput;

use crate::components::{SurfaceFill, SurfaceOutline, SurfaceRoot};
use crate::mesh::{line_mesh, surface_mesh, triangle_mesh};
use crate::resources::{SurfaceMaterials, Visualizer};

/// Replace the surface entities when the visualizer has run a new pass.
///
/// The previous children of [`SurfaceRoot`] are despawned first, so no
/// surface entity from an older pass survives.
pub fn rebuild_surface(
  mut commands: Commands,
  visualizer: Res<Visualizer>,
  materials: Option<Res<SurfaceMaterials>>,
  mut meshes: ResMut<Assets<Mesh>>,
  roots: Query<Entity, With<SurfaceRoot>>,
  mut built: Local<Option<u64>>,
) {
  let Some(materials) = materials else {
    return;
  };
  let Ok(root) = roots.single() else {
    return;
  };

  let generation = visualizer.generation();
  if *built == Some(generation) {
    return;
  }
  *built = Some(generation);

  commands.entity(root).despawn_related::<Children>();

  let surface = visualizer.surface();
  if surface.is_empty() {
    debug!("Surface cleared (generation {})", generation);
    return;
  }

  match visualizer.config().triangle_output {
    TriangleOutput::Shared => {
      let fill = meshes.add(surface_mesh(surface));
      let outline = meshes.add(line_mesh(&visualizer.outline()));
      commands.spawn((
        SurfaceFill,
        Mesh3d(fill),
        MeshMaterial3d(materials.fill.clone()),
        ChildOf(root),
      ));
      commands.spawn((
        SurfaceOutline,
        Mesh3d(outline),
        MeshMaterial3d(materials.outline.clone()),
        ChildOf(root),
      ));
    }
    TriangleOutput::PerTriangle => {
      for triangle in surface.triangles() {
        let fill = meshes.add(triangle_mesh(triangle));
        let outline = meshes.add(line_mesh(&triangle_outline(triangle)));
        commands.spawn((
          SurfaceFill,
          Mesh3d(fill),
          MeshMaterial3d(materials.fill.clone()),
          ChildOf(root),
        ));
        commands.spawn((
          SurfaceOutline,
          Mesh3d(outline),
          MeshMaterial3d(materials.outline.clone()),
          ChildOf(root),
        ));
      }
    }
  }

  debug!(
    "Surface rebuilt: configuration={:#010b}, triangles={}, generation={}",
    surface.configuration,
    surface.triangle_count(),
    generation
  );
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
