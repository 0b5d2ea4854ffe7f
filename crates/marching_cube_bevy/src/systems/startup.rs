//! Startup system: camera, cube assembly and materials.

use bevy::prelude::*;

use crate::components::{CornerMarker, CubeAssembly, CubeWireframe, MainCamera, SurfaceRoot};
use crate::mesh::line_mesh;
use crate::resources::{CornerMaterials, SurfaceMaterials, Visualizer};

/// Vertical field of view of the main camera.
const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Camera distance along +Z, looking at the origin.
const CAMERA_DISTANCE: f32 = 5.0;

/// Latitude/longitude segments of the corner spheres.
const MARKER_SEGMENTS: u32 = 16;

/// Create materials and spawn the camera and the cube assembly.
pub fn setup_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  visualizer: Res<Visualizer>,
) {
  let geometry = *visualizer.geometry();
  let config = visualizer.config();

  info!(
    "Setting up cube scene: size={:?}, marker_radius={}, output={:?}",
    geometry.size, config.marker_radius, config.triangle_output
  );

  let corner_materials = CornerMaterials {
    empty: materials.add(unlit(Color::WHITE)),
    solid: materials.add(unlit(Color::srgb(1.0, 0.0, 0.0))),
  };
  let surface_materials = SurfaceMaterials {
    fill: materials.add(StandardMaterial {
      cull_mode: None,
      double_sided: true,
      ..unlit(Color::srgb(0.0, 0.0, 1.0))
    }),
    // Pulled toward the camera so outlines win against the fill
    outline: materials.add(StandardMaterial {
      depth_bias: 10.0,
      ..unlit(Color::BLACK)
    }),
  };
  let wireframe_material = materials.add(unlit(Color::WHITE));

  commands.spawn((
    Camera3d::default(),
    Projection::from(PerspectiveProjection {
      fov: CAMERA_FOV_DEGREES.to_radians(),
      near: 0.1,
      far: 1000.0,
      ..default()
    }),
    Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    MainCamera,
  ));

  let wireframe = meshes.add(line_mesh(&geometry.wireframe_segments()));
  let marker = meshes.add(Sphere::new(config.marker_radius).mesh().uv(MARKER_SEGMENTS, MARKER_SEGMENTS));

  commands
    .spawn((
      CubeAssembly,
      Transform::from_rotation(visualizer.rotation().orientation),
      Visibility::default(),
    ))
    .with_children(|assembly| {
      assembly.spawn((
        CubeWireframe,
        Mesh3d(wireframe),
        MeshMaterial3d(wireframe_material),
      ));

      for (corner, solid) in visualizer.corners().iter() {
        assembly.spawn((
          CornerMarker { corner },
          Mesh3d(marker.clone()),
          MeshMaterial3d(corner_materials.for_state(solid)),
          Transform::from_translation(geometry.corner_position(corner)),
        ));
      }

      assembly.spawn((SurfaceRoot, Transform::default(), Visibility::default()));
    });

  commands.insert_resource(corner_materials);
  commands.insert_resource(surface_materials);

  info!("Cube scene setup complete");
}

fn unlit(color: Color) -> StandardMaterial {
  StandardMaterial {
    base_color: color,
    unlit: true,
    ..default()
  }
}
