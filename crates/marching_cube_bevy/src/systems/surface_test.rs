use marching_cube::{CubeVisualizer, VisualizerConfig};

use super::*;

fn test_app(visualizer: CubeVisualizer) -> App {
  let mut app = App::new();
  app
    .init_resource::<Assets<Mesh>>()
    .insert_resource(Visualizer(visualizer))
    .insert_resource(SurfaceMaterials {
      fill: Handle::default(),
      outline: Handle::default(),
    })
    .add_systems(Update, rebuild_surface);
  app.world_mut().spawn(SurfaceRoot);
  app
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
  let world = app.world_mut();
  let mut query = world.query_filtered::<Entity, F>();
  query.iter(world).count()
}

#[test]
fn test_empty_surface_spawns_nothing() {
  let mut app = test_app(CubeVisualizer::default());
  app.update();

  assert_eq!(count::<With<SurfaceFill>>(&mut app), 0);
  assert_eq!(count::<With<SurfaceOutline>>(&mut app), 0);
}

#[test]
fn test_shared_output_spawns_one_fill_and_outline() {
  let mut app = test_app(CubeVisualizer::default());
  app.update();

  app.world_mut().resource_mut::<Visualizer>().apply_picks(&[0, 1]);
  app.update();

  assert_eq!(count::<With<SurfaceFill>>(&mut app), 1);
  assert_eq!(count::<With<SurfaceOutline>>(&mut app), 1);
}

#[test]
fn test_rebuild_replaces_previous_surface() {
  let mut app = test_app(CubeVisualizer::default());
  app.world_mut().resource_mut::<Visualizer>().apply_picks(&[0]);
  app.update();
  assert_eq!(count::<With<SurfaceFill>>(&mut app), 1);

  app.world_mut().resource_mut::<Visualizer>().apply_picks(&[7]);
  app.update();
  assert_eq!(count::<With<SurfaceFill>>(&mut app), 1);

  app.world_mut().resource_mut::<Visualizer>().apply_picks(&[0, 7]);
  app.update();
  assert_eq!(count::<With<SurfaceFill>>(&mut app), 0);
  assert_eq!(count::<With<SurfaceOutline>>(&mut app), 0);
}

#[test]
fn test_unchanged_generation_keeps_entities() {
  let mut app = test_app(CubeVisualizer::default());
  app.world_mut().resource_mut::<Visualizer>().apply_picks(&[3]);
  app.update();

  let first: Vec<Entity> = {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<SurfaceFill>>();
    query.iter(world).collect()
  };

  // Toggle without a pass: surface is stale but not rebuilt
  app.world_mut().resource_mut::<Visualizer>().toggle(4);
  app.update();

  let second: Vec<Entity> = {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<SurfaceFill>>();
    query.iter(world).collect()
  };
  assert_eq!(first, second);
}

#[test]
fn test_per_triangle_output() {
  let config = VisualizerConfig::new().with_triangle_output(TriangleOutput::PerTriangle);
  let mut visualizer = CubeVisualizer::new(config).expect("valid config");
  visualizer.set_configuration(0b0011_1101);
  let triangles = visualizer.surface().triangle_count();
  assert_eq!(triangles, 5);

  let mut app = test_app(visualizer);
  app.update();

  assert_eq!(count::<With<SurfaceFill>>(&mut app), triangles);
  assert_eq!(count::<With<SurfaceOutline>>(&mut app), triangles);
}
