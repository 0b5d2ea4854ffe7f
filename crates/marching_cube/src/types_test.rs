use glam::Vec3;

use super::*;

#[test]
fn test_soup_clear() {
  let mut soup = TriangleSoup::new();
  soup.configuration = 3;
  soup.positions.extend([[0.0; 3], [1.0; 3], [2.0; 3]]);
  assert_eq!(soup.triangle_count(), 1);

  soup.clear();

  assert!(soup.is_empty());
  assert_eq!(soup.triangle_count(), 0);
  assert_eq!(soup.configuration, 0);
}

#[test]
fn test_soup_triangles_groups_by_three() {
  let soup = TriangleSoup {
    configuration: 0,
    positions: vec![
      [0.0, 0.0, 0.0],
      [1.0, 0.0, 0.0],
      [0.0, 1.0, 0.0],
      [0.0, 0.0, 1.0],
      [1.0, 0.0, 1.0],
      [0.0, 1.0, 1.0],
    ],
  };

  let triangles: Vec<_> = soup.triangles().collect();
  assert_eq!(triangles.len(), 2);
  assert_eq!(triangles[1][2], Vec3::new(0.0, 1.0, 1.0));
}

#[test]
fn test_config_builder() {
  let config = VisualizerConfig::new()
    .with_cube_size(Vec3::splat(4.0))
    .with_marker_radius(0.25)
    .with_rotation_speed(2.0)
    .with_triangle_output(TriangleOutput::PerTriangle)
    .with_outline_threshold(15.0);

  assert_eq!(config.cube_size, Vec3::splat(4.0));
  assert_eq!(config.marker_radius, 0.25);
  assert_eq!(config.rotation_speed, 2.0);
  assert_eq!(config.triangle_output, TriangleOutput::PerTriangle);
  assert_eq!(config.outline_threshold_degrees, 15.0);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_default_config_is_valid() {
  let config = VisualizerConfig::default();
  assert_eq!(config.cube_size, Vec3::splat(2.0));
  assert_eq!(config.triangle_output, TriangleOutput::Shared);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_rejects_bad_values() {
  let config = VisualizerConfig::new().with_cube_size(Vec3::new(2.0, 0.0, 2.0));
  assert!(matches!(
    config.validate(),
    Err(ConfigError::InvalidCubeSize(_))
  ));

  let config = VisualizerConfig::new().with_marker_radius(-1.0);
  assert_eq!(
    config.validate(),
    Err(ConfigError::InvalidMarkerRadius(-1.0))
  );

  let config = VisualizerConfig::new().with_rotation_speed(f32::NAN);
  assert!(matches!(
    config.validate(),
    Err(ConfigError::InvalidRotationSpeed(_))
  ));

  let config = VisualizerConfig::new().with_outline_threshold(200.0);
  assert_eq!(
    config.validate(),
    Err(ConfigError::InvalidOutlineThreshold(200.0))
  );
}

#[test]
fn test_negative_rotation_speed_is_allowed() {
  // Inverts drag direction
  let config = VisualizerConfig::new().with_rotation_speed(-2.0);
  assert_eq!(config.validate(), Ok(()));
}
