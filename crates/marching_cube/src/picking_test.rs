use glam::{Quat, Vec3};

use super::*;

const CAMERA: Vec3 = Vec3::new(0.0, 0.0, 5.0);

fn ray_towards(target: Vec3) -> PickRay {
  PickRay::new(CAMERA, target - CAMERA)
}

#[test]
fn test_ray_sphere_hit_distance() {
  let ray = PickRay::new(Vec3::ZERO, Vec3::Z);
  let distance = ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, 10.0), 1.0);
  assert_eq!(distance, Some(9.0));
}

#[test]
fn test_ray_sphere_miss() {
  let ray = PickRay::new(Vec3::ZERO, Vec3::Z);
  assert_eq!(ray_sphere_distance(&ray, Vec3::new(2.0, 0.0, 10.0), 1.0), None);
}

#[test]
fn test_ray_sphere_behind_origin() {
  let ray = PickRay::new(Vec3::ZERO, Vec3::Z);
  assert_eq!(ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, -10.0), 1.0), None);
}

#[test]
fn test_ray_sphere_origin_inside() {
  let ray = PickRay::new(Vec3::ZERO, Vec3::X);
  assert_eq!(ray_sphere_distance(&ray, Vec3::ZERO, 1.0), Some(0.0));
}

#[test]
fn test_pick_single_corner() {
  let geometry = CubeGeometry::default();
  let target = geometry.corner_position(7);
  let hits = pick_corners(&ray_towards(target), &geometry, Quat::IDENTITY, 0.1);

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].corner, 7);
}

#[test]
fn test_pick_miss_between_corners() {
  let geometry = CubeGeometry::default();
  let hits = pick_corners(&ray_towards(Vec3::ZERO), &geometry, Quat::IDENTITY, 0.1);
  assert!(hits.is_empty());
}

#[test]
fn test_pick_reports_all_hits_nearest_first() {
  let geometry = CubeGeometry::default();
  // Straight down the z axis through corners 7 (front) and 3 (back)
  let ray = PickRay::new(Vec3::new(1.0, 1.0, 5.0), Vec3::NEG_Z);
  let hits = pick_corners(&ray, &geometry, Quat::IDENTITY, 0.1);

  let corners: Vec<u8> = hits.iter().map(|h| h.corner).collect();
  assert_eq!(corners, vec![7, 3]);
  assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn test_pick_follows_orientation() {
  let geometry = CubeGeometry::default();
  // Half turn about Y swaps front and back, left and right
  let orientation = Quat::from_rotation_y(std::f32::consts::PI);
  let target = geometry.corner_position(7);
  let hits = pick_corners(&ray_towards(target), &geometry, orientation, 0.1);

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].corner, 2);
}

#[test]
fn test_hit_distance_lands_on_marker_surface() {
  let geometry = CubeGeometry::default();
  let radius = 0.1;
  let target = geometry.corner_position(5);
  let ray = ray_towards(target);
  let hits = pick_corners(&ray, &geometry, Quat::IDENTITY, radius);

  assert_eq!(hits.len(), 1);
  let entry = ray.at(hits[0].distance);
  assert!((entry.distance(target) - radius).abs() < 1.0e-4);
  assert!(entry.distance(CAMERA) < target.distance(CAMERA));
}
