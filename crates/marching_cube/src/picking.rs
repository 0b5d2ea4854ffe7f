//! Corner marker picking.
//!
//! Each corner is represented by a sphere of fixed radius at its position,
//! rotated together with the assembly. A pick ray hits every sphere it
//! intersects; all of them are reported, nearest first.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::constants::CORNER_COUNT;
use crate::geometry::CubeGeometry;

/// Ray in assembly-parent (world) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickRay {
  pub origin: Vec3,
  /// Unit direction.
  pub direction: Vec3,
}

impl PickRay {
  /// Ray from `origin` along `direction` (normalized here).
  pub fn new(origin: Vec3, direction: Vec3) -> Self {
    Self {
      origin,
      direction: direction.normalize_or_zero(),
    }
  }

  /// Point at distance `t` along the ray.
  #[inline]
  pub fn at(&self, t: f32) -> Vec3 {
    self.origin + self.direction * t
  }
}

/// A corner marker hit by a pick ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerHit {
  pub corner: u8,
  /// Distance from the ray origin to the entry point.
  pub distance: f32,
}

/// Hits of a single pick, nearest first.
pub type CornerHits = SmallVec<[CornerHit; CORNER_COUNT]>;

/// Distance along `ray` to the first intersection with a sphere.
///
/// Returns `None` when the ray misses or the sphere lies entirely behind the
/// origin. An origin inside the sphere reports distance 0.
pub fn ray_sphere_distance(ray: &PickRay, center: Vec3, radius: f32) -> Option<f32> {
  let to_center = center - ray.origin;
  let along = to_center.dot(ray.direction);
  let closest_sq = to_center.length_squared() - along * along;
  let radius_sq = radius * radius;

  if closest_sq > radius_sq {
    return None;
  }

  let half_chord = (radius_sq - closest_sq).sqrt();
  let near = along - half_chord;
  let far = along + half_chord;

  if far < 0.0 {
    None
  } else {
    Some(near.max(0.0))
  }
}

/// Corners whose markers the ray hits, with the assembly rotated by
/// `orientation` about the origin.
pub fn pick_corners(
  ray: &PickRay,
  geometry: &CubeGeometry,
  orientation: Quat,
  marker_radius: f32,
) -> CornerHits {
  let mut hits: CornerHits = (0..CORNER_COUNT as u8)
    .filter_map(|corner| {
      let center = orientation * geometry.corner_position(corner);
      ray_sphere_distance(ray, center, marker_radius).map(|distance| CornerHit { corner, distance })
    })
    .collect();

  hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
  hits
}

#[cfg(test)]
#[path = "picking_test.rs"]
mod picking_test;
