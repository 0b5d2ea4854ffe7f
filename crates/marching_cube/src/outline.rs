//! Wireframe outline extraction from a triangle soup.
//!
//! Every triangle edge becomes a line segment, except edges shared by two
//! triangles that are (nearly) coplanar. That hides the diagonal of a planar
//! quad split into two triangles while keeping creases.

use std::collections::HashMap;

use glam::Vec3;

use crate::types::TriangleSoup;

/// Quantization applied to endpoints before matching shared edges.
const KEY_PRECISION: f32 = 1.0e4;

type PointKey = [i64; 3];

fn point_key(p: Vec3) -> PointKey {
  (p * KEY_PRECISION).round().as_i64vec3().to_array()
}

fn edge_key(a: Vec3, b: Vec3) -> (PointKey, PointKey) {
  let (ka, kb) = (point_key(a), point_key(b));
  if ka <= kb {
    (ka, kb)
  } else {
    (kb, ka)
  }
}

struct EdgeUse {
  endpoints: [Vec3; 2],
  normals: Vec<Vec3>,
}

/// Line-segment endpoint pairs outlining the soup.
///
/// A shared edge is kept when the angle between the adjacent face normals is
/// at least `threshold_degrees`. Degenerate triangles contribute nothing.
pub fn outline_segments(soup: &TriangleSoup, threshold_degrees: f32) -> Vec<[f32; 3]> {
  let threshold_cos = threshold_degrees.to_radians().cos();

  // Insertion order keeps the output deterministic.
  let mut order: Vec<(PointKey, PointKey)> = Vec::new();
  let mut edges: HashMap<(PointKey, PointKey), EdgeUse> = HashMap::new();

  for [a, b, c] in soup.triangles() {
    let Some(normal) = (b - a).cross(c - a).try_normalize() else {
      continue;
    };

    for (p, q) in [(a, b), (b, c), (c, a)] {
      let key = edge_key(p, q);
      edges
        .entry(key)
        .or_insert_with(|| {
          order.push(key);
          EdgeUse {
            endpoints: [p, q],
            normals: Vec::with_capacity(2),
          }
        })
        .normals
        .push(normal);
    }
  }

  let mut segments = Vec::with_capacity(order.len() * 2);
  for key in order {
    let edge = &edges[&key];
    let hidden = match edge.normals.as_slice() {
      [n0, n1] => n0.dot(*n1) > threshold_cos,
      _ => false,
    };
    if !hidden {
      segments.push(edge.endpoints[0].to_array());
      segments.push(edge.endpoints[1].to_array());
    }
  }

  segments
}

/// Outline of a single triangle: its three edges.
pub fn triangle_outline(triangle: [Vec3; 3]) -> [[f32; 3]; 6] {
  let [a, b, c] = triangle.map(|v| v.to_array());
  [a, b, b, c, c, a]
}

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;
