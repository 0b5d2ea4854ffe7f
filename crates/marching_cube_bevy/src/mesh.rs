//! Conversion of core geometry to Bevy meshes.
//!
//! Surfaces are non-indexed triangle lists straight from the soup; outlines
//! and the cube wireframe are line lists of endpoint pairs. Materials are
//! unlit, so no normals are generated.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use marching_cube::TriangleSoup;

/// Filled surface mesh for a whole soup.
pub fn surface_mesh(soup: &TriangleSoup) -> Mesh {
  triangle_list(soup.positions.clone())
}

/// Filled mesh for a single triangle.
pub fn triangle_mesh(triangle: [Vec3; 3]) -> Mesh {
  triangle_list(triangle.map(|v| v.to_array()).to_vec())
}

/// Line-list mesh from endpoint pairs.
pub fn line_mesh(segments: &[[f32; 3]]) -> Mesh {
  debug_assert!(segments.len() % 2 == 0, "line list needs endpoint pairs");

  let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
  mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, segments.to_vec());
  mesh
}

fn triangle_list(positions: Vec<[f32; 3]>) -> Mesh {
  let mut mesh = Mesh::new(
    PrimitiveTopology::TriangleList,
    RenderAssetUsages::default(),
  );
  mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
  mesh
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
