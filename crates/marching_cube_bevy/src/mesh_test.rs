use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use marching_cube::{outline_segments, triangulate_configuration, CubeGeometry};

use super::*;

fn position_count(mesh: &Mesh) -> usize {
  mesh
    .attribute(Mesh::ATTRIBUTE_POSITION)
    .map(|values| values.len())
    .unwrap_or(0)
}

#[test]
fn test_surface_mesh_matches_soup() {
  let soup = triangulate_configuration(0b0000_0011, &CubeGeometry::default());
  let mesh = surface_mesh(&soup);

  assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
  assert_eq!(position_count(&mesh), soup.positions.len());
  assert!(mesh.indices().is_none());
}

#[test]
fn test_empty_soup_gives_empty_mesh() {
  let soup = triangulate_configuration(0, &CubeGeometry::default());
  assert_eq!(position_count(&surface_mesh(&soup)), 0);
}

#[test]
fn test_triangle_mesh_has_three_vertices() {
  let mesh = triangle_mesh([Vec3::X, Vec3::Y, Vec3::Z]);
  assert_eq!(position_count(&mesh), 3);
}

#[test]
fn test_line_mesh_from_outline() {
  let soup = triangulate_configuration(0b0000_0001, &CubeGeometry::default());
  let segments = outline_segments(&soup, 1.0);
  let mesh = line_mesh(&segments);

  assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
  assert_eq!(position_count(&mesh), 6);
}

#[test]
fn test_wireframe_line_mesh() {
  let mesh = line_mesh(&CubeGeometry::default().wireframe_segments());
  assert_eq!(position_count(&mesh), 24);
}
