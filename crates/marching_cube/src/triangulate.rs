//! Single-cell triangulation pass.
//!
//! # Algorithm
//!
//! ```text
//! corner flags ──► configuration (OR of solid_i << i)
//!                        │
//!                        ▼
//!              TRIANGLE_TABLE[configuration]
//!                        │   edge triples, explicit length
//!                        ▼
//!        for each edge: midpoint of its two corners
//!                        │   table order = winding order
//!                        ▼
//!         flat point list, 3 points per triangle
//! ```
//!
//! Vertices sit at edge midpoints rather than interpolated crossings: corners
//! are binary, so there is no density to interpolate.
//!
//! Every pass is a full recompute. The output replaces the previous soup
//! wholesale; nothing is diffed or retained between passes.

use crate::corners::CornerStates;
use crate::edge_table::triangles_for;
use crate::geometry::CubeGeometry;
use crate::types::TriangleSoup;

/// Triangulate the current corner states.
pub fn triangulate(corners: &CornerStates, geometry: &CubeGeometry) -> TriangleSoup {
  triangulate_configuration(corners.configuration(), geometry)
}

/// Triangulate into an existing soup, replacing its contents.
pub fn triangulate_into(corners: &CornerStates, geometry: &CubeGeometry, out: &mut TriangleSoup) {
  fill(corners.configuration(), geometry, out);
}

/// Triangulate a raw configuration bitmask.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "triangulate::configuration"))]
pub fn triangulate_configuration(configuration: u8, geometry: &CubeGeometry) -> TriangleSoup {
  let mut soup = TriangleSoup::new();
  fill(configuration, geometry, &mut soup);
  soup
}

fn fill(configuration: u8, geometry: &CubeGeometry, out: &mut TriangleSoup) {
  out.clear();
  out.configuration = configuration;

  let triangles = triangles_for(configuration);
  out.positions.reserve(triangles.len() * 3);

  for triangle in triangles {
    for &edge in triangle {
      out
        .positions
        .push(geometry.edge_midpoint(edge as usize).to_array());
    }
  }

  #[cfg(feature = "tracing")]
  tracing::trace!(
    configuration,
    triangles = out.triangle_count(),
    "triangulated cell"
  );
}

#[cfg(test)]
#[path = "triangulate_test.rs"]
mod triangulate_test;
