//! marching_cube - Framework/engine independent single-cell marching cubes
//!
//! This crate triangulates one cube cell whose 8 corners are individually
//! marked solid or empty. It backs an interactive visualizer: toggle a
//! corner, run a triangulation pass, hand the triangle soup to a renderer.
//!
//! # Features
//!
//! - **Case Tables**: 256-entry triangle table and 12-entry edge table in a
//!   binary corner layout, validated exhaustively
//! - **Midpoint Triangulation**: vertices at cube-edge midpoints, emitted in
//!   winding order as a flat point list
//! - **Outline Extraction**: wireframe segments with coplanar diagonals hidden
//! - **Interaction**: corner picking against rotated marker spheres and
//!   drag-to-rotate orientation
//!
//! # Example
//!
//! ```
//! use marching_cube::{triangulate, CornerStates, CubeGeometry};
//!
//! let geometry = CubeGeometry::uniform(2.0);
//! let mut corners = CornerStates::new();
//!
//! corners.toggle(0);
//! let soup = triangulate(&corners, &geometry);
//!
//! assert_eq!(soup.triangle_count(), 1);
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{
  CONFIGURATION_COUNT, CORNER_COUNT, EDGE_COUNT, EMPTY_CONFIGURATION, FACE_COUNT,
  FULL_CONFIGURATION, MAX_POINTS, MAX_TRIANGLES,
};
pub use edge_table::{
  edge_corners, triangles_for, try_edge_corners, try_triangles_for, validate_entry,
  validate_tables, EDGE_CORNERS, EDGE_MASKS, FACE_EDGE_MASKS, TRIANGLE_TABLE,
};
pub use error::{ConfigError, TableError};
pub use types::{TriangleOutput, TriangleSoup, VisualizerConfig};

// Cell geometry and corner state
pub mod corners;
pub mod geometry;
pub use corners::CornerStates;
pub use geometry::CubeGeometry;

// Triangulation pass
pub mod triangulate;
pub use triangulate::{triangulate, triangulate_configuration, triangulate_into};

// Wireframe outline
pub mod outline;
pub use outline::outline_segments;

// Interaction: orientation and picking
pub mod orientation;
pub mod picking;
pub use orientation::{normalized_cursor, DragRotation};
pub use picking::{pick_corners, CornerHit, CornerHits, PickRay};

// Visualizer state
pub mod controller;
pub use controller::CubeVisualizer;
