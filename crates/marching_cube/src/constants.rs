//! Cell layout constants.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cell corner indices (binary: ZYX, 0 = negative half, 1 = positive half):
//!   0 = (-,-,-)    4 = (-,-,+)
//!   1 = (+,-,-)    5 = (+,-,+)
//!   2 = (-,+,-)    6 = (-,+,+)
//!   3 = (+,+,-)    7 = (+,+,+)
//! ```

/// Corners of a cube cell.
pub const CORNER_COUNT: usize = 8;

/// Edges of a cube cell.
pub const EDGE_COUNT: usize = 12;

/// Faces of a cube cell.
pub const FACE_COUNT: usize = 6;

/// Distinct corner configurations (2^8).
pub const CONFIGURATION_COUNT: usize = 1 << CORNER_COUNT;

/// Maximum triangles any single configuration produces.
pub const MAX_TRIANGLES: usize = 5;

/// Maximum points a single triangulation pass emits.
pub const MAX_POINTS: usize = MAX_TRIANGLES * 3;

/// Configuration with no solid corners.
pub const EMPTY_CONFIGURATION: u8 = 0b0000_0000;

/// Configuration with every corner solid.
pub const FULL_CONFIGURATION: u8 = 0b1111_1111;

/// Default full cube size per axis (corners at ±1).
pub const DEFAULT_CUBE_SIZE: f32 = 2.0;

/// Default radius of the pickable corner markers.
pub const DEFAULT_MARKER_RADIUS: f32 = 0.1;

/// Default drag rotation multiplier (radians per normalized-viewport unit).
pub const DEFAULT_ROTATION_SPEED: f32 = 1.0;

/// Default crease angle below which shared outline edges are hidden.
pub const DEFAULT_OUTLINE_THRESHOLD_DEGREES: f32 = 1.0;

/// Unit offsets of the 8 corners, `(index >> axis) & 1` per axis.
pub const CORNER_OFFSETS: [[u8; 3]; CORNER_COUNT] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [0, 1, 0], // 2
  [1, 1, 0], // 3
  [0, 0, 1], // 4
  [1, 0, 1], // 5
  [0, 1, 1], // 6
  [1, 1, 1], // 7
];

/// Unit offset of a corner within the cell.
#[inline(always)]
pub const fn corner_offset(corner: u8) -> [u8; 3] {
  [corner & 1, (corner >> 1) & 1, (corner >> 2) & 1]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
