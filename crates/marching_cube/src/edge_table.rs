//! Case tables for single-cell marching cubes.
//!
//! Maps 8-bit corner configurations to the triangles (as cube-edge triples)
//! that separate solid corners from empty ones, and maps each cube edge to
//! the two corners it connects.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(-,-,-)  1=(+,-,-)  2=(-,+,-)  3=(+,+,-)
//!     4─┼────5 │           4=(-,-,+)  5=(+,-,+)  6=(-,+,+)  7=(+,+,+)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! X-axis edges:  0=[0,1]  5=[2,3]  8=[4,5]  11=[6,7]
//! Y-axis edges:  1=[0,2]  3=[1,3]  9=[4,6]  10=[5,7]
//! Z-axis edges:  2=[0,4]  4=[1,5]  6=[2,6]   7=[3,7]
//! ```
//!
//! # Triangle Table
//!
//! `TRIANGLE_TABLE[configuration]` is an explicit-length list of edge
//! triples. Each triple is one triangle whose vertices sit on those edges;
//! the triple order is the winding order. With the right-hand rule the face
//! normal points toward the solid corners.
//!
//! The entries are the classical marching-cubes cases re-indexed to the
//! corner layout above. Entries `128..=255` are the complements of
//! `0..=127` with reversed winding, so a configuration and its complement
//! always produce the same surface with opposite orientation.
//!
//! ```text
//! Configuration: 0b00000001 (only corner 0 is solid)
//! Triangles:     [[0, 2, 1]]
//!                  │  │  └─ Edge 1: [0,2]
//!                  │  └──── Edge 2: [0,4]
//!                  └─────── Edge 0: [0,1]
//! ```

use crate::constants::{CONFIGURATION_COUNT, CORNER_COUNT, EDGE_COUNT, FACE_COUNT, MAX_TRIANGLES};
use crate::error::TableError;

/// Edge endpoint corner indices.
/// Each edge connects two corners of the cube.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = [
  [0, 1], // Edge 0:  X axis at -Y, -Z
  [0, 2], // Edge 1:  Y axis at -X, -Z
  [0, 4], // Edge 2:  Z axis at -X, -Y
  [1, 3], // Edge 3:  Y axis at +X, -Z
  [1, 5], // Edge 4:  Z axis at +X, -Y
  [2, 3], // Edge 5:  X axis at +Y, -Z
  [2, 6], // Edge 6:  Z axis at -X, +Y
  [3, 7], // Edge 7:  Z axis at +X, +Y
  [4, 5], // Edge 8:  X axis at -Y, +Z
  [4, 6], // Edge 9:  Y axis at -X, +Z
  [5, 7], // Edge 10: Y axis at +X, +Z
  [6, 7], // Edge 11: X axis at +Y, +Z
];

/// Crossed-edge masks.
/// Index: 8-bit corner configuration
/// Value: 12-bit edge mask (bit set = surface crosses that edge)
///
/// An edge is crossed if exactly one of its endpoint corners is solid.
pub const EDGE_MASKS: [u16; CONFIGURATION_COUNT] = generate_edge_masks();

/// Generate the crossed-edge masks at compile time.
const fn generate_edge_masks() -> [u16; CONFIGURATION_COUNT] {
  let mut table = [0u16; CONFIGURATION_COUNT];
  let mut configuration = 0usize;

  while configuration < CONFIGURATION_COUNT {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGE_COUNT {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let solid0 = (configuration >> c0) & 1;
      let solid1 = (configuration >> c1) & 1;

      if solid0 != solid1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[configuration] = edge_mask;
    configuration += 1;
  }

  table
}

/// Triangles per configuration, as triples of edge indices.
#[rustfmt::skip]
pub const TRIANGLE_TABLE: [&[[u8; 3]]; CONFIGURATION_COUNT] = [
  &[], //   0 = 0b0000_0000
  &[[0, 2, 1]], //   1 = 0b0000_0001
  &[[0, 3, 4]], //   2 = 0b0000_0010
  &[[3, 2, 1], [4, 2, 3]], //   3 = 0b0000_0011
  &[[1, 6, 5]], //   4 = 0b0000_0100
  &[[0, 6, 5], [2, 6, 0]], //   5 = 0b0000_0101
  &[[3, 4, 0], [5, 1, 6]], //   6 = 0b0000_0110
  &[[3, 6, 5], [3, 4, 6], [4, 2, 6]], //   7 = 0b0000_0111
  &[[3, 5, 7]], //   8 = 0b0000_1000
  &[[0, 2, 1], [3, 5, 7]], //   9 = 0b0000_1001
  &[[4, 5, 7], [0, 5, 4]], //  10 = 0b0000_1010
  &[[5, 2, 1], [5, 7, 2], [7, 4, 2]], //  11 = 0b0000_1011
  &[[1, 7, 3], [6, 7, 1]], //  12 = 0b0000_1100
  &[[0, 7, 3], [0, 2, 7], [2, 6, 7]], //  13 = 0b0000_1101
  &[[1, 4, 0], [1, 6, 4], [6, 7, 4]], //  14 = 0b0000_1110
  &[[4, 2, 7], [7, 2, 6]], //  15 = 0b0000_1111
  &[[8, 9, 2]], //  16 = 0b0001_0000
  &[[8, 1, 0], [9, 1, 8]], //  17 = 0b0001_0001
  &[[0, 3, 4], [2, 8, 9]], //  18 = 0b0001_0010
  &[[8, 3, 4], [8, 9, 3], [9, 1, 3]], //  19 = 0b0001_0011
  &[[2, 8, 9], [1, 6, 5]], //  20 = 0b0001_0100
  &[[6, 8, 9], [6, 5, 8], [5, 0, 8]], //  21 = 0b0001_0101
  &[[4, 0, 3], [2, 8, 9], [5, 1, 6]], //  22 = 0b0001_0110
  &[[8, 9, 6], [4, 8, 6], [4, 6, 5], [4, 5, 3]], //  23 = 0b0001_0111
  &[[3, 5, 7], [2, 8, 9]], //  24 = 0b0001_1000
  &[[1, 8, 9], [1, 0, 8], [3, 5, 7]], //  25 = 0b0001_1001
  &[[4, 5, 7], [4, 0, 5], [2, 8, 9]], //  26 = 0b0001_1010
  &[[5, 7, 4], [5, 4, 9], [5, 9, 1], [9, 4, 8]], //  27 = 0b0001_1011
  &[[1, 7, 3], [1, 6, 7], [9, 2, 8]], //  28 = 0b0001_1100
  &[[3, 6, 7], [3, 8, 6], [3, 0, 8], [9, 6, 8]], //  29 = 0b0001_1101
  &[[8, 9, 2], [4, 0, 6], [4, 6, 7], [6, 0, 1]], //  30 = 0b0001_1110
  &[[8, 9, 6], [8, 6, 4], [4, 6, 7]], //  31 = 0b0001_1111
  &[[4, 10, 8]], //  32 = 0b0010_0000
  &[[4, 10, 8], [0, 2, 1]], //  33 = 0b0010_0001
  &[[0, 10, 8], [3, 10, 0]], //  34 = 0b0010_0010
  &[[2, 10, 8], [2, 1, 10], [1, 3, 10]], //  35 = 0b0010_0011
  &[[4, 10, 8], [5, 1, 6]], //  36 = 0b0010_0100
  &[[0, 6, 5], [0, 2, 6], [8, 4, 10]], //  37 = 0b0010_0101
  &[[0, 10, 8], [0, 3, 10], [5, 1, 6]], //  38 = 0b0010_0110
  &[[5, 3, 10], [5, 10, 2], [5, 2, 6], [8, 2, 10]], //  39 = 0b0010_0111
  &[[3, 5, 7], [4, 10, 8]], //  40 = 0b0010_1000
  &[[1, 0, 2], [3, 5, 7], [8, 4, 10]], //  41 = 0b0010_1001
  &[[10, 5, 7], [10, 8, 5], [8, 0, 5]], //  42 = 0b0010_1010
  &[[5, 7, 10], [1, 5, 10], [1, 10, 8], [1, 8, 2]], //  43 = 0b0010_1011
  &[[7, 1, 6], [7, 3, 1], [4, 10, 8]], //  44 = 0b0010_1100
  &[[8, 4, 10], [0, 2, 3], [2, 7, 3], [2, 6, 7]], //  45 = 0b0010_1101
  &[[10, 8, 0], [10, 0, 6], [10, 6, 7], [6, 0, 1]], //  46 = 0b0010_1110
  &[[10, 8, 2], [10, 2, 7], [7, 2, 6]], //  47 = 0b0010_1111
  &[[4, 9, 2], [10, 9, 4]], //  48 = 0b0011_0000
  &[[4, 1, 0], [4, 10, 1], [10, 9, 1]], //  49 = 0b0011_0001
  &[[0, 9, 2], [0, 3, 9], [3, 10, 9]], //  50 = 0b0011_0010
  &[[3, 10, 1], [1, 10, 9]], //  51 = 0b0011_0011
  &[[9, 4, 10], [9, 2, 4], [1, 6, 5]], //  52 = 0b0011_0100
  &[[4, 10, 9], [4, 9, 5], [4, 5, 0], [5, 9, 6]], //  53 = 0b0011_0101
  &[[5, 1, 6], [0, 3, 2], [3, 9, 2], [3, 10, 9]], //  54 = 0b0011_0110
  &[[6, 5, 3], [6, 3, 9], [9, 3, 10]], //  55 = 0b0011_0111
  &[[4, 9, 2], [4, 10, 9], [7, 3, 5]], //  56 = 0b0011_1000
  &[[7, 3, 5], [4, 10, 0], [10, 1, 0], [10, 9, 1]], //  57 = 0b0011_1001
  &[[2, 0, 5], [2, 5, 10], [2, 10, 9], [7, 10, 5]], //  58 = 0b0011_1010
  &[[5, 7, 10], [5, 10, 1], [1, 10, 9]], //  59 = 0b0011_1011
  &[[4, 10, 2], [2, 10, 9], [7, 3, 1], [7, 1, 6]], //  60 = 0b0011_1100
  &[[10, 9, 0], [10, 0, 4], [9, 6, 0], [3, 0, 7], [6, 7, 0]], //  61 = 0b0011_1101
  &[[6, 7, 0], [6, 0, 1], [7, 10, 0], [2, 0, 9], [10, 9, 0]], //  62 = 0b0011_1110
  &[[6, 7, 10], [9, 6, 10]], //  63 = 0b0011_1111
  &[[9, 11, 6]], //  64 = 0b0100_0000
  &[[1, 0, 2], [6, 9, 11]], //  65 = 0b0100_0001
  &[[0, 3, 4], [6, 9, 11]], //  66 = 0b0100_0010
  &[[2, 3, 4], [2, 1, 3], [6, 9, 11]], //  67 = 0b0100_0011
  &[[9, 5, 1], [11, 5, 9]], //  68 = 0b0100_0100
  &[[9, 0, 2], [9, 11, 0], [11, 5, 0]], //  69 = 0b0100_0101
  &[[5, 9, 11], [5, 1, 9], [0, 3, 4]], //  70 = 0b0100_0110
  &[[3, 11, 5], [3, 2, 11], [3, 4, 2], [2, 9, 11]], //  71 = 0b0100_0111
  &[[7, 3, 5], [11, 6, 9]], //  72 = 0b0100_1000
  &[[3, 5, 7], [1, 0, 2], [11, 6, 9]], //  73 = 0b0100_1001
  &[[5, 4, 0], [5, 7, 4], [11, 6, 9]], //  74 = 0b0100_1010
  &[[11, 6, 9], [5, 7, 1], [7, 2, 1], [7, 4, 2]], //  75 = 0b0100_1011
  &[[7, 9, 11], [7, 3, 9], [3, 1, 9]], //  76 = 0b0100_1100
  &[[7, 9, 11], [3, 9, 7], [3, 2, 9], [3, 0, 2]], //  77 = 0b0100_1101
  &[[0, 1, 9], [0, 9, 7], [0, 7, 4], [11, 7, 9]], //  78 = 0b0100_1110
  &[[9, 11, 7], [9, 7, 2], [2, 7, 4]], //  79 = 0b0100_1111
  &[[11, 2, 8], [6, 2, 11]], //  80 = 0b0101_0000
  &[[1, 11, 6], [1, 0, 11], [0, 8, 11]], //  81 = 0b0101_0001
  &[[2, 11, 6], [2, 8, 11], [4, 0, 3]], //  82 = 0b0101_0010
  &[[4, 8, 11], [4, 11, 1], [4, 1, 3], [6, 1, 11]], //  83 = 0b0101_0011
  &[[2, 5, 1], [2, 8, 5], [8, 11, 5]], //  84 = 0b0101_0100
  &[[0, 8, 5], [8, 11, 5]], //  85 = 0b0101_0101
  &[[3, 4, 0], [5, 1, 8], [5, 8, 11], [8, 1, 2]], //  86 = 0b0101_0110
  &[[3, 4, 8], [3, 8, 5], [5, 8, 11]], //  87 = 0b0101_0111
  &[[11, 2, 8], [11, 6, 2], [5, 7, 3]], //  88 = 0b0101_1000
  &[[3, 5, 7], [1, 0, 6], [0, 11, 6], [0, 8, 11]], //  89 = 0b0101_1001
  &[[8, 6, 2], [8, 11, 6], [0, 5, 4], [5, 7, 4]], //  90 = 0b0101_1010
  &[[7, 4, 1], [7, 1, 5], [4, 8, 1], [6, 1, 11], [8, 11, 1]], //  91 = 0b0101_1011
  &[[2, 3, 1], [2, 11, 3], [2, 8, 11], [11, 7, 3]], //  92 = 0b0101_1100
  &[[7, 3, 0], [7, 0, 11], [11, 0, 8]], //  93 = 0b0101_1101
  &[[8, 11, 1], [8, 1, 2], [11, 7, 1], [0, 1, 4], [7, 4, 1]], //  94 = 0b0101_1110
  &[[7, 4, 8], [11, 7, 8]], //  95 = 0b0101_1111
  &[[8, 4, 10], [9, 11, 6]], //  96 = 0b0110_0000
  &[[0, 2, 1], [8, 4, 10], [6, 9, 11]], //  97 = 0b0110_0001
  &[[10, 0, 3], [10, 8, 0], [9, 11, 6]], //  98 = 0b0110_0010
  &[[6, 9, 11], [2, 1, 8], [1, 10, 8], [1, 3, 10]], //  99 = 0b0110_0011
  &[[9, 5, 1], [9, 11, 5], [10, 8, 4]], // 100 = 0b0110_0100
  &[[4, 10, 8], [0, 2, 11], [0, 11, 5], [11, 2, 9]], // 101 = 0b0110_0101
  &[[1, 11, 5], [1, 9, 11], [3, 10, 0], [10, 8, 0]], // 102 = 0b0110_0110
  &[[11, 5, 2], [11, 2, 9], [5, 3, 2], [8, 2, 10], [3, 10, 2]], // 103 = 0b0110_0111
  &[[4, 10, 8], [7, 3, 5], [9, 11, 6]], // 104 = 0b0110_1000
  &[[11, 6, 9], [3, 5, 7], [0, 2, 1], [8, 4, 10]], // 105 = 0b0110_1001
  &[[9, 11, 6], [10, 8, 7], [8, 5, 7], [8, 0, 5]], // 106 = 0b0110_1010
  &[[1, 8, 2], [1, 10, 8], [1, 5, 10], [7, 10, 5], [6, 9, 11]], // 107 = 0b0110_1011
  &[[4, 10, 8], [7, 3, 11], [3, 9, 11], [3, 1, 9]], // 108 = 0b0110_1100
  &[[3, 11, 7], [3, 9, 11], [3, 0, 9], [2, 9, 0], [4, 10, 8]], // 109 = 0b0110_1101
  &[[8, 0, 7], [8, 7, 10], [0, 1, 7], [11, 7, 9], [1, 9, 7]], // 110 = 0b0110_1110
  &[[9, 11, 7], [9, 7, 2], [10, 8, 7], [8, 2, 7]], // 111 = 0b0110_1111
  &[[11, 4, 10], [11, 6, 4], [6, 2, 4]], // 112 = 0b0111_0000
  &[[1, 11, 6], [0, 11, 1], [0, 10, 11], [0, 4, 10]], // 113 = 0b0111_0001
  &[[0, 6, 2], [0, 10, 6], [0, 3, 10], [10, 11, 6]], // 114 = 0b0111_0010
  &[[11, 6, 1], [11, 1, 10], [10, 1, 3]], // 115 = 0b0111_0011
  &[[10, 2, 4], [10, 5, 2], [10, 11, 5], [1, 2, 5]], // 116 = 0b0111_0100
  &[[4, 10, 11], [4, 11, 0], [0, 11, 5]], // 117 = 0b0111_0101
  &[[3, 10, 2], [3, 2, 0], [10, 11, 2], [1, 2, 5], [11, 5, 2]], // 118 = 0b0111_0110
  &[[3, 10, 11], [5, 3, 11]], // 119 = 0b0111_0111
  &[[3, 5, 7], [4, 10, 6], [4, 6, 2], [6, 10, 11]], // 120 = 0b0111_1000
  &[[0, 6, 1], [0, 11, 6], [0, 4, 11], [10, 11, 4], [3, 5, 7]], // 121 = 0b0111_1001
  &[[6, 2, 10], [6, 10, 11], [2, 0, 10], [7, 10, 5], [0, 5, 10]], // 122 = 0b0111_1010
  &[[11, 6, 1], [11, 1, 10], [5, 7, 1], [7, 10, 1]], // 123 = 0b0111_1011
  &[[3, 1, 11], [3, 11, 7], [1, 2, 11], [10, 11, 4], [2, 4, 11]], // 124 = 0b0111_1100
  &[[7, 3, 0], [7, 0, 11], [4, 10, 0], [10, 11, 0]], // 125 = 0b0111_1101
  &[[0, 1, 2], [10, 11, 7]], // 126 = 0b0111_1110
  &[[7, 10, 11]], // 127 = 0b0111_1111
  &[[7, 11, 10]], // 128 = 0b1000_0000
  &[[0, 2, 1], [10, 7, 11]], // 129 = 0b1000_0001
  &[[7, 0, 3], [7, 11, 0], [4, 0, 10], [10, 0, 11]], // 130 = 0b1000_0010
  &[[3, 11, 1], [3, 7, 11], [1, 11, 2], [10, 4, 11], [2, 11, 4]], // 131 = 0b1000_0011
  &[[11, 1, 6], [11, 10, 1], [5, 1, 7], [7, 1, 10]], // 132 = 0b1000_0100
  &[[6, 10, 2], [6, 11, 10], [2, 10, 0], [7, 5, 10], [0, 10, 5]], // 133 = 0b1000_0101
  &[[0, 1, 6], [0, 6, 11], [0, 11, 4], [10, 4, 11], [3, 7, 5]], // 134 = 0b1000_0110
  &[[3, 7, 5], [4, 6, 10], [4, 2, 6], [6, 11, 10]], // 135 = 0b1000_0111
  &[[3, 11, 10], [5, 11, 3]], // 136 = 0b1000_1000
  &[[3, 2, 10], [3, 0, 2], [10, 2, 11], [1, 5, 2], [11, 2, 5]], // 137 = 0b1000_1001
  &[[4, 11, 10], [4, 0, 11], [0, 5, 11]], // 138 = 0b1000_1010
  &[[10, 4, 2], [10, 2, 5], [10, 5, 11], [1, 5, 2]], // 139 = 0b1000_1011
  &[[11, 1, 6], [11, 10, 1], [10, 3, 1]], // 140 = 0b1000_1100
  &[[0, 2, 6], [0, 6, 10], [0, 10, 3], [10, 6, 11]], // 141 = 0b1000_1101
  &[[1, 6, 11], [0, 1, 11], [0, 11, 10], [0, 10, 4]], // 142 = 0b1000_1110
  &[[11, 10, 4], [11, 4, 6], [6, 4, 2]], // 143 = 0b1000_1111
  &[[9, 7, 11], [9, 2, 7], [10, 7, 8], [8, 7, 2]], // 144 = 0b1001_0000
  &[[8, 7, 0], [8, 10, 7], [0, 7, 1], [11, 9, 7], [1, 7, 9]], // 145 = 0b1001_0001
  &[[3, 7, 11], [3, 11, 9], [3, 9, 0], [2, 0, 9], [4, 8, 10]], // 146 = 0b1001_0010
  &[[4, 8, 10], [7, 11, 3], [3, 11, 9], [3, 9, 1]], // 147 = 0b1001_0011
  &[[1, 2, 8], [1, 8, 10], [1, 10, 5], [7, 5, 10], [6, 11, 9]], // 148 = 0b1001_0100
  &[[9, 6, 11], [10, 7, 8], [8, 7, 5], [8, 5, 0]], // 149 = 0b1001_0101
  &[[11, 9, 6], [3, 7, 5], [0, 1, 2], [8, 10, 4]], // 150 = 0b1001_0110
  &[[4, 8, 10], [7, 5, 3], [9, 6, 11]], // 151 = 0b1001_0111
  &[[11, 2, 5], [11, 9, 2], [5, 2, 3], [8, 10, 2], [3, 2, 10]], // 152 = 0b1001_1000
  &[[1, 5, 11], [1, 11, 9], [3, 0, 10], [10, 0, 8]], // 153 = 0b1001_1001
  &[[4, 8, 10], [0, 11, 2], [0, 5, 11], [11, 9, 2]], // 154 = 0b1001_1010
  &[[9, 1, 5], [9, 5, 11], [10, 4, 8]], // 155 = 0b1001_1011
  &[[6, 11, 9], [2, 8, 1], [1, 8, 10], [1, 10, 3]], // 156 = 0b1001_1100
  &[[10, 3, 0], [10, 0, 8], [9, 6, 11]], // 157 = 0b1001_1101
  &[[0, 1, 2], [8, 10, 4], [6, 11, 9]], // 158 = 0b1001_1110
  &[[8, 10, 4], [9, 6, 11]], // 159 = 0b1001_1111
  &[[7, 8, 4], [11, 8, 7]], // 160 = 0b1010_0000
  &[[8, 1, 11], [8, 2, 1], [11, 1, 7], [0, 4, 1], [7, 1, 4]], // 161 = 0b1010_0001
  &[[7, 0, 3], [7, 11, 0], [11, 8, 0]], // 162 = 0b1010_0010
  &[[2, 1, 3], [2, 3, 11], [2, 11, 8], [11, 3, 7]], // 163 = 0b1010_0011
  &[[7, 1, 4], [7, 5, 1], [4, 1, 8], [6, 11, 1], [8, 1, 11]], // 164 = 0b1010_0100
  &[[8, 2, 6], [8, 6, 11], [0, 4, 5], [5, 4, 7]], // 165 = 0b1010_0101
  &[[3, 7, 5], [1, 6, 0], [0, 6, 11], [0, 11, 8]], // 166 = 0b1010_0110
  &[[11, 8, 2], [11, 2, 6], [5, 3, 7]], // 167 = 0b1010_0111
  &[[3, 8, 4], [3, 5, 8], [5, 11, 8]], // 168 = 0b1010_1000
  &[[3, 0, 4], [5, 8, 1], [5, 11, 8], [8, 2, 1]], // 169 = 0b1010_1001
  &[[0, 5, 8], [8, 5, 11]], // 170 = 0b1010_1010
  &[[2, 1, 5], [2, 5, 8], [8, 5, 11]], // 171 = 0b1010_1011
  &[[4, 11, 8], [4, 1, 11], [4, 3, 1], [6, 11, 1]], // 172 = 0b1010_1100
  &[[2, 6, 11], [2, 11, 8], [4, 3, 0]], // 173 = 0b1010_1101
  &[[1, 6, 11], [1, 11, 0], [0, 11, 8]], // 174 = 0b1010_1110
  &[[11, 8, 2], [6, 11, 2]], // 175 = 0b1010_1111
  &[[9, 7, 11], [9, 2, 7], [2, 4, 7]], // 176 = 0b1011_0000
  &[[0, 9, 1], [0, 7, 9], [0, 4, 7], [11, 9, 7]], // 177 = 0b1011_0001
  &[[7, 11, 9], [3, 7, 9], [3, 9, 2], [3, 2, 0]], // 178 = 0b1011_0010
  &[[7, 11, 9], [7, 9, 3], [3, 9, 1]], // 179 = 0b1011_0011
  &[[11, 9, 6], [5, 1, 7], [7, 1, 2], [7, 2, 4]], // 180 = 0b1011_0100
  &[[5, 0, 4], [5, 4, 7], [11, 9, 6]], // 181 = 0b1011_0101
  &[[3, 7, 5], [1, 2, 0], [11, 9, 6]], // 182 = 0b1011_0110
  &[[7, 5, 3], [11, 9, 6]], // 183 = 0b1011_0111
  &[[3, 5, 11], [3, 11, 2], [3, 2, 4], [2, 11, 9]], // 184 = 0b1011_1000
  &[[5, 11, 9], [5, 9, 1], [0, 4, 3]], // 185 = 0b1011_1001
  &[[9, 2, 0], [9, 0, 11], [11, 0, 5]], // 186 = 0b1011_1010
  &[[9, 1, 5], [11, 9, 5]], // 187 = 0b1011_1011
  &[[2, 4, 3], [2, 3, 1], [6, 11, 9]], // 188 = 0b1011_1100
  &[[0, 4, 3], [6, 11, 9]], // 189 = 0b1011_1101
  &[[1, 2, 0], [6, 11, 9]], // 190 = 0b1011_1110
  &[[9, 6, 11]], // 191 = 0b1011_1111
  &[[6, 10, 7], [9, 10, 6]], // 192 = 0b1100_0000
  &[[6, 0, 7], [6, 1, 0], [7, 0, 10], [2, 9, 0], [10, 0, 9]], // 193 = 0b1100_0001
  &[[10, 0, 9], [10, 4, 0], [9, 0, 6], [3, 7, 0], [6, 0, 7]], // 194 = 0b1100_0010
  &[[4, 2, 10], [2, 9, 10], [7, 1, 3], [7, 6, 1]], // 195 = 0b1100_0011
  &[[5, 10, 7], [5, 1, 10], [1, 9, 10]], // 196 = 0b1100_0100
  &[[2, 5, 0], [2, 10, 5], [2, 9, 10], [7, 5, 10]], // 197 = 0b1100_0101
  &[[7, 5, 3], [4, 0, 10], [10, 0, 1], [10, 1, 9]], // 198 = 0b1100_0110
  &[[4, 2, 9], [4, 9, 10], [7, 5, 3]], // 199 = 0b1100_0111
  &[[6, 3, 5], [6, 9, 3], [9, 10, 3]], // 200 = 0b1100_1000
  &[[5, 6, 1], [0, 2, 3], [3, 2, 9], [3, 9, 10]], // 201 = 0b1100_1001
  &[[4, 9, 10], [4, 5, 9], [4, 0, 5], [5, 6, 9]], // 202 = 0b1100_1010
  &[[9, 10, 4], [9, 4, 2], [1, 5, 6]], // 203 = 0b1100_1011
  &[[3, 1, 10], [1, 9, 10]], // 204 = 0b1100_1100
  &[[0, 2, 9], [0, 9, 3], [3, 9, 10]], // 205 = 0b1100_1101
  &[[4, 0, 1], [4, 1, 10], [10, 1, 9]], // 206 = 0b1100_1110
  &[[4, 2, 9], [10, 4, 9]], // 207 = 0b1100_1111
  &[[10, 2, 8], [10, 7, 2], [7, 6, 2]], // 208 = 0b1101_0000
  &[[10, 0, 8], [10, 6, 0], [10, 7, 6], [6, 1, 0]], // 209 = 0b1101_0001
  &[[8, 10, 4], [0, 3, 2], [2, 3, 7], [2, 7, 6]], // 210 = 0b1101_0010
  &[[7, 6, 1], [7, 1, 3], [4, 8, 10]], // 211 = 0b1101_0011
  &[[5, 10, 7], [1, 10, 5], [1, 8, 10], [1, 2, 8]], // 212 = 0b1101_0100
  &[[10, 7, 5], [10, 5, 8], [8, 5, 0]], // 213 = 0b1101_0101
  &[[1, 2, 0], [3, 7, 5], [8, 10, 4]], // 214 = 0b1101_0110
  &[[3, 7, 5], [4, 8, 10]], // 215 = 0b1101_0111
  &[[5, 10, 3], [5, 2, 10], [5, 6, 2], [8, 10, 2]], // 216 = 0b1101_1000
  &[[0, 8, 10], [0, 10, 3], [5, 6, 1]], // 217 = 0b1101_1001
  &[[0, 5, 6], [0, 6, 2], [8, 10, 4]], // 218 = 0b1101_1010
  &[[4, 8, 10], [5, 6, 1]], // 219 = 0b1101_1011
  &[[2, 8, 10], [2, 10, 1], [1, 10, 3]], // 220 = 0b1101_1100
  &[[0, 8, 10], [3, 0, 10]], // 221 = 0b1101_1101
  &[[4, 8, 10], [0, 1, 2]], // 222 = 0b1101_1110
  &[[4, 8, 10]], // 223 = 0b1101_1111
  &[[8, 6, 9], [8, 4, 6], [4, 7, 6]], // 224 = 0b1110_0000
  &[[8, 2, 9], [4, 6, 0], [4, 7, 6], [6, 1, 0]], // 225 = 0b1110_0001
  &[[3, 7, 6], [3, 6, 8], [3, 8, 0], [9, 8, 6]], // 226 = 0b1110_0010
  &[[1, 3, 7], [1, 7, 6], [9, 8, 2]], // 227 = 0b1110_0011
  &[[5, 4, 7], [5, 9, 4], [5, 1, 9], [9, 8, 4]], // 228 = 0b1110_0100
  &[[4, 7, 5], [4, 5, 0], [2, 9, 8]], // 229 = 0b1110_0101
  &[[1, 9, 8], [1, 8, 0], [3, 7, 5]], // 230 = 0b1110_0110
  &[[3, 7, 5], [2, 9, 8]], // 231 = 0b1110_0111
  &[[8, 6, 9], [4, 6, 8], [4, 5, 6], [4, 3, 5]], // 232 = 0b1110_1000
  &[[4, 3, 0], [2, 9, 8], [5, 6, 1]], // 233 = 0b1110_1001
  &[[6, 9, 8], [6, 8, 5], [5, 8, 0]], // 234 = 0b1110_1010
  &[[2, 9, 8], [1, 5, 6]], // 235 = 0b1110_1011
  &[[8, 4, 3], [8, 3, 9], [9, 3, 1]], // 236 = 0b1110_1100
  &[[0, 4, 3], [2, 9, 8]], // 237 = 0b1110_1101
  &[[8, 0, 1], [9, 8, 1]], // 238 = 0b1110_1110
  &[[8, 2, 9]], // 239 = 0b1110_1111
  &[[4, 7, 2], [7, 6, 2]], // 240 = 0b1111_0000
  &[[1, 0, 4], [1, 4, 6], [6, 4, 7]], // 241 = 0b1111_0001
  &[[0, 3, 7], [0, 7, 2], [2, 7, 6]], // 242 = 0b1111_0010
  &[[1, 3, 7], [6, 1, 7]], // 243 = 0b1111_0011
  &[[5, 1, 2], [5, 2, 7], [7, 2, 4]], // 244 = 0b1111_0100
  &[[4, 7, 5], [0, 4, 5]], // 245 = 0b1111_0101
  &[[0, 1, 2], [3, 7, 5]], // 246 = 0b1111_0110
  &[[3, 7, 5]], // 247 = 0b1111_0111
  &[[3, 5, 6], [3, 6, 4], [4, 6, 2]], // 248 = 0b1111_1000
  &[[3, 0, 4], [5, 6, 1]], // 249 = 0b1111_1001
  &[[0, 5, 6], [2, 0, 6]], // 250 = 0b1111_1010
  &[[1, 5, 6]], // 251 = 0b1111_1011
  &[[3, 1, 2], [4, 3, 2]], // 252 = 0b1111_1100
  &[[0, 4, 3]], // 253 = 0b1111_1101
  &[[0, 1, 2]], // 254 = 0b1111_1110
  &[], // 255 = 0b1111_1111
];

/// Corners connected by `edge`.
///
/// # Panics
///
/// Panics if `edge >= 12`. Edge indices only come from the static tables, so
/// an out-of-range index is a bug, not an input error.
#[inline]
pub fn edge_corners(edge: usize) -> [u8; 2] {
  assert!(edge < EDGE_COUNT, "edge index {edge} out of range");
  EDGE_CORNERS[edge]
}

/// Checked form of [`edge_corners`].
pub fn try_edge_corners(edge: usize) -> Result<[u8; 2], TableError> {
  let corners = *EDGE_CORNERS
    .get(edge)
    .ok_or(TableError::EdgeOutOfRange { edge })?;

  for corner in corners {
    if corner as usize >= CORNER_COUNT {
      return Err(TableError::CornerOutOfRange { edge, corner });
    }
  }
  if corners[0] == corners[1] {
    return Err(TableError::DegenerateEdge {
      edge,
      corner: corners[0],
    });
  }

  Ok(corners)
}

/// Triangles for a corner configuration.
#[inline]
pub fn triangles_for(configuration: u8) -> &'static [[u8; 3]] {
  TRIANGLE_TABLE[configuration as usize]
}

/// Triangles for a configuration held in a wider integer.
///
/// General-purpose checked lookup: values above 255 are rejected instead of
/// truncated. Callers that already hold a `u8` use [`triangles_for`].
pub fn try_triangles_for(configuration: u32) -> Result<&'static [[u8; 3]], TableError> {
  let configuration = u8::try_from(configuration)
    .map_err(|_| TableError::ConfigurationOutOfRange {
      value: configuration,
    })?;
  Ok(triangles_for(configuration))
}

/// Exhaustively check the case tables against each other.
///
/// Every referenced edge must resolve to two distinct corners and every
/// entry must pass [`validate_entry`].
pub fn validate_tables() -> Result<(), TableError> {
  for edge in 0..EDGE_COUNT {
    try_edge_corners(edge)?;
  }

  for (index, triangles) in TRIANGLE_TABLE.iter().enumerate() {
    validate_entry(index as u8, triangles)?;
  }

  Ok(())
}

/// Check one table entry against its configuration.
///
/// - At most [`MAX_TRIANGLES`] triangles, each on three distinct edges.
/// - The edges used are exactly the edges the surface crosses.
/// - A segment joining two edges that share no cube face lies inside the
///   cell and is used by exactly two triangles, once in each direction.
/// - A segment joining two edges on a common face lies on that face and is
///   used once. On a face with four crossed edges it joins edges that meet
///   at a corner.
pub fn validate_entry(configuration: u8, triangles: &[[u8; 3]]) -> Result<(), TableError> {
  if triangles.len() > MAX_TRIANGLES {
    return Err(TableError::TooManyTriangles {
      configuration,
      count: triangles.len(),
      max: MAX_TRIANGLES,
    });
  }

  let crossed = EDGE_MASKS[configuration as usize];
  let mut used = 0u16;
  // uses[from][to]: directed segment count
  let mut uses = [[0u8; EDGE_COUNT]; EDGE_COUNT];

  for &triangle in triangles {
    for edge in triangle {
      let edge = edge as usize;
      try_edge_corners(edge)?;
      if crossed & (1 << edge) == 0 {
        return Err(TableError::EdgeNotCrossed {
          configuration,
          edge,
        });
      }
      used |= 1 << edge;
    }

    let [a, b, c] = triangle.map(usize::from);
    if a == b || b == c || c == a {
      return Err(TableError::DegenerateTriangle {
        configuration,
        triangle,
      });
    }
    for (from, to) in [(a, b), (b, c), (c, a)] {
      uses[from][to] += 1;
    }
  }

  let missing = crossed & !used;
  if missing != 0 {
    return Err(TableError::EdgeMissing {
      configuration,
      edge: missing.trailing_zeros() as usize,
    });
  }

  for x in 0..EDGE_COUNT {
    for y in (x + 1)..EDGE_COUNT {
      let forward = uses[x][y];
      let backward = uses[y][x];
      if forward + backward == 0 {
        continue;
      }

      match shared_face(x, y) {
        Some(face) => {
          let crossed_on_face = (crossed & FACE_EDGE_MASKS[face]).count_ones();
          if forward + backward != 1 || (crossed_on_face == 4 && !edges_meet(x, y)) {
            return Err(TableError::FaceSegment {
              configuration,
              edges: [x, y],
            });
          }
        }
        None => {
          if forward != 1 || backward != 1 {
            return Err(TableError::InteriorSegment {
              configuration,
              edges: [x, y],
            });
          }
        }
      }
    }
  }

  Ok(())
}

/// Bitmask of the 4 edges on each face, indexed `axis * 2 + side`.
pub const FACE_EDGE_MASKS: [u16; FACE_COUNT] = generate_face_edge_masks();

const fn generate_face_edge_masks() -> [u16; FACE_COUNT] {
  let mut masks = [0u16; FACE_COUNT];
  let mut face = 0;
  while face < FACE_COUNT {
    let axis = face / 2;
    let side = (face % 2) as u8;
    let mut edge = 0;
    while edge < EDGE_COUNT {
      let [a, b] = EDGE_CORNERS[edge];
      if (a >> axis) & 1 == side && (b >> axis) & 1 == side {
        masks[face] |= 1 << edge;
      }
      edge += 1;
    }
    face += 1;
  }
  masks
}

/// The face both edges lie on, if any.
fn shared_face(a: usize, b: usize) -> Option<usize> {
  let pair = (1u16 << a) | (1u16 << b);
  FACE_EDGE_MASKS.iter().position(|&mask| mask & pair == pair)
}

/// True when two edges share a corner.
fn edges_meet(a: usize, b: usize) -> bool {
  let [a0, a1] = EDGE_CORNERS[a];
  let [b0, b1] = EDGE_CORNERS[b];
  a0 == b0 || a0 == b1 || a1 == b0 || a1 == b1
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
