use super::*;
use crate::constants::{EMPTY_CONFIGURATION, FULL_CONFIGURATION};

#[test]
fn test_tables_are_consistent() {
  assert_eq!(validate_tables(), Ok(()));
}

#[test]
fn test_edge_masks_homogeneous() {
  // All corners same state = no crossings
  assert_eq!(EDGE_MASKS[0], 0, "All empty should have no edges");
  assert_eq!(EDGE_MASKS[255], 0, "All solid should have no edges");
}

#[test]
fn test_edge_masks_single_corner() {
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let edge_count = EDGE_MASKS[mask as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
  }
}

#[test]
fn test_edge_corners_validity() {
  for edge in &EDGE_CORNERS {
    assert!(edge[0] < 8);
    assert!(edge[1] < 8);
    assert_ne!(edge[0], edge[1]);
  }
}

#[test]
fn test_edges_connect_adjacent_corners() {
  // Cube edges differ in exactly one axis bit
  for (edge, corners) in EDGE_CORNERS.iter().enumerate() {
    let diff = corners[0] ^ corners[1];
    assert_eq!(
      diff.count_ones(),
      1,
      "Edge {} connects non-adjacent corners {:?}",
      edge,
      corners
    );
  }
}

#[test]
fn test_every_entry_within_bounds() {
  for configuration in 0..=255u8 {
    let triangles = triangles_for(configuration);
    assert!(
      triangles.len() <= MAX_TRIANGLES,
      "Configuration {:#010b} has {} triangles",
      configuration,
      triangles.len()
    );
    for &edge in triangles.iter().flatten() {
      assert!(try_edge_corners(edge as usize).is_ok());
    }
  }
}

#[test]
fn test_homogeneous_configurations_are_empty() {
  assert!(triangles_for(EMPTY_CONFIGURATION).is_empty());
  assert!(triangles_for(FULL_CONFIGURATION).is_empty());
}

#[test]
fn test_complement_triangle_counts_match() {
  for configuration in 0..=255u8 {
    assert_eq!(
      triangles_for(configuration).len(),
      triangles_for(255 - configuration).len(),
      "Triangle counts differ for {} and {}",
      configuration,
      255 - configuration
    );
  }
}

#[test]
fn test_complement_reverses_winding() {
  for configuration in 0..128u8 {
    let lower = triangles_for(configuration);
    let upper = triangles_for(255 - configuration);
    for (a, b) in lower.iter().zip(upper) {
      assert_eq!([a[0], a[2], a[1]], *b);
    }
  }
}

#[test]
fn test_single_corner_uses_its_three_edges() {
  for corner in 0..8u8 {
    let triangles = triangles_for(1 << corner);
    assert_eq!(triangles.len(), 1);
    for &edge in &triangles[0] {
      assert!(
        edge_corners(edge as usize).contains(&corner),
        "Edge {} does not touch corner {}",
        edge,
        corner
      );
    }
  }
}

#[test]
fn test_max_triangles_is_reached() {
  let max = (0..=255u8)
    .map(|c| triangles_for(c).len())
    .max()
    .unwrap_or(0);
  assert_eq!(max, MAX_TRIANGLES);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_edge_corners_rejects_out_of_range() {
  edge_corners(EDGE_COUNT);
}

#[test]
fn test_try_edge_corners_out_of_range() {
  assert_eq!(
    try_edge_corners(12),
    Err(TableError::EdgeOutOfRange { edge: 12 })
  );
}

#[test]
fn test_try_triangles_for_guards_domain() {
  assert_eq!(try_triangles_for(1).map(|t| t.len()), Ok(1));
  assert_eq!(
    try_triangles_for(256),
    Err(TableError::ConfigurationOutOfRange { value: 256 })
  );
}

#[test]
fn test_every_entry_is_connected() {
  for configuration in 0..=255u8 {
    assert_eq!(
      validate_entry(configuration, triangles_for(configuration)),
      Ok(()),
      "Configuration {:#010b}",
      configuration
    );
  }
}

#[test]
fn test_face_edge_masks() {
  for mask in FACE_EDGE_MASKS {
    assert_eq!(mask.count_ones(), 4);
  }
  // Every edge lies on exactly two faces
  for edge in 0..EDGE_COUNT {
    let faces = FACE_EDGE_MASKS
      .iter()
      .filter(|&&mask| mask & (1 << edge) != 0)
      .count();
    assert_eq!(faces, 2, "Edge {} lies on {} faces", edge, faces);
  }
  // -Z face: corners 0..4
  assert_eq!(FACE_EDGE_MASKS[4], 0b0000_0010_1011);
}

#[test]
fn test_entry_rejects_repeated_edge() {
  assert_eq!(
    validate_entry(0b0000_0001, &[[0, 0, 2]]),
    Err(TableError::DegenerateTriangle {
      configuration: 1,
      triangle: [0, 0, 2],
    })
  );
}

#[test]
fn test_entry_rejects_interior_segment_with_same_direction() {
  // Corners 0 and 1: the quad's diagonal 2-3 must run opposite ways in its
  // two triangles. Flipping the first triangle breaks that.
  assert_eq!(validate_entry(0b0000_0011, &[[3, 2, 1], [4, 2, 3]]), Ok(()));
  assert_eq!(
    validate_entry(0b0000_0011, &[[1, 2, 3], [4, 2, 3]]),
    Err(TableError::InteriorSegment {
      configuration: 3,
      edges: [2, 3],
    })
  );
}

#[test]
fn test_entry_rejects_repeated_face_segment() {
  // Same triangle twice covers the right edges but doubles every face segment
  assert_eq!(
    validate_entry(0b0000_0001, &[[0, 2, 1], [0, 2, 1]]),
    Err(TableError::FaceSegment {
      configuration: 1,
      edges: [0, 1],
    })
  );
}

#[test]
fn test_entry_rejects_parallel_join_on_ambiguous_face() {
  // Corners 0 and 3 sit diagonally on the -Z face, crossing all four of its
  // edges. Joining parallel edges 1 and 3 cuts across the face.
  assert_eq!(validate_entry(0b0000_1001, &[[0, 2, 1], [3, 5, 7]]), Ok(()));
  assert_eq!(
    validate_entry(0b0000_1001, &[[0, 1, 3], [2, 5, 7]]),
    Err(TableError::FaceSegment {
      configuration: 9,
      edges: [1, 3],
    })
  );
}
