//! Per-corner solidity flags.
//!
//! The corner configuration is never stored; it is derived from the flags on
//! every call, so the two cannot drift apart.

use crate::constants::CORNER_COUNT;

/// Solid/empty state of the 8 cube corners, keyed by corner index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CornerStates {
  solid: [bool; CORNER_COUNT],
}

impl CornerStates {
  /// All corners empty.
  pub fn new() -> Self {
    Self::default()
  }

  /// Flags matching a configuration bitmask.
  pub fn from_configuration(configuration: u8) -> Self {
    Self {
      solid: std::array::from_fn(|i| (configuration >> i) & 1 == 1),
    }
  }

  /// Build the 8-bit configuration: bit `i` set iff corner `i` is solid.
  #[inline]
  pub fn configuration(&self) -> u8 {
    self
      .solid
      .iter()
      .enumerate()
      .fold(0u8, |mask, (i, &solid)| mask | ((solid as u8) << i))
  }

  #[inline]
  pub fn is_solid(&self, corner: u8) -> bool {
    self.solid[Self::slot(corner)]
  }

  pub fn set_solid(&mut self, corner: u8, solid: bool) {
    self.solid[Self::slot(corner)] = solid;
  }

  /// Flip one corner and return its new state.
  ///
  /// Only the flag changes; callers re-run triangulation themselves, which
  /// lets several toggles share a single pass.
  pub fn toggle(&mut self, corner: u8) -> bool {
    let slot = Self::slot(corner);
    self.solid[slot] = !self.solid[slot];
    self.solid[slot]
  }

  /// Number of solid corners.
  pub fn solid_count(&self) -> usize {
    self.solid.iter().filter(|&&s| s).count()
  }

  /// Mark every corner empty.
  pub fn clear(&mut self) {
    self.solid = [false; CORNER_COUNT];
  }

  /// `(corner, solid)` pairs in index order.
  pub fn iter(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
    self
      .solid
      .iter()
      .enumerate()
      .map(|(i, &solid)| (i as u8, solid))
  }

  #[inline]
  fn slot(corner: u8) -> usize {
    let slot = corner as usize;
    assert!(slot < CORNER_COUNT, "corner index {corner} out of range");
    slot
  }
}

impl From<u8> for CornerStates {
  fn from(configuration: u8) -> Self {
    Self::from_configuration(configuration)
  }
}

#[cfg(test)]
#[path = "corners_test.rs"]
mod corners_test;
