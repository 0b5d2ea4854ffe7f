//! Drag-to-rotate orientation for the whole cube assembly.
//!
//! Pointer positions are normalized to `[-1, 1]` on both axes with +Y up.
//! Horizontal motion rotates about the Y axis, vertical motion about the X
//! axis; each step is composed in view space (left-multiplied) so dragging
//! always turns the cube the way the pointer moves, whatever its current
//! orientation.

use glam::{EulerRot, Quat, Vec2};

use crate::constants::DEFAULT_ROTATION_SPEED;

/// Map a pixel position (origin top-left) to normalized viewport coordinates.
#[inline]
pub fn normalized_cursor(position: Vec2, viewport_size: Vec2) -> Vec2 {
  Vec2::new(
    (position.x / viewport_size.x) * 2.0 - 1.0,
    -(position.y / viewport_size.y) * 2.0 + 1.0,
  )
}

/// Persistent assembly orientation driven by drag deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
  /// Current orientation.
  pub orientation: Quat,
  /// Radians per normalized-viewport unit of drag.
  pub speed: f32,
  /// Last cursor sample of the active drag.
  anchor: Option<Vec2>,
}

impl Default for DragRotation {
  fn default() -> Self {
    Self::new(DEFAULT_ROTATION_SPEED)
  }
}

impl DragRotation {
  pub fn new(speed: f32) -> Self {
    Self {
      orientation: Quat::IDENTITY,
      speed,
      anchor: None,
    }
  }

  /// True while a drag has an anchor sample.
  pub fn is_dragging(&self) -> bool {
    self.anchor.is_some()
  }

  /// Feed a cursor sample (normalized coordinates) of an ongoing drag.
  ///
  /// The first sample only anchors the drag. Later samples rotate by the
  /// delta from the previous one and return it.
  pub fn drag_to(&mut self, cursor: Vec2) -> Option<Vec2> {
    let previous = self.anchor.replace(cursor)?;
    let delta = cursor - previous;
    self.apply_delta(delta);
    Some(delta)
  }

  /// End the current drag; the next sample starts a new one.
  pub fn release(&mut self) {
    self.anchor = None;
  }

  /// Rotate by a normalized drag delta.
  pub fn apply_delta(&mut self, delta: Vec2) {
    if delta == Vec2::ZERO {
      return;
    }
    let step = Quat::from_euler(
      EulerRot::XYZ,
      -delta.y * self.speed,
      delta.x * self.speed,
      0.0,
    );
    self.orientation = (step * self.orientation).normalize();
  }
}

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;
