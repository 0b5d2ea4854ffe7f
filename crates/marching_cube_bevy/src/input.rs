//! Mouse and touch input for the cube visualizer.
//!
//! A press anchors a drag; motion while held rotates the assembly. A release
//! that travelled less than [`PointerState::CLICK_TOLERANCE`] pixels is a
//! click and picks corners under the pointer. Only the first touch point is
//! tracked.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use marching_cube::{normalized_cursor, CubeVisualizer, PickRay};

use crate::components::MainCamera;
use crate::resources::{PointerState, Visualizer};

/// Phase of a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
  Pressed,
  Moved,
  Released,
}

/// Apply one pointer sample to the visualizer.
///
/// `ray` is only evaluated for clicks. Returns true when the click toggled
/// at least one corner.
pub fn apply_pointer(
  visualizer: &mut CubeVisualizer,
  pointer: &mut PointerState,
  phase: PointerPhase,
  position: Vec2,
  viewport: Vec2,
  ray: impl FnOnce(Vec2) -> Option<PickRay>,
) -> bool {
  let cursor = normalized_cursor(position, viewport);

  match phase {
    PointerPhase::Pressed => {
      pointer.begin(position);
      visualizer.release_drag();
      visualizer.drag_to(cursor);
      false
    }
    PointerPhase::Moved => {
      pointer.track(position);
      visualizer.drag_to(cursor);
      false
    }
    PointerPhase::Released => {
      pointer.track(position);
      visualizer.release_drag();
      if !pointer.end() {
        return false;
      }
      let Some(ray) = ray(position) else {
        return false;
      };
      let picked = visualizer.pick(&ray);
      if picked {
        debug!(
          "Picked corners, configuration now {:#010b}",
          visualizer.configuration()
        );
      }
      picked
    }
  }
}

/// Build a pick ray through a screen position.
pub fn screen_ray(camera: &Camera, transform: &GlobalTransform, position: Vec2) -> Option<PickRay> {
  camera
    .viewport_to_world(transform, position)
    .ok()
    .map(|ray| PickRay::new(ray.origin, *ray.direction))
}

/// Left mouse button: drag to rotate, click to pick.
pub fn mouse_input(
  mouse: Res<ButtonInput<MouseButton>>,
  windows: Query<&Window, With<PrimaryWindow>>,
  cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
  mut visualizer: ResMut<Visualizer>,
  mut pointer: ResMut<PointerState>,
) {
  let Ok(window) = windows.single() else {
    return;
  };

  let phases = mouse_phases(
    mouse.just_pressed(MouseButton::Left),
    mouse.pressed(MouseButton::Left),
    mouse.just_released(MouseButton::Left),
  );
  if phases.is_empty() {
    return;
  }

  let Some(position) = window.cursor_position() else {
    // Cursor left the window; a release still ends the drag
    if phases.contains(&PointerPhase::Released) {
      visualizer.release_drag();
      pointer.end();
    }
    return;
  };

  for phase in phases {
    apply_pointer(
      &mut visualizer,
      &mut pointer,
      phase,
      position,
      window.size(),
      |position| {
        let (camera, transform) = cameras.single().ok()?;
        screen_ray(camera, transform, position)
      },
    );
  }
}

/// Pointer phases for one frame of button state, in order.
///
/// A press and release within the same frame yields both, so a quick click
/// still picks.
pub fn mouse_phases(just_pressed: bool, pressed: bool, just_released: bool) -> Vec<PointerPhase> {
  match (just_pressed, just_released) {
    (true, true) => vec![PointerPhase::Pressed, PointerPhase::Released],
    (true, false) => vec![PointerPhase::Pressed],
    (false, true) => vec![PointerPhase::Released],
    (false, false) if pressed => vec![PointerPhase::Moved],
    (false, false) => Vec::new(),
  }
}

/// First touch point: drag to rotate, tap to pick.
pub fn touch_input(
  touches: Res<Touches>,
  windows: Query<&Window, With<PrimaryWindow>>,
  cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
  mut visualizer: ResMut<Visualizer>,
  mut pointer: ResMut<PointerState>,
  mut active: Local<Option<u64>>,
) {
  let Ok(window) = windows.single() else {
    return;
  };

  let mut samples: Vec<(PointerPhase, Vec2)> = Vec::new();

  if active.is_none() {
    if let Some(touch) = touches.iter_just_pressed().next() {
      *active = Some(touch.id());
      samples.push((PointerPhase::Pressed, touch.position()));
    }
  }

  if let Some(id) = *active {
    if let Some(touch) = touches.get_pressed(id) {
      if touch.delta() != Vec2::ZERO {
        samples.push((PointerPhase::Moved, touch.position()));
      }
    } else if let Some(touch) = touches.get_released(id) {
      samples.push((PointerPhase::Released, touch.position()));
      *active = None;
    } else {
      // Cancelled
      visualizer.release_drag();
      pointer.end();
      *active = None;
    }
  }

  for (phase, position) in samples {
    apply_pointer(
      &mut visualizer,
      &mut pointer,
      phase,
      position,
      window.size(),
      |position| {
        let (camera, transform) = cameras.single().ok()?;
        screen_ray(camera, transform, position)
      },
    );
  }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;
