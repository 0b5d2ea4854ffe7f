use super::*;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn corner_ray(visualizer: &CubeVisualizer, corner: u8) -> PickRay {
  let camera = Vec3::new(0.0, 0.0, 5.0);
  let target = visualizer.geometry().corner_position(corner);
  PickRay::new(camera, target - camera)
}

#[test]
fn test_click_picks_corner() {
  let mut visualizer = CubeVisualizer::default();
  let mut pointer = PointerState::default();
  let ray = corner_ray(&visualizer, 7);
  let position = Vec2::new(400.0, 300.0);

  apply_pointer(&mut visualizer, &mut pointer, PointerPhase::Pressed, position, VIEWPORT, |_| None);
  let picked = apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Released,
    position,
    VIEWPORT,
    |_| Some(ray),
  );

  assert!(picked);
  assert!(visualizer.corners().is_solid(7));
  assert_eq!(visualizer.surface().triangle_count(), 1);
}

#[test]
fn test_drag_rotates_without_picking() {
  let mut visualizer = CubeVisualizer::default();
  let mut pointer = PointerState::default();
  let ray = corner_ray(&visualizer, 7);

  apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Pressed,
    Vec2::new(400.0, 300.0),
    VIEWPORT,
    |_| None,
  );
  apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Moved,
    Vec2::new(480.0, 300.0),
    VIEWPORT,
    |_| None,
  );
  let picked = apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Released,
    Vec2::new(480.0, 300.0),
    VIEWPORT,
    |_| Some(ray),
  );

  assert!(!picked);
  assert_eq!(visualizer.configuration(), 0);
  assert!(!visualizer.rotation().is_dragging());

  // 80px of an 800px viewport is 0.2 normalized units
  let (axis, angle) = visualizer.rotation().orientation.to_axis_angle();
  assert!((angle - 0.2).abs() < 1.0e-4);
  assert!(axis.abs().abs_diff_eq(Vec3::Y, 1.0e-4));
}

#[test]
fn test_release_without_ray_is_not_pick() {
  let mut visualizer = CubeVisualizer::default();
  let mut pointer = PointerState::default();
  let position = Vec2::new(10.0, 10.0);

  apply_pointer(&mut visualizer, &mut pointer, PointerPhase::Pressed, position, VIEWPORT, |_| None);
  let picked = apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Released,
    position,
    VIEWPORT,
    |_| None,
  );

  assert!(!picked);
  assert_eq!(visualizer.generation(), 1);
}

#[test]
fn test_click_on_empty_space_changes_nothing() {
  let mut visualizer = CubeVisualizer::default();
  let mut pointer = PointerState::default();
  let position = Vec2::new(5.0, 5.0);
  let miss = PickRay::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 1.0, 0.0));

  apply_pointer(&mut visualizer, &mut pointer, PointerPhase::Pressed, position, VIEWPORT, |_| None);
  let picked = apply_pointer(
    &mut visualizer,
    &mut pointer,
    PointerPhase::Released,
    position,
    VIEWPORT,
    |_| Some(miss),
  );

  assert!(!picked);
  assert_eq!(visualizer.configuration(), 0);
}

#[test]
fn test_mouse_phases() {
  assert!(mouse_phases(false, false, false).is_empty());
  assert_eq!(mouse_phases(true, true, false), vec![PointerPhase::Pressed]);
  assert_eq!(mouse_phases(false, true, false), vec![PointerPhase::Moved]);
  assert_eq!(mouse_phases(false, false, true), vec![PointerPhase::Released]);
}

#[test]
fn test_press_and_release_in_one_frame_still_picks() {
  // ButtonInput reports a sub-frame click as just pressed and just released
  // with the button no longer held
  let phases = mouse_phases(true, false, true);
  assert_eq!(phases, vec![PointerPhase::Pressed, PointerPhase::Released]);

  let mut visualizer = CubeVisualizer::default();
  let mut pointer = PointerState::default();
  let ray = corner_ray(&visualizer, 0);
  let position = Vec2::new(300.0, 400.0);

  let picked: Vec<bool> = phases
    .into_iter()
    .map(|phase| {
      apply_pointer(&mut visualizer, &mut pointer, phase, position, VIEWPORT, |_| Some(ray))
    })
    .collect();

  assert_eq!(picked, vec![false, true]);
  assert!(visualizer.corners().is_solid(0));
  assert_eq!(pointer, PointerState::default());
}
