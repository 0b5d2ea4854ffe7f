//! Bevy systems for the cube visualizer.

pub mod markers;
pub mod startup;
pub mod surface;
