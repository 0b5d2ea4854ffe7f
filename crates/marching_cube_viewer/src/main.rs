//! marching_cube_viewer - Interactive single-cell marching cubes
//!
//! Controls:
//! - Left click / tap on a corner sphere: toggle that corner
//! - Left drag / touch drag: rotate the cube

mod config;

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use marching_cube_bevy::MarchingCubePlugin;
use std::path::PathBuf;

use config::{OutputMode, Overrides, ViewerConfig};

/// Interactive single-cell marching cubes viewer.
#[derive(Parser, Debug)]
#[command(name = "marching_cube_viewer")]
#[command(about = "Toggle cube corners and watch the marching cubes surface")]
struct Args {
  /// Path to configuration TOML file.
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Cube edge length.
  #[arg(long)]
  cube_size: Option<f32>,

  /// Corner marker sphere radius.
  #[arg(long)]
  marker_radius: Option<f32>,

  /// Radians per normalized viewport unit of drag.
  #[arg(long, allow_negative_numbers = true)]
  rotation_speed: Option<f32>,

  /// Surface mesh granularity.
  #[arg(long, value_enum)]
  triangle_output: Option<OutputMode>,

  /// Initial corner mask (0-255), bit i = corner i solid.
  #[arg(long)]
  configuration: Option<u8>,
}

impl Args {
  fn overrides(&self) -> Overrides {
    Overrides {
      cube_size: self.cube_size,
      marker_radius: self.marker_radius,
      rotation_speed: self.rotation_speed,
      triangle_output: self.triangle_output,
      configuration: self.configuration,
    }
  }
}

fn main() -> Result<()> {
  let args = Args::parse();

  let config = match &args.config {
    Some(path) => ViewerConfig::load(path)?,
    None => ViewerConfig::default(),
  };
  let config = config.apply(&args.overrides())?;
  let visualizer = config.build_visualizer()?;

  App::new()
    .add_plugins(
      DefaultPlugins
        .set(WindowPlugin {
          primary_window: Some(Window {
            title: config.window_title.clone(),
            ..default()
          }),
          ..default()
        })
        .set(LogPlugin {
          filter: config.log_filter.clone(),
          ..default()
        }),
    )
    .add_plugins(MarchingCubePlugin::new(visualizer))
    .run();

  Ok(())
}
