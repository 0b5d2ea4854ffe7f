//! Viewer configuration: TOML file plus CLI overrides.

use anyhow::{Context, Result};
use bevy::math::Vec3;
use clap::ValueEnum;
use marching_cube::constants::{
  DEFAULT_CUBE_SIZE, DEFAULT_MARKER_RADIUS, DEFAULT_OUTLINE_THRESHOLD_DEGREES,
  DEFAULT_ROTATION_SPEED,
};
use marching_cube::{CornerStates, CubeVisualizer, TriangleOutput, VisualizerConfig};
use serde::Deserialize;
use std::path::Path;

/// Root viewer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
  /// Primary window title.
  pub window_title: String,
  /// `LogPlugin` filter directive.
  pub log_filter: String,
  /// Cube edge length.
  pub cube_size: CubeSize,
  /// Corner marker sphere radius.
  pub marker_radius: f32,
  /// Radians per normalized viewport unit of drag.
  pub rotation_speed: f32,
  /// Surface mesh granularity.
  pub triangle_output: OutputMode,
  /// Outline crease threshold in degrees.
  pub outline_threshold_degrees: f32,
  /// Initial corner mask.
  pub initial_configuration: u8,
}

/// Cube edge length, uniform or per axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CubeSize {
  Uniform(f32),
  PerAxis([f32; 3]),
}

/// Surface mesh granularity as written in TOML and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
  #[default]
  Shared,
  PerTriangle,
}

impl Default for ViewerConfig {
  fn default() -> Self {
    Self {
      window_title: "Marching Cube".into(),
      log_filter: default_log_filter(),
      cube_size: CubeSize::Uniform(DEFAULT_CUBE_SIZE),
      marker_radius: DEFAULT_MARKER_RADIUS,
      rotation_speed: DEFAULT_ROTATION_SPEED,
      triangle_output: OutputMode::Shared,
      outline_threshold_degrees: DEFAULT_OUTLINE_THRESHOLD_DEGREES,
      initial_configuration: 0,
    }
  }
}

fn default_log_filter() -> String {
  "wgpu=error,naga=warn".into()
}

impl CubeSize {
  pub fn to_vec3(self) -> Vec3 {
    match self {
      CubeSize::Uniform(size) => Vec3::splat(size),
      CubeSize::PerAxis(size) => Vec3::from_array(size),
    }
  }
}

impl From<OutputMode> for TriangleOutput {
  fn from(mode: OutputMode) -> Self {
    match mode {
      OutputMode::Shared => TriangleOutput::Shared,
      OutputMode::PerTriangle => TriangleOutput::PerTriangle,
    }
  }
}

/// Command-line overrides. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
  pub cube_size: Option<f32>,
  pub marker_radius: Option<f32>,
  pub rotation_speed: Option<f32>,
  pub triangle_output: Option<OutputMode>,
  pub configuration: Option<u8>,
}

impl ViewerConfig {
  /// Load configuration from a TOML file.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Self::parse(&content)
      .with_context(|| format!("Invalid config file: {}", path.display()))
  }

  /// Parse and validate configuration from TOML text.
  pub fn parse(content: &str) -> Result<Self> {
    let config: ViewerConfig =
      toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
    config.validate()?;
    Ok(config)
  }

  /// Apply command-line overrides, then re-validate.
  pub fn apply(mut self, overrides: &Overrides) -> Result<Self> {
    if let Some(size) = overrides.cube_size {
      self.cube_size = CubeSize::Uniform(size);
    }
    if let Some(radius) = overrides.marker_radius {
      self.marker_radius = radius;
    }
    if let Some(speed) = overrides.rotation_speed {
      self.rotation_speed = speed;
    }
    if let Some(output) = overrides.triangle_output {
      self.triangle_output = output;
    }
    if let Some(configuration) = overrides.configuration {
      self.initial_configuration = configuration;
    }
    self.validate()?;
    Ok(self)
  }

  pub fn validate(&self) -> Result<()> {
    if self.window_title.trim().is_empty() {
      anyhow::bail!("window_title must not be empty");
    }
    self
      .visualizer_config()
      .validate()
      .context("Invalid visualizer settings")?;
    Ok(())
  }

  /// Core visualizer settings.
  pub fn visualizer_config(&self) -> VisualizerConfig {
    VisualizerConfig::new()
      .with_cube_size(self.cube_size.to_vec3())
      .with_marker_radius(self.marker_radius)
      .with_rotation_speed(self.rotation_speed)
      .with_triangle_output(self.triangle_output.into())
      .with_outline_threshold(self.outline_threshold_degrees)
  }

  /// Build the initial visualizer state.
  pub fn build_visualizer(&self) -> Result<CubeVisualizer> {
    let corners = CornerStates::from_configuration(self.initial_configuration);
    CubeVisualizer::with_corners(self.visualizer_config(), corners)
      .context("Invalid visualizer settings")
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
