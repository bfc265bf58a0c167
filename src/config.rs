//! Viewer tunables.
//!
//! Every field has a default, so a settings file only needs to list the
//! values it changes:
//!
//! ```json
//! { "width": 640, "height": 480, "fov_limits": [30.0, 100.0] }
//! ```

use std::{
    f32::consts::PI,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::Rgba;

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read settings `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/*──────────────────────────── Settings ─────────────────────────────*/

/// Per-axis rotation step in radians.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RotStep {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for RotStep {
    fn default() -> Self {
        Self {
            x: PI / 60.0,
            y: PI / 40.0,
            z: PI / 20.0,
        }
    }
}

impl RotStep {
    #[inline]
    pub fn get(&self, axis_index: usize) -> f32 {
        match axis_index {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /* viewport */
    pub width: usize,
    pub height: usize,
    pub clear_colour: Rgba,

    /* lens, degrees except near/far */
    pub fov: f32,
    pub fov_limits: (f32, f32),
    pub near: f32,
    pub far: f32,

    /* command steps */
    pub move_step: f32,
    pub rot_step: RotStep,
    pub zoom_step: f32,

    /* key auto-repeat, milliseconds */
    pub hold_delay_ms: u64,
    pub repeat_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 900,
            clear_colour: 0x00_000000,
            fov: 90.0,
            fov_limits: (20.0, 120.0),
            near: 0.1,
            far: 100.0,
            move_step: 1.0,
            rot_step: RotStep::default(),
            zoom_step: 5.0,
            hold_delay_ms: 400,
            repeat_interval_ms: 50,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?;
        settings.validate()?;
        log::info!(
            "settings loaded from {}: {}x{}, fov {}°",
            path.display(),
            settings.width,
            settings.height,
            settings.fov
        );
        Ok(settings)
    }

    /// Check the construction invariants the camera and framebuffer rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid("viewport must be at least 1x1"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::Invalid("need 0 < near < far"));
        }
        let (lo, hi) = self.fov_limits;
        if !(lo > 0.0 && lo <= hi && hi < 180.0) {
            return Err(ConfigError::Invalid("fov limits must satisfy 0 < min <= max < 180"));
        }
        if !(lo..=hi).contains(&self.fov) {
            return Err(ConfigError::Invalid("default fov outside fov limits"));
        }
        Ok(())
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
