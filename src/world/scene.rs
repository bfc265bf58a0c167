//! Scene files.
//!
//! A scene is a JSON array of prism records; every field is optional:
//!
//! ```json
//! [
//!   { "size": [1, 1, 1], "position": [0, 0, -5], "color": [255, 0, 0] },
//!   { "position": [2, 0, -8] }
//! ]
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use super::prism::{Prism, pack_rgb};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("cannot read scene `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed scene `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/*──────────────────────────── file records ─────────────────────────*/

#[derive(Deserialize, Debug)]
struct PrismRecord {
    #[serde(default = "unit_size")]
    size: [f32; 3],
    #[serde(default)]
    position: [f32; 3],
    #[serde(default = "white")]
    color: [u8; 3],
}

fn unit_size() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

impl From<PrismRecord> for Prism {
    fn from(r: PrismRecord) -> Self {
        Prism::new(r.size, Vec3::from_array(r.position), pack_rgb(r.color))
    }
}

/*──────────────────────────────── Scene ────────────────────────────*/

/// Every prism in the world, in file order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub prisms: Vec<Prism>,
}

impl Scene {
    pub fn new(prisms: Vec<Prism>) -> Self {
        Self { prisms }
    }

    /// Read and decode a scene file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_owned(),
            source,
        })?;
        let scene = Self::from_json(&text).map_err(|source| SceneError::Parse {
            path: path.to_owned(),
            source,
        })?;
        log::info!("scene {}: {} prisms", path.display(), scene.prisms.len());
        Ok(scene)
    }

    /// Decode a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<PrismRecord> = serde_json::from_str(text)?;
        Ok(Self::new(records.into_iter().map(Prism::from).collect()))
    }

    /// Move every prism by `delta`; this is how camera motion is simulated.
    pub fn shift(&mut self, delta: Vec3) {
        for prism in &mut self.prisms {
            prism.position += delta;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
