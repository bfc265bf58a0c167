mod camera;
mod prism;
mod scene;

pub use camera::{Axis, Camera};

pub use prism::{EDGES, FACES, Face, Prism, pack_rgb};

pub use scene::{Scene, SceneError};
