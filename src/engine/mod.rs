pub mod clip;
pub mod cull;
mod engine;
pub mod transform;
mod types;

pub use engine::Engine;
pub use types::{FrameStats, RenderMode, Screen};
