//! Software rasterizer for scenes of axis-aligned prisms.
//!
//! ```text
//! world::Scene ─▶ engine::transform ─▶ engine::cull ─▶ engine::clip ─┐
//!                                                                    ▼
//!                          window ◀── renderer::Software (scanline + z-buffer)
//! ```

pub mod config;
pub mod control;
pub mod engine;
pub mod renderer;
pub mod world;
