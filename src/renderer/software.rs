//! ---------------------------------------------------------------------------
//! Software (CPU) scanline renderer
//!
//! * Fills an `&mut [u32]` frame-buffer in **0x00RRGGBB** format.
//! * Keeps a co-sized `f32` depth buffer; a pixel's colour always belongs to
//!   the smallest depth written to it this frame, whatever the draw order.
//! * Lines (wireframe mode) are plotted with integer Bresenham and ignore
//!   depth.
//! ---------------------------------------------------------------------------

mod renderer;
mod scanline;

pub use renderer::Software;

/// Added to every denominator that may vanish (edge dy, span length).
pub(crate) const EPS: f32 = 1e-6;
