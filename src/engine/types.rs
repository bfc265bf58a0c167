use glam::{Vec2, vec2};

use super::clip::Rect;

/// Constants that depend on the *frame-buffer*, not on the scene.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub w_f: f32, // pre-derived for speed
    pub h_f: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            w_f: w as f32,
            h_f: h as f32,
        }
    }

    /// NDC → whole-pixel position; +y in NDC is up, +y on screen is down.
    #[inline]
    pub fn to_pixels(&self, ndc: Vec2) -> Vec2 {
        vec2(
            ((ndc.x + 1.0) * 0.5 * self.w_f).floor(),
            ((1.0 - (ndc.y + 1.0) * 0.5) * self.h_f).floor(),
        )
    }

    /// Pixel rectangle segments are clipped to.
    pub fn clip_rect(&self) -> Rect {
        Rect::new(Vec2::ZERO, vec2(self.w_f - 1.0, self.h_f - 1.0))
    }
}

/// Filled faces with depth buffer, or clipped edges only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    #[default]
    Filled,
    Wireframe,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Filled => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Filled,
        }
    }
}

/// What happened to the scene's primitives in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces considered (filled mode).
    pub faces: usize,
    /// Faces dropped as back-facing.
    pub culled: usize,
    /// Faces or prisms dropped as behind the eye or degenerate.
    pub rejected: usize,
    /// Polygons handed to the rasterizer.
    pub polygons: usize,
    /// Clipped line segments handed to the rasterizer (wireframe mode).
    pub segments: usize,
}
