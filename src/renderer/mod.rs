//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! It projects the scene into a list of [`DrawCall`]s and hands them to a
//! type that implements [`Renderer`].
//!
//! * Filled quads arrive as [`ScreenPolygon`]s and are resolved per pixel
//!   against the backend's depth buffer, so submission order never decides
//!   occlusion.
//! * Wireframe edges arrive as [`ScreenSegment`]s that are already clipped
//!   to the viewport.
//! * A blanket-impl [`RendererExt`] adds `draw_frame` so call-sites stay
//!   short.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Screen-space projection of one face.
///
/// `points[i] = (x, y, depth)` with x/y in pixels and depth the camera-space
/// distance along the view axis (smaller = closer).
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenPolygon {
    pub points: SmallVec<[Vec3; 4]>,
    pub colour: Rgba,
}

impl ScreenPolygon {
    /// Draw-order key: the lowest point on screen (largest y).
    ///
    /// Only a heuristic to keep ties stable; the depth buffer decides.
    pub fn order_key(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

/// A visible line piece, endpoints inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub colour: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(ScreenPolygon),
    Line(ScreenSegment),
}

impl DrawCall {
    fn order_key(&self) -> f32 {
        match self {
            DrawCall::Fill(p) => p.order_key(),
            DrawCall::Line(_) => f32::NEG_INFINITY,
        }
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear
    /// colour to `clear` and depth to +∞.
    fn begin_frame(&mut self, width: usize, height: usize, clear: Rgba);

    /// Scan-convert one polygon, keeping only pixels closer than what the
    /// depth buffer already holds.
    fn draw_polygon(&mut self, poly: &ScreenPolygon);

    /// Draw one pre-clipped segment (no depth test).
    fn draw_line(&mut self, seg: &ScreenSegment);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    /// Clear, draw every call in max-y order, then present.
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        clear: Rgba,
        calls: &mut [DrawCall],
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height, clear);
        calls.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));
        for c in calls.iter() {
            match c {
                DrawCall::Fill(p) => self.draw_polygon(p),
                DrawCall::Line(s) => self.draw_line(s),
            }
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;
