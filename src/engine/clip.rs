//! Cohen–Sutherland segment clipping against an axis-aligned rectangle.

use bitflags::bitflags;
use glam::{Vec2, vec2};

bitflags! {
    /// Which half-planes outside the rectangle a point lies in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT   = 0x01;
        const RIGHT  = 0x02;
        const BELOW  = 0x04; // y < min.y
        const ABOVE  = 0x08; // y > max.y
    }
}

/// Inclusive clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn outcode(&self, p: Vec2) -> Outcode {
        let mut code = Outcode::empty();
        if p.y > self.max.y {
            code |= Outcode::ABOVE;
        } else if p.y < self.min.y {
            code |= Outcode::BELOW;
        }
        if p.x > self.max.x {
            code |= Outcode::RIGHT;
        } else if p.x < self.min.x {
            code |= Outcode::LEFT;
        }
        code
    }
}

/// Upper bound on boundary passes; four suffice in exact arithmetic.
const MAX_PASSES: usize = 8;

/// Clip `p0 → p1` to `rect`.
///
/// Returns the visible piece, or `None` if nothing of the segment is
/// inside. Endpoints already inside are returned bit-for-bit unchanged.
pub fn clip_segment(mut p0: Vec2, mut p1: Vec2, rect: &Rect) -> Option<(Vec2, Vec2)> {
    let mut code0 = rect.outcode(p0);
    let mut code1 = rect.outcode(p1);

    for _ in 0..MAX_PASSES {
        if code0.is_empty() && code1.is_empty() {
            return Some((p0, p1));
        }
        if code0.intersects(code1) {
            return None;
        }

        let out = if code0.is_empty() { code1 } else { code0 };
        let d = p1 - p0;

        let hit = if out.contains(Outcode::ABOVE) {
            vec2(p0.x + d.x * ratio(rect.max.y - p0.y, d.y)?, rect.max.y)
        } else if out.contains(Outcode::BELOW) {
            vec2(p0.x + d.x * ratio(rect.min.y - p0.y, d.y)?, rect.min.y)
        } else if out.contains(Outcode::RIGHT) {
            vec2(rect.max.x, p0.y + d.y * ratio(rect.max.x - p0.x, d.x)?)
        } else {
            vec2(rect.min.x, p0.y + d.y * ratio(rect.min.x - p0.x, d.x)?)
        };

        if out == code0 {
            p0 = hit;
            code0 = rect.outcode(p0);
        } else {
            p1 = hit;
            code1 = rect.outcode(p1);
        }
    }
    None
}

/// `num / den`, or `None` for a segment parallel to the boundary.
#[inline]
fn ratio(num: f32, den: f32) -> Option<f32> {
    (den != 0.0).then(|| num / den)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
