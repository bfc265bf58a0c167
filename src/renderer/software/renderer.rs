use crate::renderer::{Renderer, Rgba, ScreenPolygon, ScreenSegment};

#[derive(Default)]
pub struct Software {
    pub(super) scratch: Vec<Rgba>,
    pub(super) depth: Vec<f32>,

    pub(super) width: usize,
    pub(super) height: usize,
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize, clear: Rgba) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
            self.depth.resize(w * h, f32::INFINITY);
        }
        self.scratch.fill(clear);
        self.depth.fill(f32::INFINITY);
    }

    fn draw_polygon(&mut self, poly: &ScreenPolygon) {
        self.fill_polygon(poly);
    }

    fn draw_line(&mut self, seg: &ScreenSegment) {
        let mut x0 = seg.from.x.round() as i32;
        let mut y0 = seg.from.y.round() as i32;
        let x1 = seg.to.x.round() as i32;
        let y1 = seg.to.y.round() as i32;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if (0..self.width as i32).contains(&x0) && (0..self.height as i32).contains(&y0) {
                self.scratch[y0 as usize * self.width + x0 as usize] = seg.colour;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

impl Software {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour buffer of the last frame, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    /// Colour at pixel (`x`, `y`), if inside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }

    /// Stored depth at pixel (`x`, `y`); +∞ where nothing was drawn.
    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.depth[y * self.width + x])
    }

    /// Depth-tested write; closer (strictly smaller) depth wins.
    #[inline]
    pub(super) fn plot(&mut self, x: usize, y: usize, z: f32, colour: Rgba) {
        let idx = y * self.width + x;
        if z < self.depth[idx] {
            self.depth[idx] = z;
            self.scratch[idx] = colour;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn begin_frame_clears_both_buffers() {
        let mut sw = Software::default();
        sw.begin_frame(4, 3, 0x00_112233);
        sw.plot(1, 1, 2.0, 0x00_FFFFFF);
        sw.begin_frame(4, 3, 0x00_112233);

        assert!(sw.pixels().iter().all(|&px| px == 0x00_112233));
        assert_eq!(sw.depth_at(1, 1), Some(f32::INFINITY));
        assert_eq!(sw.pixel(4, 0), None);
    }

    #[test]
    fn plot_keeps_the_closest() {
        let mut sw = Software::default();
        sw.begin_frame(2, 2, 0);
        sw.plot(0, 0, 5.0, 1);
        sw.plot(0, 0, 7.0, 2);
        sw.plot(0, 0, 3.0, 3);
        sw.plot(0, 0, 3.0, 4); // ties keep the first writer
        assert_eq!(sw.pixel(0, 0), Some(3));
        assert_eq!(sw.depth_at(0, 0), Some(3.0));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8, 0);
        sw.draw_line(&ScreenSegment {
            from: vec2(0.0, 0.0),
            to: vec2(7.0, 5.0),
            colour: 9,
        });
        assert_eq!(sw.pixel(0, 0), Some(9));
        assert_eq!(sw.pixel(7, 5), Some(9));
        assert_eq!(sw.pixels().iter().filter(|&&p| p == 9).count(), 8);
    }

    #[test]
    fn end_frame_loans_buffer() {
        let mut sw = Software::default();
        sw.begin_frame(3, 2, 7);
        let mut seen = (0, 0, 0);
        sw.end_frame(|fb, w, h| seen = (fb.len(), w, h));
        assert_eq!(seen, (6, 3, 2));
    }
}
