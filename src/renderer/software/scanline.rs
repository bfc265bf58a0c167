use smallvec::SmallVec;

use super::{EPS, Software};
use crate::renderer::{Rgba, ScreenPolygon};

/// `(x, depth)` where an edge crosses the current scanline.
type Crossing = (f32, f32);

impl Software {
    /// Even-odd scanline fill of an arbitrary (possibly concave) polygon.
    ///
    /// Polygons with fewer than three points are ignored.
    pub(super) fn fill_polygon(&mut self, poly: &ScreenPolygon) {
        let pts = &poly.points;
        let n = pts.len();
        if n < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let (min_y, max_y) = pts
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let y_first = (min_y.floor() as i32).max(0);
        let y_last = (max_y.ceil() as i32).min(self.height as i32 - 1);

        let mut crossings: SmallVec<[Crossing; 8]> = SmallVec::new();

        for y in y_first..=y_last {
            let yf = y as f32;
            crossings.clear();

            for i in 0..n {
                let a = pts[i];
                let b = pts[(i + 1) % n];

                /* flat edge lying on this row: no crossing exists, draw it */
                if a.y == b.y {
                    if a.y.floor() as i32 == y {
                        self.fill_span(y as usize, (a.x, a.z), (b.x, b.z), poly.colour);
                    }
                    continue;
                }

                /* half-open [lo, hi) so shared vertices count once */
                let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
                if yf < lo || yf >= hi {
                    continue;
                }

                let t = (yf - a.y) / (b.y - a.y + EPS);
                crossings.push((a.x + t * (b.x - a.x), a.z + t * (b.z - a.z)));
            }

            crossings.sort_by(|l, r| l.0.total_cmp(&r.0));
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y as usize, pair[0], pair[1], poly.colour);
            }
        }
    }

    /// Depth-tested horizontal run between two crossings on row `y`.
    ///
    /// Depth is interpolated linearly in x and kept within the endpoint
    /// range, so a near-zero span length cannot overshoot.
    fn fill_span(&mut self, y: usize, a: Crossing, b: Crossing, colour: Rgba) {
        let ((x0, z0), (x1, z1)) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        let ix0 = (x0.floor() as i32).max(0);
        let ix1 = (x1.floor() as i32).min(self.width as i32 - 1);
        if ix0 > ix1 {
            return;
        }

        let dz = (z1 - z0) / (x1 - x0 + EPS);
        let (z_lo, z_hi) = if z0 <= z1 { (z0, z1) } else { (z1, z0) };

        for x in ix0..=ix1 {
            let z = (z0 + (x as f32 - x0) * dz).clamp(z_lo, z_hi);
            self.plot(x as usize, y, z, colour);
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, Renderer, RendererExt};
    use glam::{Vec3, vec3};
    use smallvec::smallvec;

    const RED: Rgba = 0x00_FF0000;
    const BLUE: Rgba = 0x00_0000FF;

    fn quad(x0: f32, y0: f32, x1: f32, y1: f32, z: f32, colour: Rgba) -> ScreenPolygon {
        ScreenPolygon {
            points: smallvec![
                vec3(x0, y0, z),
                vec3(x1, y0, z),
                vec3(x1, y1, z),
                vec3(x0, y1, z),
            ],
            colour,
        }
    }

    fn frame(w: usize, h: usize) -> Software {
        let mut sw = Software::default();
        sw.begin_frame(w, h, 0);
        sw
    }

    fn count(sw: &Software, colour: Rgba) -> usize {
        sw.pixels().iter().filter(|&&p| p == colour).count()
    }

    #[test]
    fn fills_axis_aligned_quad() {
        let mut sw = frame(16, 16);
        sw.fill_polygon(&quad(2.0, 3.0, 6.0, 8.0, 1.0, RED));

        assert_eq!(sw.pixel(2, 3), Some(RED));
        assert_eq!(sw.pixel(6, 8), Some(RED));
        assert_eq!(sw.pixel(1, 3), Some(0));
        assert_eq!(sw.pixel(7, 5), Some(0));
        assert_eq!(sw.pixel(4, 9), Some(0));
        assert_eq!(count(&sw, RED), 5 * 6);
    }

    #[test]
    fn closer_polygon_wins_in_any_order() {
        let near = quad(0.0, 0.0, 9.0, 9.0, 1.0, RED);
        let far = quad(4.0, 4.0, 12.0, 12.0, 2.0, BLUE);

        for order in [[&near, &far], [&far, &near]] {
            let mut sw = frame(16, 16);
            for p in order {
                sw.draw_polygon(p);
            }
            assert_eq!(sw.pixel(5, 5), Some(RED));
            assert_eq!(sw.pixel(11, 11), Some(BLUE));
            assert_eq!(sw.depth_at(5, 5), Some(1.0));
        }
    }

    #[test]
    fn depth_interpolates_across_span() {
        let mut sw = frame(16, 4);
        let poly = ScreenPolygon {
            points: smallvec![
                vec3(0.0, 0.0, 1.0),
                vec3(10.0, 0.0, 11.0),
                vec3(10.0, 3.0, 11.0),
                vec3(0.0, 3.0, 1.0),
            ],
            colour: RED,
        };
        sw.fill_polygon(&poly);
        let z = sw.depth_at(5, 1).unwrap();
        assert!((z - 6.0).abs() < 1e-3, "z = {z}");
    }

    #[test]
    fn sloped_triangle_stays_inside_edges() {
        let mut sw = frame(16, 16);
        let tri = ScreenPolygon {
            points: smallvec![
                vec3(0.0, 0.0, 1.0),
                vec3(10.0, 10.0, 1.0),
                vec3(0.0, 10.0, 1.0),
            ],
            colour: RED,
        };
        sw.fill_polygon(&tri);
        assert_eq!(sw.pixel(1, 8), Some(RED));
        assert_eq!(sw.pixel(8, 2), Some(0));
        assert_eq!(sw.pixel(12, 12), Some(0));
    }

    #[test]
    fn clips_to_viewport() {
        let mut sw = frame(8, 8);
        sw.fill_polygon(&quad(-20.0, -20.0, 40.0, 40.0, 1.0, RED));
        assert_eq!(count(&sw, RED), 64);
    }

    #[test]
    fn entirely_offscreen_draws_nothing() {
        let mut sw = frame(8, 8);
        sw.fill_polygon(&quad(20.0, 2.0, 30.0, 5.0, 1.0, RED));
        sw.fill_polygon(&quad(-30.0, 2.0, -20.0, 5.0, 1.0, RED));
        sw.fill_polygon(&quad(2.0, -30.0, 5.0, -20.0, 1.0, RED));
        assert_eq!(count(&sw, RED), 0);
    }

    #[test]
    fn degenerate_polygons_are_skipped() {
        let mut sw = frame(8, 8);
        let line = ScreenPolygon {
            points: smallvec![vec3(1.0, 1.0, 1.0), vec3(5.0, 5.0, 1.0)],
            colour: RED,
        };
        sw.fill_polygon(&line);
        let empty = ScreenPolygon {
            points: SmallVec::<[Vec3; 4]>::new(),
            colour: RED,
        };
        sw.fill_polygon(&empty);
        assert_eq!(count(&sw, RED), 0);
    }

    #[test]
    fn zero_width_span_does_not_overshoot_depth() {
        let mut sw = frame(8, 8);
        // vertical sliver: both crossings share x, depths differ
        let sliver = ScreenPolygon {
            points: smallvec![
                vec3(3.5, 1.0, 2.0),
                vec3(3.5, 6.0, 4.0),
                vec3(3.5, 4.0, 8.0),
            ],
            colour: RED,
        };
        sw.fill_polygon(&sliver);
        for y in 0..8 {
            if let Some(z) = sw.depth_at(3, y).filter(|z| z.is_finite()) {
                assert!((2.0..=8.0).contains(&z), "z = {z} at row {y}");
            }
        }
    }

    #[test]
    fn draw_frame_resolves_depth_not_order() {
        let near = quad(0.0, 0.0, 9.0, 9.0, 1.0, RED); // order key 9
        let far = quad(0.0, 0.0, 9.0, 12.0, 5.0, BLUE); // order key 12, drawn last
        let mut calls = vec![DrawCall::Fill(far), DrawCall::Fill(near)];

        let mut sw = Software::default();
        let mut centre = 0;
        sw.draw_frame(16, 16, 0, &mut calls, |fb, w, _| centre = fb[4 * w + 4]);
        assert_eq!(centre, RED);
        assert_eq!(sw.pixel(4, 11), Some(BLUE));
    }
}
