use glam::{Vec3, Vec4};

use crate::renderer::Rgba;

/// Corner indices of the six quads, counter-clockwise seen from outside so
/// `(v1 - v0) × (v2 - v0)` is the outward normal.
pub const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [2, 3, 7, 6], // +y
    [0, 4, 7, 3], // -x
    [1, 2, 6, 5], // +x
];

/// Corner index pairs of the twelve box edges.
pub const EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Pack an 8-bit RGB triple into the framebuffer's 0x00RRGGBB format.
#[inline]
pub const fn pack_rgb([r, g, b]: [u8; 3]) -> Rgba {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Axis-aligned box. Local corners are fixed at construction; only
/// `position` changes afterwards.
#[derive(Clone, Debug)]
pub struct Prism {
    local: [Vec4; 8],
    pub position: Vec3,
    pub colour: Rgba,
}

/// One quad of a prism in world space, corners ordered per [`FACES`].
#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub points: [Vec3; 4],
    pub colour: Rgba,
}

impl Prism {
    /// `size` is (width, depth, height): extents along x, z and y.
    pub fn new(size: [f32; 3], position: Vec3, colour: Rgba) -> Self {
        let [w, d, h] = size.map(|s| s * 0.5);
        Self {
            local: [
                Vec4::new(-w, -h, -d, 1.0),
                Vec4::new(w, -h, -d, 1.0),
                Vec4::new(w, h, -d, 1.0),
                Vec4::new(-w, h, -d, 1.0),
                Vec4::new(-w, -h, d, 1.0),
                Vec4::new(w, -h, d, 1.0),
                Vec4::new(w, h, d, 1.0),
                Vec4::new(-w, h, d, 1.0),
            ],
            position,
            colour,
        }
    }

    #[inline]
    pub fn local_vertices(&self) -> &[Vec4; 8] {
        &self.local
    }

    /// Corners offset by `position` (no per-prism rotation or scale).
    pub fn world_vertices(&self) -> [Vec3; 8] {
        self.local.map(|v| v.truncate() + self.position)
    }

    /// The six faces in [`FACES`] order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        let world = self.world_vertices();
        FACES.iter().map(move |&idx| Face {
            points: idx.map(|i| world[i]),
            colour: self.colour,
        })
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_maps_to_axes() {
        let p = Prism::new([2.0, 4.0, 6.0], Vec3::ZERO, 0);
        let v = p.local_vertices()[6];
        assert_eq!(v, Vec4::new(1.0, 3.0, 2.0, 1.0));
    }

    #[test]
    fn face_normals_point_outward() {
        let p = Prism::new([1.0, 1.0, 1.0], Vec3::new(5.0, -2.0, 3.0), 0);
        for face in p.faces() {
            let [v0, v1, v2, _] = face.points;
            let n = (v1 - v0).cross(v2 - v0);
            let centre = face.points.iter().copied().sum::<Vec3>() / 4.0;
            // the face centre sits on the outward side of the prism centre
            assert!(n.dot(centre - p.position) > 0.0, "inward normal: {n:?}");
        }
    }

    #[test]
    fn faces_are_planar_quads() {
        let p = Prism::new([1.0, 2.0, 3.0], Vec3::ONE, 0);
        for face in p.faces() {
            let [v0, v1, v2, v3] = face.points;
            let n = (v1 - v0).cross(v2 - v0);
            assert!(n.dot(v3 - v0).abs() < 1e-5);
        }
    }

    #[test]
    fn edges_join_neighbouring_corners() {
        let p = Prism::new([1.0, 1.0, 1.0], Vec3::ZERO, 0);
        let w = p.world_vertices();
        for [a, b] in EDGES {
            assert!(((w[a] - w[b]).length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn packs_colour() {
        assert_eq!(pack_rgb([0x12, 0x34, 0x56]), 0x00_123456);
    }
}
