//! Camera space → clip space → NDC.
//!
//! The perspective divide never produces NaN or ∞: primitives entirely
//! behind the eye are dropped, and single vertices too close to the eye
//! plane come back as `ndc: None`.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// A primitive whose every `w` is at or below this is behind the camera.
pub const W_BEHIND: f32 = 0.01;
/// Vertices with `|w|` at or below this are not divided at all.
pub const W_SINGULAR: f32 = 0.2;
/// Smallest `|w|` a divide will use.
pub const W_MIN: f32 = 0.1;

/// One vertex after projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Normalised device coordinates, `[-1, 1]` on screen.
    pub ndc: Option<Vec2>,
    /// Camera-space distance along the view axis, `|z|`.
    pub depth: f32,
}

/// Project `N` camera-space points with `proj` (`clip = proj * (p, 1)`).
///
/// Returns `None` when the whole primitive is behind or at the camera.
pub fn project<const N: usize>(cam_pts: &[Vec3; N], proj: &Mat4) -> Option<[Projected; N]> {
    let clip = cam_pts.map(|p| *proj * p.extend(1.0));
    if clip.iter().all(|c| c.w <= W_BEHIND) {
        return None;
    }

    Some(std::array::from_fn(|i| {
        let c = clip[i];
        let ndc = (c.w.abs() > W_SINGULAR).then(|| {
            let w = c.w.signum() * c.w.abs().max(W_MIN);
            c.xy() / w
        });
        Projected {
            ndc,
            depth: cam_pts[i].z.abs(),
        }
    }))
}

/// Recover the camera-space point in front of the eye that projects to
/// `ndc` at distance `depth`.
///
/// Valid for matrices laid out like `Camera::projection_matrix`.
pub fn unproject(ndc: Vec2, depth: f32, proj: &Mat4) -> Vec3 {
    let z = -depth;
    let w = proj.row(3).z * z;
    Vec3::new(ndc.x * w / proj.row(0).x, ndc.y * w / proj.row(1).y, z)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
