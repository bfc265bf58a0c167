use glam::{Mat4, Quat, Vec3};

use crate::config::Settings;

/// One of the three principal axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis for index 0 = x, 1 = y, 2 = z.
    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// View-point that never moves: it sits at the camera-space origin looking
/// down −Z, and only its orientation and lens change.
///
/// * `orientation` maps world directions into camera space.
/// * `fov` is the vertical field of view in degrees, always inside
///   `fov_limits`.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    orientation: Quat,
    fov: f32,
    fov_limits: (f32, f32),
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Camera with identity orientation and the lens described by `settings`.
    pub fn new(settings: &Settings) -> Self {
        let (lo, hi) = settings.fov_limits;
        Self {
            orientation: Quat::IDENTITY,
            fov: settings.fov.clamp(lo, hi),
            fov_limits: settings.fov_limits,
            aspect: settings.aspect(),
            near: settings.near,
            far: settings.far,
        }
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /*──────────────────────── pose mutation ─────────────────────────*/

    /// Turn by `angle` radians (right-hand rule) about `axis`.
    ///
    /// The increment is composed on the *left*, so it acts in the camera's
    /// current frame rather than accumulating Euler angles.
    pub fn rotate(&mut self, axis: Axis, angle: f32) {
        let delta = Quat::from_axis_angle(axis.unit(), angle);
        self.orientation = (delta * self.orientation).normalize();
    }

    /// Express a camera-local displacement in world axes.
    ///
    /// The camera itself stays put; callers shift every prism by the
    /// returned vector instead.
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> Vec3 {
        self.orientation.inverse() * Vec3::new(dx, dy, dz)
    }

    /// Widen (positive) or narrow (negative) the field of view.
    pub fn zoom(&mut self, delta: f32) {
        let (lo, hi) = self.fov_limits;
        self.fov = (self.fov + delta).clamp(lo, hi);
    }

    /*───────────────── projection / view helpers ────────────────────*/

    /// Rotate a world-space point into camera space.
    #[inline]
    pub fn to_cam(&self, p: Vec3) -> Vec3 {
        self.orientation * p
    }

    /// Perspective matrix for column vectors (`clip = P * v`).
    ///
    /// ```text
    /// | f/aspect  0   0              0 |   f = 1 / tan(fov/2)
    /// | 0         f   0              0 |   Δ = far - near
    /// | 0         0  -(far+near)/Δ  -1 |
    /// | 0         0  -2·far·near/Δ   0 |   => clip.w = -2·far·near/Δ · z
    /// ```
    pub fn projection_matrix(&self) -> Mat4 {
        let f = 1.0 / (self.fov.to_radians() * 0.5).tan();
        let depth = self.far - self.near;
        let rows = [
            [f / self.aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, -(self.far + self.near) / depth, -1.0],
            [0.0, 0.0, -2.0 * self.far * self.near / depth, 0.0],
        ];
        Mat4::from_cols_array_2d(&rows).transpose()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
