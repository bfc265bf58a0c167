use glam::Vec3;

/// Un-normalised normal of a planar polygon from its first three corners.
#[inline]
pub fn face_normal(pts: &[Vec3]) -> Vec3 {
    (pts[1] - pts[0]).cross(pts[2] - pts[0])
}

/// True if a camera-space face turns away from the eye.
///
/// Relies on the eye sitting at the camera-space origin: the vector from
/// the eye to the face is then `pts[0]` itself. Edge-on faces are kept.
#[inline]
pub fn is_back_facing(pts: &[Vec3; 4]) -> bool {
    face_normal(pts).dot(pts[0]) > 0.0
}
