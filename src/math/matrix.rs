use glam::{Mat4, Vec3};

/// Translation component of an affine matrix.
pub fn translation(mat: &Mat4) -> Vec3 {
    mat.w_axis.truncate()
}

/// Overwrites the translation component, leaving the rotation/scale block untouched.
pub fn set_translation(mat: &mut Mat4, position: Vec3) {
    mat.w_axis = position.extend(mat.w_axis.w);
}

/// Per-axis scale, measured as the length of each basis vector.
pub fn scale(mat: &Mat4) -> Vec3 {
    Vec3::new(
        mat.x_axis.truncate().length(),
        mat.y_axis.truncate().length(),
        mat.z_axis.truncate().length(),
    )
}

/// Pure-rotation block with scale divided out.
///
/// Axes with zero scale are left as-is rather than divided; the same
/// degenerate-input policy as [`AxisFrame::from_matrix`](crate::math::AxisFrame::from_matrix).
pub fn rotation_block(mat: &Mat4) -> Mat4 {
    let s = scale(mat);
    let mut rot = *mat;
    if s.x != 0.0 {
        rot.x_axis /= s.x;
    }
    if s.y != 0.0 {
        rot.y_axis /= s.y;
    }
    if s.z != 0.0 {
        rot.z_axis /= s.z;
    }
    rot.x_axis.w = 0.0;
    rot.y_axis.w = 0.0;
    rot.z_axis.w = 0.0;
    rot.w_axis = glam::Vec4::W;
    rot
}
