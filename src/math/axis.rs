use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::codec::vec3_xyz;

/// An orthonormal right/up/forward basis extracted from a transform's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    #[serde(rename = "x_axis", with = "vec3_xyz")]
    pub right: Vec3,
    #[serde(rename = "y_axis", with = "vec3_xyz")]
    pub up: Vec3,
    #[serde(rename = "z_axis", with = "vec3_xyz")]
    pub forward: Vec3,
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self::WORLD
    }
}

impl AxisFrame {
    /// The world basis: unit X/Y/Z.
    pub const WORLD: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Extracts the frame from a transform's upper-3x3 block, normalizing each
    /// basis vector so scale drops out.
    ///
    /// Axes are guarded independently: a zero-length basis vector (zero scale on
    /// that axis) is returned unchanged instead of being normalized, while the
    /// remaining axes still normalize. Degenerate input is not an error.
    pub fn from_matrix(mat: &Mat4) -> Self {
        Self {
            right: normalize_or_keep(mat.x_axis.truncate()),
            up: normalize_or_keep(mat.y_axis.truncate()),
            forward: normalize_or_keep(mat.z_axis.truncate()),
        }
    }
}

/// Normalizes `v`, or returns it untouched when its length is zero.
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let length = v.length();
    if length != 0.0 {
        v / length
    } else {
        v
    }
}
