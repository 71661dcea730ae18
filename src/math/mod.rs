//! Math utilities module
//!
//! Axis-frame extraction, affine matrix helpers, and the JSON shims used for
//! persisted vectors and matrices.

mod axis;
pub mod codec;
pub mod matrix;

pub use axis::{normalize_or_keep, AxisFrame};

// Re-export commonly used glam types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
