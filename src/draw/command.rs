use glam::Vec3;

use crate::math::AxisFrame;

/// RGBA colors are plain arrays so any renderer backend can take them as-is.
pub type Color = [f32; 4];

/// Joints and bones draw white, matching the reference debug palette.
pub const JOINT_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Axis lines draw pure red/green/blue for x/y/z.
pub const AXIS_X_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
pub const AXIS_Y_COLOR: Color = [0.0, 1.0, 0.0, 1.0];
pub const AXIS_Z_COLOR: Color = [0.0, 0.0, 1.0, 1.0];

/// Which primitives a traversal emits, and whether solids are filled or
/// wireframe. Everything is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawFlags {
    pub joints: bool,
    pub bones: bool,
    pub axes: bool,
    pub filled: bool,
}

impl DrawFlags {
    pub const ALL: Self = Self {
        joints: true,
        bones: true,
        axes: true,
        filled: true,
    };
}

impl Default for DrawFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// A single debug primitive. Commands are produced transiently during a
/// traversal and handed straight to the sink; the crate never stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Joint marker.
    Sphere {
        center: Vec3,
        radius: f32,
        filled: bool,
    },
    /// Bone from a child joint (apex) back to its parent (base).
    Cone {
        apex: Vec3,
        base: Vec3,
        radius: f32,
        filled: bool,
    },
    /// A joint's local basis, drawn as three colored segments.
    AxisLines {
        frame: AxisFrame,
        origin: Vec3,
        length: f32,
    },
}

/// A colored line segment, the lowest common denominator for renderers that
/// only understand lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

/// Expands an axis frame into its three x/y/z segments.
pub fn axis_segments(frame: &AxisFrame, origin: Vec3, length: f32) -> [LineSegment; 3] {
    [
        LineSegment {
            start: origin,
            end: origin + frame.right * length,
            color: AXIS_X_COLOR,
        },
        LineSegment {
            start: origin,
            end: origin + frame.up * length,
            color: AXIS_Y_COLOR,
        },
        LineSegment {
            start: origin,
            end: origin + frame.forward * length,
            color: AXIS_Z_COLOR,
        },
    ]
}

/// Receives the command stream from a traversal.
pub trait DrawSink {
    fn submit(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
