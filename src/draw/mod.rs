//! Debug-draw module
//!
//! Draw commands, emission flags, and the skeleton walker that produces them.

pub mod command;
pub mod walker;

pub use command::{
    axis_segments, Color, DrawCommand, DrawFlags, DrawSink, LineSegment, AXIS_X_COLOR,
    AXIS_Y_COLOR, AXIS_Z_COLOR, JOINT_COLOR,
};
pub use walker::{FrameWalker, PoseSource, AXIS_LENGTH_RATIO, JOINT_RADIUS_RATIO};
