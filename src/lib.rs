//! # rigviz
//!
//! Skeleton-hierarchy debug visualization: feed it a rig descriptor (bone
//! name -> children, loaded from JSON) and a live model's per-bone world
//! transforms, and it emits engine-agnostic draw commands for joint spheres,
//! parent->child bone cones, and per-joint RGB axis lines.
//!
//! ## Features
//! - Depth-first skeleton walker matched against a model's bone table
//! - Axis-frame extraction with a per-axis degenerate-scale policy
//! - JSON shims pinning `{x, y, z}` vectors and row-major matrices
//! - Mixamo rig constants and a one-call debug-overlay entry point
//!
//! ## Example
//! ```rust,ignore
//! use rigviz::draw::{DrawCommand, DrawFlags, FrameWalker, PoseSource};
//! use rigviz::rig::HierarchyNode;
//!
//! let hierarchy = HierarchyNode::load("data/mixamo_frame_hierarchy.json")?;
//! let root = hierarchy.descend(&["Armature", "mixamorig:Hips"]).unwrap();
//!
//! let mut commands: Vec<DrawCommand> = Vec::new();
//! FrameWalker::new(&model, DrawFlags::ALL).walk("mixamorig:Hips", root, &mut commands);
//!
//! for command in &commands {
//!     renderer.submit(command);
//! }
//! ```
//!
//! Rendering itself stays outside the crate: implement [`draw::PoseSource`]
//! over your engine's model handle and consume the command stream however
//! your renderer likes.

pub mod draw;
pub mod math;
pub mod rig;

pub use draw::{
    axis_segments, DrawCommand, DrawFlags, DrawSink, FrameWalker, LineSegment, PoseSource,
};
pub use math::AxisFrame;
pub use rig::{HierarchyError, HierarchyNode};
