//! Conveniences for Mixamo-rigged models, whose bone names and armature
//! layout are fixed by the exporter.

use std::path::Path;

use super::hierarchy::HierarchyNode;
use crate::draw::{DrawFlags, DrawSink, FrameWalker, PoseSource};

/// Top-level key wrapping the skeleton in a Mixamo hierarchy document.
pub const ARMATURE: &str = "Armature";
/// The bone traversal starts from.
pub const ROOT_BONE: &str = "mixamorig:Hips";
/// Descriptor for the standard Mixamo rig, shipped with the crate.
pub const DEFAULT_HIERARCHY_PATH: &str = "data/mixamo_frame_hierarchy.json";

/// Loads a hierarchy descriptor and draws every frame of `poses` into `sink`.
///
/// Mirrors the usual debug-overlay entry point: any failure (unreadable or
/// malformed descriptor, hips bone missing from the model) makes the whole
/// call a no-op returning `false`. Nothing is propagated; the cause lands in
/// the log.
pub fn draw_frames<P: PoseSource, D: DrawSink>(
    hierarchy_path: impl AsRef<Path>,
    poses: &P,
    flags: DrawFlags,
    sink: &mut D,
) -> bool {
    let document = match HierarchyNode::load(hierarchy_path) {
        Ok(document) => document,
        Err(err) => {
            log::warn!("failed to load frame hierarchy: {err}");
            return false;
        }
    };
    draw_frames_from(&document, poses, flags, sink)
}

/// Same as [`draw_frames`], but for an already-loaded hierarchy document.
pub fn draw_frames_from<P: PoseSource, D: DrawSink>(
    document: &HierarchyNode,
    poses: &P,
    flags: DrawFlags,
    sink: &mut D,
) -> bool {
    let Some(root) = document.descend(&[ARMATURE, ROOT_BONE]) else {
        log::warn!("hierarchy document has no {ARMATURE:?}/{ROOT_BONE:?} entry");
        return false;
    };
    FrameWalker::new(poses, flags).walk(ROOT_BONE, root, sink)
}
