use glam::{Mat4, Vec3};

use super::command::{DrawCommand, DrawFlags, DrawSink};
use crate::math::{matrix, AxisFrame};
use crate::rig::HierarchyNode;

/// Joint sphere radius as a fraction of the parent-child distance.
pub const JOINT_RADIUS_RATIO: f32 = 0.2;
/// Axis line length as a fraction of the parent-child distance.
pub const AXIS_LENGTH_RATIO: f32 = 0.6;

/// Per-bone pose lookup on a live model, supplied by the engine integration.
///
/// A hierarchy descriptor may declare bones a given model variant lacks;
/// `find_bone` returning `None` for those is expected and handled by the
/// walker, not an error.
pub trait PoseSource {
    /// Resolves a bone name to the model's bone index.
    fn find_bone(&self, name: &str) -> Option<usize>;

    /// Current world transform of the bone at `index`.
    fn world_matrix(&self, index: usize) -> Mat4;
}

/// Depth-first walk of a hierarchy descriptor in lock-step with a live
/// model's bone table, emitting joint spheres, bone cones, and axis lines.
///
/// Each resolved bone gets its sphere and axis lines exactly once; sphere
/// radius and axis length derive from the distance to the paired child or
/// parent joint. A bone declared in the descriptor but absent from the model
/// is skipped silently together with its declared subtree, while its siblings
/// continue. Callers observe such skips only as fewer commands.
pub struct FrameWalker<'a, P: PoseSource> {
    poses: &'a P,
    flags: DrawFlags,
}

impl<'a, P: PoseSource> FrameWalker<'a, P> {
    pub fn new(poses: &'a P, flags: DrawFlags) -> Self {
        Self { poses, flags }
    }

    /// Walks the subtree below `root_node`, anchored at the model bone named
    /// `root_name`, whose transform doubles as the initial parent pose.
    ///
    /// Returns `false` without emitting anything when the root bone itself is
    /// missing from the model.
    pub fn walk<D: DrawSink>(&self, root_name: &str, root_node: &HierarchyNode, sink: &mut D) -> bool {
        let Some(index) = self.poses.find_bone(root_name) else {
            log::warn!("root bone {root_name:?} not found in model, nothing to draw");
            return false;
        };
        let root_matrix = self.poses.world_matrix(index);
        self.visit_children(root_node, &root_matrix, sink);
        true
    }

    fn visit_children<D: DrawSink>(&self, node: &HierarchyNode, parent: &Mat4, sink: &mut D) {
        let parent_pos = matrix::translation(parent);
        let mut parent_emitted = false;

        for (name, child_node) in node.children() {
            let Some(index) = self.poses.find_bone(name) else {
                log::debug!("bone {name:?} not found in model, skipping its subtree");
                continue;
            };
            let child_matrix = self.poses.world_matrix(index);
            let child_pos = matrix::translation(&child_matrix);

            let distance = (child_pos - parent_pos).length();
            let radius = distance * JOINT_RADIUS_RATIO;
            let axis_length = distance * AXIS_LENGTH_RATIO;

            // The parent joint is shared by all of its children; the first
            // resolved child draws it.
            if !parent_emitted {
                self.emit_joint(parent, parent_pos, radius, axis_length, sink);
                parent_emitted = true;
            }

            if self.flags.bones {
                sink.submit(DrawCommand::Cone {
                    apex: child_pos,
                    base: parent_pos,
                    radius,
                    filled: self.flags.filled,
                });
            }

            if child_node.is_leaf() {
                self.emit_joint(&child_matrix, child_pos, radius, axis_length, sink);
            } else {
                self.visit_children(child_node, &child_matrix, sink);
            }
        }
    }

    fn emit_joint<D: DrawSink>(
        &self,
        matrix: &Mat4,
        position: Vec3,
        radius: f32,
        axis_length: f32,
        sink: &mut D,
    ) {
        if self.flags.joints {
            sink.submit(DrawCommand::Sphere {
                center: position,
                radius,
                filled: self.flags.filled,
            });
        }
        if self.flags.axes {
            sink.submit(DrawCommand::AxisLines {
                frame: AxisFrame::from_matrix(matrix),
                origin: position,
                length: axis_length,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubModel {
        bones: Vec<(&'static str, Mat4)>,
    }

    impl StubModel {
        fn new(bones: Vec<(&'static str, Vec3)>) -> Self {
            Self {
                bones: bones
                    .into_iter()
                    .map(|(name, position)| (name, Mat4::from_translation(position)))
                    .collect(),
            }
        }
    }

    impl PoseSource for StubModel {
        fn find_bone(&self, name: &str) -> Option<usize> {
            self.bones.iter().position(|(bone, _)| *bone == name)
        }

        fn world_matrix(&self, index: usize) -> Mat4 {
            self.bones[index].1
        }
    }

    const DOC: &str = r#"{"Root": {"A": {}, "B": {"C": {}}}}"#;

    fn full_model() -> StubModel {
        StubModel::new(vec![
            ("Root", Vec3::ZERO),
            ("A", Vec3::new(5.0, 0.0, 0.0)),
            ("B", Vec3::new(0.0, 2.0, 0.0)),
            ("C", Vec3::new(0.0, 2.0, 4.0)),
        ])
    }

    fn walk_doc(doc: &str, model: &StubModel) -> (bool, Vec<DrawCommand>) {
        let hierarchy = HierarchyNode::from_json_str(doc).unwrap();
        let root = hierarchy.child("Root").unwrap();
        let mut commands = Vec::new();
        let ok = FrameWalker::new(model, DrawFlags::ALL).walk("Root", root, &mut commands);
        (ok, commands)
    }

    fn count(commands: &[DrawCommand]) -> (usize, usize, usize) {
        let spheres = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sphere { .. }))
            .count();
        let cones = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Cone { .. }))
            .count();
        let axes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::AxisLines { .. }))
            .count();
        (spheres, cones, axes)
    }

    #[test]
    fn emits_one_joint_and_axis_triple_per_bone() {
        let (ok, commands) = walk_doc(DOC, &full_model());

        assert!(ok);
        assert_eq!(count(&commands), (4, 3, 4));
    }

    #[test]
    fn child_cone_comes_after_entering_parent_subtree() {
        let (_, commands) = walk_doc(DOC, &full_model());

        let b_pos = Vec3::new(0.0, 2.0, 0.0);
        let c_pos = Vec3::new(0.0, 2.0, 4.0);
        let cone_b = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Cone { apex, .. } if *apex == b_pos))
            .unwrap();
        let sphere_b = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Sphere { center, .. } if *center == b_pos))
            .unwrap();
        let cone_c = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Cone { apex, .. } if *apex == c_pos))
            .unwrap();

        assert!(cone_b < sphere_b, "B's joint is drawn inside B's subtree");
        assert!(sphere_b < cone_c, "B->C follows entering B's subtree");
    }

    #[test]
    fn unresolved_bone_drops_whole_subtree_but_not_siblings() {
        let model = StubModel::new(vec![
            ("Root", Vec3::ZERO),
            ("A", Vec3::new(5.0, 0.0, 0.0)),
            ("C", Vec3::new(0.0, 2.0, 4.0)),
        ]);
        let (ok, commands) = walk_doc(DOC, &model);

        assert!(ok);
        // B is missing: no cone to B, and C is never reached even though the
        // model has a bone named C. Root and A still draw.
        assert_eq!(count(&commands), (2, 1, 2));
        let c_pos = Vec3::new(0.0, 2.0, 4.0);
        assert!(!commands.iter().any(|c| matches!(
            c,
            DrawCommand::Sphere { center, .. } if *center == c_pos
        )));
    }

    #[test]
    fn missing_sibling_leaves_rest_of_level_intact() {
        let model = StubModel::new(vec![
            ("Root", Vec3::ZERO),
            ("B", Vec3::new(0.0, 2.0, 0.0)),
            ("C", Vec3::new(0.0, 2.0, 4.0)),
        ]);
        let (ok, commands) = walk_doc(DOC, &model);

        assert!(ok);
        // A is gone; B becomes the first resolved child and draws Root's joint.
        assert_eq!(count(&commands), (3, 2, 3));
    }

    #[test]
    fn radius_and_axis_length_derive_from_joint_distance() {
        let (_, commands) = walk_doc(DOC, &full_model());

        // Root->A distance is 5.0; the walk visits A first.
        let distance = 5.0f32;
        match commands[0] {
            DrawCommand::Sphere { radius, .. } => {
                assert_eq!(radius, distance * JOINT_RADIUS_RATIO);
            }
            _ => panic!("expected the Root joint sphere first"),
        }
        match commands[1] {
            DrawCommand::AxisLines { length, .. } => {
                assert_eq!(length, distance * AXIS_LENGTH_RATIO);
            }
            _ => panic!("expected the Root axis lines second"),
        }
        match commands[2] {
            DrawCommand::Cone { radius, apex, base, .. } => {
                assert_eq!(radius, distance * JOINT_RADIUS_RATIO);
                assert_eq!(apex, Vec3::new(5.0, 0.0, 0.0));
                assert_eq!(base, Vec3::ZERO);
            }
            _ => panic!("expected the A->Root cone third"),
        }
    }

    #[test]
    fn missing_root_bone_emits_nothing() {
        let model = StubModel::new(vec![("A", Vec3::X)]);
        let (ok, commands) = walk_doc(DOC, &model);

        assert!(!ok);
        assert!(commands.is_empty());
    }

    #[test]
    fn flags_gate_each_primitive() {
        let hierarchy = HierarchyNode::from_json_str(DOC).unwrap();
        let root = hierarchy.child("Root").unwrap();
        let model = full_model();

        let flags = DrawFlags {
            joints: false,
            bones: true,
            axes: false,
            filled: false,
        };
        let mut commands = Vec::new();
        FrameWalker::new(&model, flags).walk("Root", root, &mut commands);

        assert_eq!(count(&commands), (0, 3, 0));
        assert!(commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Cone { filled: false, .. })));
    }
}
