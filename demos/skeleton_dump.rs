//! Walks the shipped Mixamo hierarchy against a synthetic T-pose and dumps
//! the resulting draw-command stream to stdout.
//!
//! Run with `cargo run --example skeleton_dump`.

use glam::{Mat4, Vec3};
use rigviz::draw::{axis_segments, DrawCommand, DrawFlags, PoseSource};
use rigviz::rig::mixamo;

/// A stand-in for an engine model handle: a flat bone table with fixed poses.
struct TPoseModel {
    bones: Vec<(&'static str, Mat4)>,
}

impl TPoseModel {
    fn new() -> Self {
        let place = |x: f32, y: f32, z: f32| Mat4::from_translation(Vec3::new(x, y, z));
        Self {
            bones: vec![
                ("mixamorig:Hips", place(0.0, 1.0, 0.0)),
                ("mixamorig:Spine", place(0.0, 1.2, 0.0)),
                ("mixamorig:Spine1", place(0.0, 1.35, 0.0)),
                ("mixamorig:Spine2", place(0.0, 1.5, 0.0)),
                ("mixamorig:Neck", place(0.0, 1.65, 0.0)),
                ("mixamorig:Head", place(0.0, 1.75, 0.0)),
                ("mixamorig:HeadTop_End", place(0.0, 1.95, 0.0)),
                ("mixamorig:LeftShoulder", place(0.08, 1.55, 0.0)),
                ("mixamorig:LeftArm", place(0.2, 1.55, 0.0)),
                ("mixamorig:LeftForeArm", place(0.5, 1.55, 0.0)),
                ("mixamorig:LeftHand", place(0.75, 1.55, 0.0)),
                ("mixamorig:RightShoulder", place(-0.08, 1.55, 0.0)),
                ("mixamorig:RightArm", place(-0.2, 1.55, 0.0)),
                ("mixamorig:RightForeArm", place(-0.5, 1.55, 0.0)),
                ("mixamorig:RightHand", place(-0.75, 1.55, 0.0)),
                ("mixamorig:LeftUpLeg", place(0.1, 0.95, 0.0)),
                ("mixamorig:LeftLeg", place(0.1, 0.5, 0.0)),
                ("mixamorig:LeftFoot", place(0.1, 0.08, 0.0)),
                ("mixamorig:LeftToeBase", place(0.1, 0.02, 0.12)),
                ("mixamorig:LeftToe_End", place(0.1, 0.02, 0.2)),
                ("mixamorig:RightUpLeg", place(-0.1, 0.95, 0.0)),
                ("mixamorig:RightLeg", place(-0.1, 0.5, 0.0)),
                ("mixamorig:RightFoot", place(-0.1, 0.08, 0.0)),
                ("mixamorig:RightToeBase", place(-0.1, 0.02, 0.12)),
                ("mixamorig:RightToe_End", place(-0.1, 0.02, 0.2)),
            ],
        }
    }
}

impl PoseSource for TPoseModel {
    fn find_bone(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|(bone, _)| *bone == name)
    }

    fn world_matrix(&self, index: usize) -> Mat4 {
        self.bones[index].1
    }
}

fn main() {
    env_logger::init();

    let model = TPoseModel::new();
    let mut commands: Vec<DrawCommand> = Vec::new();

    if !mixamo::draw_frames(
        mixamo::DEFAULT_HIERARCHY_PATH,
        &model,
        DrawFlags::ALL,
        &mut commands,
    ) {
        eprintln!("frame walk failed, see log output");
        std::process::exit(1);
    }

    for command in &commands {
        match command {
            DrawCommand::Sphere { center, radius, filled } => {
                println!("sphere  center={center:?} radius={radius:.3} filled={filled}");
            }
            DrawCommand::Cone { apex, base, radius, filled } => {
                println!("cone    apex={apex:?} base={base:?} radius={radius:.3} filled={filled}");
            }
            DrawCommand::AxisLines { frame, origin, length } => {
                for segment in axis_segments(frame, *origin, *length) {
                    println!(
                        "line    start={:?} end={:?} color={:?}",
                        segment.start, segment.end, segment.color
                    );
                }
            }
        }
    }

    println!("{} commands total", commands.len());
}
