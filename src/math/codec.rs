//! JSON shims for glam vector and matrix types.
//!
//! glam's own serde support writes vectors as bare arrays; persisted documents
//! in this crate use named `{x, y, z}` objects and row-major 16-float matrices
//! instead, so these `#[serde(with = ...)]` modules pin the exact shapes.

/// `Vec2` as `{"x": f32, "y": f32}`.
pub mod vec2_xy {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Repr {
        x: f32,
        y: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        Repr { x: v.x, y: v.y }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        Ok(Vec2::new(repr.x, repr.y))
    }
}

/// `Vec3` as `{"x": f32, "y": f32, "z": f32}`.
pub mod vec3_xyz {
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Repr {
        x: f32,
        y: f32,
        z: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        Repr {
            x: v.x,
            y: v.y,
            z: v.z,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        Ok(Vec3::new(repr.x, repr.y, repr.z))
    }
}

/// `Mat4` as a flat array of 16 floats, row-major.
pub mod mat4_row_major {
    use glam::Mat4;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(m: &Mat4, serializer: S) -> Result<S::Ok, S::Error> {
        // glam stores column-major; transposing first lays the rows out flat.
        m.transpose().to_cols_array().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Mat4, D::Error> {
        let cells = <[f32; 16]>::deserialize(deserializer)?;
        Ok(Mat4::from_cols_array(&cells).transpose())
    }
}
