//! Input data model: a brush is a list of oriented planes, each carrying the
//! texture attributes a `.map` parser would have read off the source plane.
//! Parsing brush text into these types is explicitly out of scope for this
//! crate; callers hand in already-built [`Brush`] values.

use glam::{Vec2, Vec3};

/// One face-defining half-space of a brush, plus the texture attributes that
/// travel with it into the output mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushPlane {
    /// Outward normal. Points away from the solid's interior.
    pub normal: Vec3,
    /// Signed distance from the origin along `normal`.
    pub distance: f32,
    pub texture: String,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
    pub uv_offset: Vec2,
    pub uv_scale: Vec2,
}

impl BrushPlane {
    pub fn new(
        normal: Vec3,
        distance: f32,
        texture: impl Into<String>,
        u_axis: Vec3,
        v_axis: Vec3,
        uv_offset: Vec2,
        uv_scale: Vec2,
    ) -> Self {
        Self {
            normal,
            distance,
            texture: texture.into(),
            u_axis,
            v_axis,
            uv_offset,
            uv_scale,
        }
    }

    /// Signed distance from `p` to this plane: `n . p - c`.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) - self.distance
    }
}

/// A convex solid defined as the intersection of half-spaces, one per plane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Brush {
    pub planes: Vec<BrushPlane>,
}

impl Brush {
    pub fn new(planes: Vec<BrushPlane>) -> Self {
        Self { planes }
    }
}

/// All brushes belonging to one entity, the unit `build_model` consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub brushes: Vec<Brush>,
}
