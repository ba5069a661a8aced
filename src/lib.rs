//! Brush-to-mesh geometric pipeline: half-space intersection by iterative
//! plane clipping of a seed cube, followed by B-rep tessellation into
//! textured triangle meshes.
//!
//! Parsing `.map` text, host application / renderer integration, file I/O,
//! windowing and texture loading are all explicitly out of scope; this crate
//! consumes already-built [`types::Brush`] values and a caller-owned
//! [`arena::Arena`], and returns plain in-memory mesh streams.

pub mod arena;
pub mod brep;
pub mod clip;
pub mod compact;
pub mod constants;
pub mod error;
pub mod loop_extract;
pub mod mesh;
pub mod pipeline;
pub mod seed;
pub mod types;

pub use arena::{Arena, BrushScope};
pub use compact::CompactedBrep;
pub use constants::PipelineConfig;
pub use error::{GeometryError, Result};
pub use mesh::{MeshBatch, Model};
pub use pipeline::{build_geometry, build_meshes, build_model};
pub use types::{Brush, BrushPlane, Entity};

pub use glam::{Vec2, Vec3};
