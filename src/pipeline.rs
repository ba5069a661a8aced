//! C7 — the pipeline driver. Wires the seed builder, clipper, compactor and
//! mesh builder together across one brush's planes and one entity's
//! brushes, owning the arena scope lifecycle described in §5.

use log::{debug, trace};

use crate::arena::Arena;
use crate::brep::{FaceTexture, MutableBrep};
use crate::clip::{clip, ClipOutcome};
use crate::compact::{compact, CompactedBrep};
use crate::constants::{PipelineConfig, MIN_BRUSH_PLANES};
use crate::error::{GeometryError, Result};
use crate::mesh::{build_meshes as build_meshes_inner, Model};
use crate::seed::build_seed;
use crate::types::{Brush, Entity};

/// Build the compacted B-rep for a single brush: seed cube, then one `clip`
/// call per source plane.
pub fn build_geometry(brush: &Brush, arena: &mut Arena, config: &PipelineConfig) -> Result<CompactedBrep> {
    // Zero planes is the seed-only case: nothing to clip, the caller gets the
    // bare seed cube back. Anything nonzero still needs enough planes to
    // bound a solid.
    if !brush.planes.is_empty() && brush.planes.len() < MIN_BRUSH_PLANES {
        return Err(GeometryError::TooFewPlanes {
            count: brush.planes.len(),
        });
    }

    let scope = arena.scope();
    let mut brep = MutableBrep::new(scope.bump());
    build_seed(&mut brep, config.seed_half_extent);

    for plane in &brush.planes {
        let cap_texture = FaceTexture::from_plane(plane);
        let outcome = clip(
            &mut brep,
            plane.normal,
            plane.distance,
            Some(cap_texture),
            config.epsilon,
        );
        trace!(
            "clip plane normal={:?} distance={} -> {:?} (visible v={} e={} f={})",
            plane.normal,
            plane.distance,
            outcome,
            brep.visible_vertex_count(),
            brep.visible_edge_count(),
            brep.visible_face_count(),
        );

        if outcome == ClipOutcome::Degenerate {
            debug!("brush clipped to an empty solid, remaining planes skipped");
            break;
        }
    }

    Ok(compact(&brep))
}

/// Build every per-texture mesh for one entity's brush list: each brush is
/// processed under its own arena scope, then all resulting B-reps are
/// tessellated into a single shared set of texture batches.
pub fn build_model(entity: &Entity, config: &PipelineConfig) -> Result<Model> {
    let mut arena = Arena::new();
    let mut breps = Vec::with_capacity(entity.brushes.len());

    for brush in &entity.brushes {
        breps.push(build_geometry(brush, &mut arena, config)?);
    }

    build_meshes(&breps)
}

/// Tessellate an already-built list of compacted B-reps into a shared
/// [`Model`]. Pure function of its inputs, used directly by callers who
/// build geometry themselves (e.g. to parallelize brushes before merging).
pub fn build_meshes(breps: &[CompactedBrep]) -> Result<Model> {
    build_meshes_inner(breps)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::BrushPlane;
    use glam::{Vec2, Vec3};

    fn axis_aligned_cube_brush(half_extent: f32, texture: &str) -> Brush {
        let planes = [
            (Vec3::new(1.0, 0.0, 0.0), half_extent),
            (Vec3::new(-1.0, 0.0, 0.0), half_extent),
            (Vec3::new(0.0, 1.0, 0.0), half_extent),
            (Vec3::new(0.0, -1.0, 0.0), half_extent),
            (Vec3::new(0.0, 0.0, 1.0), half_extent),
            (Vec3::new(0.0, 0.0, -1.0), half_extent),
        ];

        Brush::new(
            planes
                .into_iter()
                .map(|(normal, distance)| {
                    BrushPlane::new(
                        normal,
                        distance,
                        texture,
                        Vec3::new(1.0, 0.0, 0.0),
                        Vec3::new(0.0, 1.0, 0.0),
                        Vec2::ZERO,
                        Vec2::ONE,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn axis_aligned_unit_cube_via_six_planes() {
        let config = PipelineConfig {
            epsilon: 0.01,
            seed_half_extent: 10_000.0,
        };
        let mut arena = Arena::new();
        let brush = axis_aligned_cube_brush(0.5, "wall");

        let compacted = build_geometry(&brush, &mut arena, &config).unwrap();
        assert_eq!(compacted.vertices.len(), 8);
        assert_eq!(compacted.edges.len(), 12);
        assert_eq!(compacted.faces.len(), 6);

        for v in &compacted.vertices {
            assert!((v.pos.x.abs() - 0.5).abs() < 1e-4);
            assert!((v.pos.y.abs() - 0.5).abs() < 1e-4);
            assert!((v.pos.z.abs() - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn empty_brush_yields_bare_seed_cube() {
        let config = PipelineConfig::default();
        let mut arena = Arena::new();
        let brush = Brush::new(vec![]);

        let compacted = build_geometry(&brush, &mut arena, &config).unwrap();
        assert_eq!(compacted.vertices.len(), 8);
        assert_eq!(compacted.edges.len(), 12);
        assert_eq!(compacted.faces.len(), 6);
    }

    #[test]
    fn too_few_planes_is_reported_not_panicked() {
        let config = PipelineConfig::default();
        let mut arena = Arena::new();
        let mut planes = axis_aligned_cube_brush(0.5, "wall").planes;
        planes.truncate(3);
        let brush = Brush::new(planes);

        let err = build_geometry(&brush, &mut arena, &config).unwrap_err();
        assert!(matches!(err, GeometryError::TooFewPlanes { count: 3 }));
    }

    #[test]
    fn two_distinct_textures_yield_two_batches() {
        let config = PipelineConfig::default();
        let mut entity = Entity::default();
        let mut brush = axis_aligned_cube_brush(32.0, "brick");
        // Re-texture one face so the cube carries two distinct textures.
        brush.planes[0].texture = "metal".to_string();
        entity.brushes.push(brush);

        let model = build_model(&entity, &config).unwrap();
        assert_eq!(model.batches().len(), 2);

        let total_indices: usize = model.batches().iter().map(|b| b.index_count()).sum();
        // 5 quads at 2 triangles each + 1 quad at 2 triangles = 6 quads * 6 indices.
        assert_eq!(total_indices, 6 * 6);
    }
}
