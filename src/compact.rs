//! C4 — the compactor. Rewrites the sparse, post-clip mutable B-rep into a
//! dense, immutable one with only visible entities, remapping every
//! cross-reference through the old→new index tables built along the way.

use glam::Vec3;

use crate::brep::{FaceTexture, MutableBrep};

#[derive(Debug, Clone, Copy)]
pub struct CompactVertex {
    pub pos: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct CompactEdge {
    pub verts: [usize; 2],
    pub faces: [usize; 2],
}

#[derive(Debug, Clone)]
pub struct CompactFace {
    pub edges: Vec<usize>,
    pub normal: Vec3,
    pub texture: Option<FaceTexture>,
}

/// A dense, immutable B-rep: the output of compaction and the input to mesh
/// building. Owns plain `Vec`s rather than arena storage, since it outlives
/// the per-brush scratch scope that produced it.
#[derive(Debug, Clone, Default)]
pub struct CompactedBrep {
    pub vertices: Vec<CompactVertex>,
    pub edges: Vec<CompactEdge>,
    pub faces: Vec<CompactFace>,
}

impl CompactedBrep {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Compact the visible subset of `brep` into a dense [`CompactedBrep`].
/// Output indices are monotonically increasing in source index, so identical
/// inputs produce bit-identical output.
pub fn compact(brep: &MutableBrep<'_>) -> CompactedBrep {
    let vertex_count = brep.vertex_count();
    let edge_count = brep.edge_count();
    let face_count = brep.face_count();

    let mut vertex_remap = vec![usize::MAX; vertex_count];
    let mut edge_remap = vec![usize::MAX; edge_count];
    let mut face_remap = vec![usize::MAX; face_count];

    let mut vertices = Vec::with_capacity(brep.visible_vertex_count());
    for old in 0..vertex_count {
        let v = brep.vertex(old);
        if v.visible {
            vertex_remap[old] = vertices.len();
            vertices.push(CompactVertex { pos: v.pos });
        }
    }

    let mut edges = Vec::with_capacity(brep.visible_edge_count());
    for old in 0..edge_count {
        let e = brep.edge(old);
        if e.visible {
            edge_remap[old] = edges.len();
            edges.push(CompactEdge {
                verts: e.verts,
                faces: e.faces,
            });
        }
    }

    let mut faces = Vec::with_capacity(brep.visible_face_count());
    for old in 0..face_count {
        let f = brep.face(old);
        if f.visible {
            face_remap[old] = faces.len();
            faces.push(CompactFace {
                edges: f.edges.iter().copied().collect(),
                normal: f.normal,
                texture: f.texture.clone(),
            });
        }
    }

    for edge in &mut edges {
        edge.verts = [vertex_remap[edge.verts[0]], vertex_remap[edge.verts[1]]];
        edge.faces = [face_remap[edge.faces[0]], face_remap[edge.faces[1]]];
    }
    for face in &mut faces {
        for e in &mut face.edges {
            *e = edge_remap[*e];
        }
    }

    CompactedBrep {
        vertices,
        edges,
        faces,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seed::build_seed;
    use bumpalo::Bump;

    #[test]
    fn seed_only_compacts_to_cube() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 10_000.0);

        let compacted = compact(&brep);
        assert_eq!(compacted.vertices.len(), 8);
        assert_eq!(compacted.edges.len(), 12);
        assert_eq!(compacted.faces.len(), 6);

        for edge in &compacted.edges {
            assert!(edge.verts[0] < compacted.vertices.len());
            assert!(edge.verts[1] < compacted.vertices.len());
            assert!(edge.faces[0] < compacted.faces.len());
            assert!(edge.faces[1] < compacted.faces.len());
        }
        for face in &compacted.faces {
            assert_eq!(face.edges.len(), 4);
            for &e in &face.edges {
                assert!(e < compacted.edges.len());
            }
        }
    }
}
