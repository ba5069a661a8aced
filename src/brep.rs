//! C1 — the mutable B-rep store.
//!
//! Three growable arrays (vertices, edges, faces) hold the whole connectivity
//! graph; every cross-reference is a plain array index, never a pointer.
//! Invisible entities are left in place (not removed) so that indices taken
//! before a clip call stay valid for the remainder of that call; the
//! [`crate::compact`] pass is what eventually drops them.

use bumpalo::collections::Vec as BVec;
use bumpalo::Bump;
use glam::{Vec2, Vec3};

use crate::types::BrushPlane;

/// Texture attributes carried by a face that originates from a brush plane.
/// The cap face created by each clip (§4.3 Phase 3) has none.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceTexture {
    pub texture: String,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
    pub uv_offset: Vec2,
    pub uv_scale: Vec2,
}

impl FaceTexture {
    pub fn from_plane(plane: &BrushPlane) -> Self {
        Self {
            texture: plane.texture.clone(),
            u_axis: plane.u_axis,
            v_axis: plane.v_axis,
            uv_offset: plane.uv_offset,
            uv_scale: plane.uv_scale,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub pos: Vec3,
    /// Signed distance to the plane currently being clipped against. Only
    /// meaningful during one `clip` call.
    pub dist: f32,
    /// Occurrence counter used by Phase 3 of the clipper to find the two
    /// open endpoints of a broken face loop.
    pub occurs: u32,
    pub visible: bool,
}

impl Vertex {
    fn new(pos: Vec3) -> Self {
        Self {
            pos,
            dist: 0.0,
            occurs: 0,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub verts: [usize; 2],
    pub faces: [usize; 2],
    pub visible: bool,
}

#[derive(Clone)]
pub struct Face<'a> {
    pub edges: BVec<'a, usize>,
    pub normal: Vec3,
    pub texture: Option<FaceTexture>,
    pub visible: bool,
}

impl<'a> Face<'a> {
    fn new(bump: &'a Bump, normal: Vec3, texture: Option<FaceTexture>) -> Self {
        Self {
            edges: BVec::new_in(bump),
            normal,
            texture,
            visible: true,
        }
    }

    /// Remove the first occurrence of `edge_idx`, if present.
    pub fn remove_edge(&mut self, edge_idx: usize) {
        if let Some(pos) = self.edges.iter().position(|&e| e == edge_idx) {
            self.edges.remove(pos);
        }
    }
}

/// The mutable, sparse B-rep a brush is built up in. Lives for the duration
/// of one brush's processing, backed by the arena scope's bump allocator.
pub struct MutableBrep<'a> {
    bump: &'a Bump,
    vertices: BVec<'a, Vertex>,
    edges: BVec<'a, Edge>,
    faces: BVec<'a, Face<'a>>,
    visible_vertex_count: usize,
    visible_edge_count: usize,
    visible_face_count: usize,
}

impl<'a> MutableBrep<'a> {
    pub fn new(bump: &'a Bump) -> Self {
        Self {
            bump,
            vertices: BVec::new_in(bump),
            edges: BVec::new_in(bump),
            faces: BVec::new_in(bump),
            visible_vertex_count: 0,
            visible_edge_count: 0,
            visible_face_count: 0,
        }
    }

    pub fn bump(&self) -> &'a Bump {
        self.bump
    }

    // -- append ----------------------------------------------------------

    pub fn push_vertex(&mut self, pos: Vec3) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(pos));
        self.visible_vertex_count += 1;
        idx
    }

    pub fn push_edge(&mut self, verts: [usize; 2], faces: [usize; 2]) -> usize {
        let idx = self.edges.len();
        self.edges.push(Edge {
            verts,
            faces,
            visible: true,
        });
        self.visible_edge_count += 1;
        idx
    }

    pub fn push_face(&mut self, normal: Vec3, texture: Option<FaceTexture>) -> usize {
        let idx = self.faces.len();
        self.faces.push(Face::new(self.bump, normal, texture));
        self.visible_face_count += 1;
        idx
    }

    // -- accessors ---------------------------------------------------------

    pub fn vertex(&self, idx: usize) -> &Vertex {
        &self.vertices[idx]
    }

    pub fn vertex_mut(&mut self, idx: usize) -> &mut Vertex {
        &mut self.vertices[idx]
    }

    pub fn edge(&self, idx: usize) -> &Edge {
        &self.edges[idx]
    }

    pub fn edge_mut(&mut self, idx: usize) -> &mut Edge {
        &mut self.edges[idx]
    }

    pub fn face(&self, idx: usize) -> &Face<'a> {
        &self.faces[idx]
    }

    pub fn face_mut(&mut self, idx: usize) -> &mut Face<'a> {
        &mut self.faces[idx]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // -- visibility bookkeeping ---------------------------------------------

    pub fn visible_vertex_count(&self) -> usize {
        self.visible_vertex_count
    }

    pub fn visible_edge_count(&self) -> usize {
        self.visible_edge_count
    }

    pub fn visible_face_count(&self) -> usize {
        self.visible_face_count
    }

    pub fn hide_vertex(&mut self, idx: usize) {
        let v = &mut self.vertices[idx];
        if v.visible {
            v.visible = false;
            self.visible_vertex_count -= 1;
        }
    }

    pub fn hide_edge(&mut self, idx: usize) {
        let e = &mut self.edges[idx];
        if e.visible {
            e.visible = false;
            self.visible_edge_count -= 1;
        }
    }

    pub fn hide_face(&mut self, idx: usize) {
        let f = &mut self.faces[idx];
        if f.visible {
            f.visible = false;
            self.visible_face_count -= 1;
        }
    }

    pub fn visible_vertex_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&i| self.vertices[i].visible)
    }

    pub fn visible_edge_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.edges.len()).filter(move |&i| self.edges[i].visible)
    }

    pub fn visible_face_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(move |&i| self.faces[i].visible)
    }
}
