//! C6 — the mesh builder. Walks each face of a compacted B-rep, fans it into
//! triangles, and batches vertex attributes by texture identifier.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::compact::CompactedBrep;
use crate::constants::MAX_BATCH_VERTICES;
use crate::error::{GeometryError, Result};
use crate::loop_extract::extract_loop;

/// One texture's worth of output geometry: parallel attribute streams plus
/// 16-bit triangle indices.
#[derive(Debug, Clone)]
pub struct MeshBatch {
    pub texture: String,
    /// 3 floats per vertex.
    pub positions: Vec<f32>,
    /// 3 floats per vertex.
    pub normals: Vec<f32>,
    /// 4 floats per vertex (U-axis tangent, trailing component padded 0).
    pub tangents: Vec<f32>,
    /// 2 floats per vertex.
    pub uvs: Vec<f32>,
    pub indices: Vec<u16>,
    vertex_count: usize,
    max_vertices: usize,
}

impl MeshBatch {
    fn new(texture: String, max_vertices: usize) -> Self {
        Self {
            texture,
            positions: Vec::new(),
            normals: Vec::new(),
            tangents: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            vertex_count: 0,
            max_vertices,
        }
    }

    fn push_vertex(&mut self, pos: Vec3, normal: Vec3, tangent: Vec3, uv: Vec2) -> Result<u16> {
        if self.vertex_count >= self.max_vertices {
            return Err(GeometryError::TextureBatchOverflow {
                texture: self.texture.clone(),
                max: self.max_vertices,
            });
        }

        let idx = self.vertex_count as u16;
        self.positions.extend_from_slice(&[pos.x, pos.y, pos.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.tangents
            .extend_from_slice(&[tangent.x, tangent.y, tangent.z, 0.0]);
        self.uvs.extend_from_slice(&[uv.x, uv.y]);
        self.vertex_count += 1;
        Ok(idx)
    }

    fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// The full output of a build: one [`MeshBatch`] per texture seen across
/// every brush that went in, in first-seen order.
#[derive(Debug, Clone)]
pub struct Model {
    batches: Vec<MeshBatch>,
    by_texture: HashMap<String, usize>,
    max_vertices: usize,
}

impl Model {
    fn new(max_vertices: usize) -> Self {
        Self {
            batches: Vec::new(),
            by_texture: HashMap::new(),
            max_vertices,
        }
    }

    pub fn batches(&self) -> &[MeshBatch] {
        &self.batches
    }

    fn batch_index_for(&mut self, texture: &str) -> usize {
        if let Some(&idx) = self.by_texture.get(texture) {
            return idx;
        }
        let idx = self.batches.len();
        self.batches
            .push(MeshBatch::new(texture.to_string(), self.max_vertices));
        self.by_texture.insert(texture.to_string(), idx);
        idx
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(MAX_BATCH_VERTICES)
    }
}

/// Tessellate every compacted B-rep into `model`'s per-texture batches.
/// Faces with no texture (the seed cube's bare faces, before any brush plane
/// has clipped it) contribute no geometry.
pub fn build_meshes(breps: &[CompactedBrep]) -> Result<Model> {
    build_meshes_with_limit(breps, MAX_BATCH_VERTICES)
}

/// Same as [`build_meshes`] but with an overridable per-batch vertex
/// ceiling, so the 16-bit index overflow path can be exercised without
/// building a brush large enough to hit the real `u16::MAX + 1` limit.
fn build_meshes_with_limit(breps: &[CompactedBrep], max_vertices: usize) -> Result<Model> {
    let mut model = Model::new(max_vertices);
    for brep in breps {
        append_brep(brep, &mut model)?;
    }
    Ok(model)
}

fn append_brep(brep: &CompactedBrep, model: &mut Model) -> Result<()> {
    for face in &brep.faces {
        let Some(texture) = &face.texture else {
            continue;
        };

        let face_loop = extract_loop(face, &brep.vertices, &brep.edges);
        let batch_idx = model.batch_index_for(&texture.texture);

        // Distinct loop vertices, dropping the closing repeat of v0.
        let distinct = &face_loop.vertices[..face_loop.vertices.len() - 1];
        if distinct.len() < 3 {
            continue;
        }

        // Scoped to this face: two faces sharing a geometric vertex still
        // get their own mesh vertex each, since normal/tangent/UV are
        // per-face attributes.
        let mut vertex_map: HashMap<usize, u16> = HashMap::with_capacity(distinct.len());
        let mut mesh_indices = Vec::with_capacity(distinct.len());

        for &vi in distinct {
            let mesh_idx = match vertex_map.get(&vi) {
                Some(&idx) => idx,
                None => {
                    let pos = brep.vertices[vi].pos;
                    let rounded = Vec3::new(pos.x.round(), pos.y.round(), pos.z.round());
                    let uv = Vec2::new(
                        pos.dot(texture.u_axis) * texture.uv_scale.x + texture.uv_offset.x,
                        pos.dot(texture.v_axis) * texture.uv_scale.y + texture.uv_offset.y,
                    );
                    let batch = &mut model.batches[batch_idx];
                    let idx = batch.push_vertex(rounded, face.normal, texture.u_axis, uv)?;
                    vertex_map.insert(vi, idx);
                    idx
                }
            };
            mesh_indices.push(mesh_idx);
        }

        let batch = &mut model.batches[batch_idx];
        let k = mesh_indices.len();
        for i in 1..k - 1 {
            if face_loop.reversed {
                batch.push_triangle(mesh_indices[0], mesh_indices[i + 1], mesh_indices[i]);
            } else {
                batch.push_triangle(mesh_indices[0], mesh_indices[i], mesh_indices[i + 1]);
            }
        }
    }
    Ok(())
}
