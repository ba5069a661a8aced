//! C2 — seed builder. Emits the axis-aligned cube every brush starts from:
//! 8 vertices, 12 edges, 6 faces, fully wired so I1–I6 hold before the first
//! clip call.
//!
//! Vertex naming follows a `+Z`-up, front-is-`-Y` convention (this crate's
//! pick for Open Question 3 in the geometric design notes): `front` is the
//! `-Y` face, `back` is `+Y`, `left`/`right` split `X`, `bottom`/`top` split
//! `Z`. Coordinates are otherwise opaque to the rest of the pipeline.

use glam::Vec3;

use crate::brep::MutableBrep;

/// Build the seed cube of half-extent `half_extent` centered at the origin.
pub fn build_seed<'a>(brep: &mut MutableBrep<'a>, half_extent: f32) {
    let w = half_extent;

    // front-bottom-left, front-top-left, front-top-right, front-bottom-right,
    // then the back four in the same planar order.
    let v0 = brep.push_vertex(Vec3::new(-w, -w, -w)); // front-bottom-left
    let v1 = brep.push_vertex(Vec3::new(-w, -w, w)); // front-top-left
    let v2 = brep.push_vertex(Vec3::new(w, -w, w)); // front-top-right
    let v3 = brep.push_vertex(Vec3::new(w, -w, -w)); // front-bottom-right
    let v4 = brep.push_vertex(Vec3::new(-w, w, -w)); // back-bottom-left
    let v5 = brep.push_vertex(Vec3::new(-w, w, w)); // back-top-left
    let v6 = brep.push_vertex(Vec3::new(w, w, w)); // back-top-right
    let v7 = brep.push_vertex(Vec3::new(w, w, -w)); // back-bottom-right

    let front = brep.push_face(Vec3::new(0.0, -1.0, 0.0), None);
    let back = brep.push_face(Vec3::new(0.0, 1.0, 0.0), None);
    let left = brep.push_face(Vec3::new(-1.0, 0.0, 0.0), None);
    let right = brep.push_face(Vec3::new(1.0, 0.0, 0.0), None);
    let top = brep.push_face(Vec3::new(0.0, 0.0, 1.0), None);
    let bottom = brep.push_face(Vec3::new(0.0, 0.0, -1.0), None);

    let mut wire = |verts: [usize; 2], faces: [usize; 2]| {
        let e = brep.push_edge(verts, faces);
        brep.face_mut(faces[0]).edges.push(e);
        brep.face_mut(faces[1]).edges.push(e);
    };

    wire([v0, v1], [front, left]);
    wire([v1, v2], [front, top]);
    wire([v2, v3], [front, right]);
    wire([v3, v0], [front, bottom]);

    wire([v4, v5], [back, left]);
    wire([v5, v6], [back, top]);
    wire([v6, v7], [back, right]);
    wire([v7, v4], [back, bottom]);

    wire([v0, v4], [left, bottom]);
    wire([v1, v5], [left, top]);
    wire([v2, v6], [right, top]);
    wire([v3, v7], [right, bottom]);
}

#[cfg(test)]
mod test {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn seed_cube_topology() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 10_000.0);

        assert_eq!(brep.vertex_count(), 8);
        assert_eq!(brep.edge_count(), 12);
        assert_eq!(brep.face_count(), 6);

        for f in brep.visible_face_indices() {
            assert_eq!(brep.face(f).edges.len(), 4);
        }

        // every edge touches exactly two distinct faces and those faces
        // both list it back.
        for e in brep.visible_edge_indices() {
            let edge = brep.edge(e);
            assert_ne!(edge.faces[0], edge.faces[1]);
            for &f in &edge.faces {
                assert!(brep.face(f).edges.contains(&e));
            }
        }
    }
}
