//! C3 — the plane clipper. Slices the current B-rep by one oriented plane in
//! three ordered phases (vertex classification, edge processing, face
//! closure) and restores invariants I1–I6 on exit.

use glam::Vec3;

use crate::brep::{FaceTexture, MutableBrep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// No vertex was on the clipped side; the B-rep is untouched.
    Unchanged,
    /// Every visible vertex was on the clipped side; the solid is empty.
    Degenerate,
    /// The B-rep was sliced; a new cap face was appended.
    Clipped,
}

/// Clip `brep` by the plane `n . p - c`, discarding the side where that
/// expression is `>= +epsilon`. `cap_texture` becomes the texture attributes
/// of the new face this call creates to close the cut, if any (the seed cube
/// itself has no texture on its faces; the cap created while applying a real
/// brush plane carries that plane's texture).
pub fn clip<'a>(
    brep: &mut MutableBrep<'a>,
    normal: Vec3,
    distance: f32,
    cap_texture: Option<FaceTexture>,
    epsilon: f32,
) -> ClipOutcome {
    // -- Phase 1: vertex classification --------------------------------
    let visible_vertices: Vec<usize> = brep.visible_vertex_indices().collect();
    let n_total = visible_vertices.len();
    let mut n_clipped = 0usize;

    for &vi in &visible_vertices {
        let pos = brep.vertex(vi).pos;
        let mut d = normal.dot(pos) - distance;
        if d.abs() < epsilon {
            d = 0.0;
        }
        brep.vertex_mut(vi).dist = d;

        if d >= epsilon {
            brep.hide_vertex(vi);
            n_clipped += 1;
        }
    }

    if n_clipped == 0 {
        return ClipOutcome::Unchanged;
    }
    if n_clipped == n_total {
        return ClipOutcome::Degenerate;
    }

    // -- Phase 2: edge processing ---------------------------------------
    let visible_edges: Vec<usize> = brep.visible_edge_indices().collect();

    for &ei in &visible_edges {
        let [va, vb] = brep.edge(ei).verts;
        let a_visible = brep.vertex(va).visible;
        let b_visible = brep.vertex(vb).visible;

        match (a_visible, b_visible) {
            (false, false) => {
                let faces = brep.edge(ei).faces;
                brep.hide_edge(ei);
                for f in faces {
                    brep.face_mut(f).remove_edge(ei);
                    if brep.face(f).edges.is_empty() {
                        brep.hide_face(f);
                    }
                }
            }
            (true, true) => {}
            _ => {
                let d0 = brep.vertex(va).dist;
                let d1 = brep.vertex(vb).dist;
                let t = d0 / (d0 - d1);
                let pa = brep.vertex(va).pos;
                let pb = brep.vertex(vb).pos;
                let new_pos = pa + (pb - pa) * t;
                let new_v = brep.push_vertex(new_pos);

                if a_visible {
                    brep.edge_mut(ei).verts[1] = new_v;
                } else {
                    brep.edge_mut(ei).verts[0] = new_v;
                }
            }
        }
    }

    // -- Phase 3: face closure and cap face ------------------------------
    let visible_faces: Vec<usize> = brep.visible_face_indices().collect();
    let cap_face = brep.push_face(normal, cap_texture);

    for &fi in &visible_faces {
        let edge_list: Vec<usize> = brep.face(fi).edges.iter().copied().collect();

        for &ei in &edge_list {
            let [va, vb] = brep.edge(ei).verts;
            brep.vertex_mut(va).occurs = 0;
            brep.vertex_mut(vb).occurs = 0;
        }
        for &ei in &edge_list {
            let [va, vb] = brep.edge(ei).verts;
            brep.vertex_mut(va).occurs += 1;
            brep.vertex_mut(vb).occurs += 1;
        }

        let mut endpoints: Vec<usize> = Vec::with_capacity(2);
        for &ei in &edge_list {
            let [va, vb] = brep.edge(ei).verts;
            if brep.vertex(va).occurs == 1 {
                endpoints.push(va);
            }
            if brep.vertex(vb).occurs == 1 {
                endpoints.push(vb);
            }
        }

        debug_assert!(
            endpoints.is_empty() || endpoints.len() == 2,
            "face {fi} has {} open endpoints after split, expected 0 or 2 \
             (non-convex brush or badly conditioned planes)",
            endpoints.len()
        );

        if endpoints.len() == 2 {
            let new_edge = brep.push_edge([endpoints[0], endpoints[1]], [fi, cap_face]);
            brep.face_mut(fi).edges.push(new_edge);
            brep.face_mut(cap_face).edges.push(new_edge);
        }
    }

    ClipOutcome::Clipped
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seed::build_seed;
    use bumpalo::Bump;

    #[test]
    fn redundant_plane_is_unchanged() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 10_000.0);

        let before = (
            brep.vertex_count(),
            brep.edge_count(),
            brep.face_count(),
            brep.visible_vertex_count(),
            brep.visible_edge_count(),
            brep.visible_face_count(),
        );

        // A plane far outside the seed cube clips nothing.
        let outcome = clip(
            &mut brep,
            Vec3::new(1.0, 0.0, 0.0),
            20_000.0,
            None,
            0.01,
        );

        assert_eq!(outcome, ClipOutcome::Unchanged);
        assert_eq!(
            (
                brep.vertex_count(),
                brep.edge_count(),
                brep.face_count(),
                brep.visible_vertex_count(),
                brep.visible_edge_count(),
                brep.visible_face_count(),
            ),
            before
        );
    }

    #[test]
    fn single_plane_cut_splits_four_edges() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 10_000.0);

        let outcome = clip(&mut brep, Vec3::new(1.0, 0.0, 0.0), 0.0, None, 0.01);
        assert_eq!(outcome, ClipOutcome::Clipped);

        // 4 original vertices clipped away, 4 new ones created by splitting,
        // so 8 total still visible out of 12 stored.
        assert_eq!(brep.vertex_count(), 12);
        assert_eq!(brep.visible_vertex_count(), 8);

        // 4 edges fully clipped away (the +x ring), 4 edges split, 4 edges
        // spanning -x untouched, plus one new cap edge per opened face (4)
        // closing the new cap face: 12 original + 4 new = 16, with 4 hidden.
        assert_eq!(brep.visible_face_count(), 6);
    }

    #[test]
    fn fully_outside_plane_is_degenerate() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 10_000.0);

        // Keep-side is entirely past the solid: every vertex has positive
        // distance and gets clipped.
        let outcome = clip(&mut brep, Vec3::new(1.0, 0.0, 0.0), -20_000.0, None, 0.01);
        assert_eq!(outcome, ClipOutcome::Degenerate);
        assert_eq!(brep.visible_vertex_count(), 0);
    }
}
