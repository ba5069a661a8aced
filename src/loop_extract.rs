//! C5 — face loop extractor. A compacted face only owns an unordered set of
//! edge indices; this walks that set into an ordered, closed vertex loop and
//! works out whether the walk came out with the opposite handedness of the
//! face's stored normal.

use glam::Vec3;

use crate::compact::{CompactEdge, CompactFace, CompactVertex};

/// The ordered loop `v0, v1, ..., vk, v0` plus whether a consumer should
/// reverse it to match the face's outward normal.
pub struct FaceLoop {
    pub vertices: Vec<usize>,
    pub reversed: bool,
}

/// Walk `face`'s edge set into a single closed loop, then decide winding by
/// comparing the loop's accumulated normal against the face's stored one.
/// Reverses when their dot product is positive (this crate's pick for the
/// winding-convention open question).
pub fn extract_loop(
    face: &CompactFace,
    vertices: &[CompactVertex],
    edges: &[CompactEdge],
) -> FaceLoop {
    let mut remaining: Vec<usize> = face.edges.clone();
    let first_edge = remaining.remove(0);
    let start = edges[first_edge].verts[0];
    let mut head = edges[first_edge].verts[1];

    let mut loop_vertices = vec![start, head];

    while !remaining.is_empty() {
        let pos = remaining
            .iter()
            .position(|&e| {
                let ev = edges[e].verts;
                ev[0] == head || ev[1] == head
            })
            .expect("face edge set does not form a single closed loop");
        let e = remaining.remove(pos);
        let ev = edges[e].verts;
        let next = if ev[0] == head { ev[1] } else { ev[0] };
        loop_vertices.push(next);
        head = next;
    }

    let mut accum = Vec3::ZERO;
    for pair in loop_vertices.windows(2) {
        let p0 = vertices[pair[0]].pos;
        let p1 = vertices[pair[1]].pos;
        accum += p0.cross(p1);
    }

    let reversed = if accum.length_squared() > f32::EPSILON {
        accum.normalize().dot(face.normal) > 0.0
    } else {
        false
    };

    FaceLoop {
        vertices: loop_vertices,
        reversed,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compact::compact;
    use crate::seed::build_seed;
    use crate::brep::MutableBrep;
    use bumpalo::Bump;

    #[test]
    fn loops_close_and_match_edge_count() {
        let bump = Bump::new();
        let mut brep = MutableBrep::new(&bump);
        build_seed(&mut brep, 1.0);
        let compacted = compact(&brep);

        for face in &compacted.faces {
            let loop_ = extract_loop(face, &compacted.vertices, &compacted.edges);
            assert_eq!(loop_.vertices.len(), face.edges.len() + 1);
            assert_eq!(loop_.vertices.first(), loop_.vertices.last());
        }
    }
}
