use super::label::{EdgeLabel, FaceLabel, VertexLabel};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the benzenoid arena.
    pub struct VertexId;
}

/// Data associated with a vertex (a carbon atom).
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Canonical label of the vertex.
    pub label: VertexLabel,
    adjacent_vertices: Vec<VertexLabel>,
    edges: Vec<EdgeLabel>,
    faces: Vec<FaceLabel>,
}

impl VertexData {
    #[must_use]
    pub fn new(label: VertexLabel) -> Self {
        Self {
            label,
            adjacent_vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Neighbouring vertices joined by an edge of the benzenoid.
    #[must_use]
    pub fn adjacent_vertices(&self) -> &[VertexLabel] {
        &self.adjacent_vertices
    }

    #[must_use]
    pub fn incident_edges(&self) -> &[EdgeLabel] {
        &self.edges
    }

    #[must_use]
    pub fn incident_faces(&self) -> &[FaceLabel] {
        &self.faces
    }

    /// Number of adjacent vertices: 2 or 3 in a benzenoid.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacent_vertices.len()
    }

    pub(crate) fn set_adjacent_vertices(&mut self, vertices: Vec<VertexLabel>) {
        self.adjacent_vertices = vertices;
    }

    pub(crate) fn set_edges(&mut self, edges: Vec<EdgeLabel>) {
        self.edges = edges;
    }

    pub(crate) fn set_faces(&mut self, faces: Vec<FaceLabel>) {
        self.faces = faces;
    }
}

/// The three potential neighbours of a vertex, each paired with the edge
/// that joins them.
///
/// A neighbour counts only when both the vertex and the joining edge are
/// present, so a vertex whose connecting edge is missing is never reported.
#[must_use]
pub fn neighbor_candidates(vertex: VertexLabel) -> [(VertexLabel, EdgeLabel); 3] {
    let VertexLabel { xi, eta, nu } = vertex;
    let v = |xi, eta, nu| VertexLabel { xi, eta, nu };
    let e = |xi, eta, nu| EdgeLabel { xi, eta, nu };
    if nu == 0 {
        [
            (v(xi - 1, eta + 1, 1), e(xi - 1, eta + 1, 2)),
            (v(xi - 1, eta, 1), e(xi, eta, 0)),
            (v(xi, eta, 1), e(xi, eta, 1)),
        ]
    } else {
        [
            (v(xi, eta, 0), e(xi, eta, 1)),
            (v(xi + 1, eta, 0), e(xi + 1, eta, 0)),
            (v(xi + 1, eta - 1, 0), e(xi, eta, 2)),
        ]
    }
}

/// The three edges meeting at a vertex.
#[must_use]
pub fn edge_candidates(vertex: VertexLabel) -> [EdgeLabel; 3] {
    neighbor_candidates(vertex).map(|(_, edge)| edge)
}

/// The three hexagon positions meeting at a vertex.
#[must_use]
pub fn face_candidates(vertex: VertexLabel) -> [FaceLabel; 3] {
    let VertexLabel { xi, eta, nu } = vertex;
    if nu == 0 {
        [
            FaceLabel::new(xi - 1, eta + 1),
            FaceLabel::new(xi, eta + 1),
            FaceLabel::new(xi, eta),
        ]
    } else {
        [
            FaceLabel::new(xi, eta + 1),
            FaceLabel::new(xi, eta),
            FaceLabel::new(xi + 1, eta),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::edge::vertex_candidates;
    use crate::topology::face::local_vertices;

    #[test]
    fn joining_edge_connects_the_pair() {
        for nu in 0..2 {
            let vertex = VertexLabel { xi: 3, eta: -1, nu };
            for (other, edge) in neighbor_candidates(vertex) {
                let ends = vertex_candidates(edge);
                assert!(ends.contains(&vertex), "{edge} misses {vertex}");
                assert!(ends.contains(&other), "{edge} misses {other}");
            }
        }
    }

    #[test]
    fn neighbours_have_opposite_parity() {
        for nu in 0..2 {
            let vertex = VertexLabel { xi: 0, eta: 0, nu };
            for (other, _) in neighbor_candidates(vertex) {
                assert_ne!(other.parity(), vertex.parity());
            }
        }
    }

    #[test]
    fn face_candidates_contain_the_vertex() {
        for nu in 0..2 {
            let vertex = VertexLabel { xi: 1, eta: 1, nu };
            for face in face_candidates(vertex) {
                assert!(local_vertices(face).contains(&vertex));
            }
        }
    }
}
