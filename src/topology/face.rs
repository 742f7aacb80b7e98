use super::label::{
    canonical_edge_label, canonical_vertex_label, EdgeLabel, FaceLabel, VertexLabel,
};

slotmap::new_key_type! {
    /// Unique identifier for a face in the benzenoid arena.
    pub struct FaceId;
}

/// Data associated with a hexagon.
///
/// The incident vertices and edges are fixed at creation and listed by local
/// index, so they always form the hexagonal cycle of the face.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Axial coordinate of the hexagon.
    pub label: FaceLabel,
    vertices: [VertexLabel; 6],
    edges: [EdgeLabel; 6],
    adjacent_faces: Vec<FaceLabel>,
}

impl FaceData {
    /// Creates a face with canonical incident labels and no neighbours yet.
    #[must_use]
    pub fn new(label: FaceLabel) -> Self {
        Self {
            label,
            vertices: local_vertices(label),
            edges: local_edges(label),
            adjacent_faces: Vec::new(),
        }
    }

    /// Incident vertices by local index.
    #[must_use]
    pub fn incident_vertices(&self) -> &[VertexLabel; 6] {
        &self.vertices
    }

    /// Incident edges by local index.
    #[must_use]
    pub fn incident_edges(&self) -> &[EdgeLabel; 6] {
        &self.edges
    }

    /// Canonical label of the edge at local index `nu`.
    ///
    /// # Panics
    ///
    /// Panics if `nu > 5`.
    #[must_use]
    pub fn incident_edge(&self, nu: u8) -> EdgeLabel {
        self.edges[usize::from(nu)]
    }

    /// Faces of the benzenoid sharing an edge with this one.
    #[must_use]
    pub fn adjacent_faces(&self) -> &[FaceLabel] {
        &self.adjacent_faces
    }

    pub(crate) fn set_adjacent_faces(&mut self, faces: Vec<FaceLabel>) {
        self.adjacent_faces = faces;
    }
}

/// Canonical labels of the six vertices of `face`, by local index.
#[must_use]
pub fn local_vertices(face: FaceLabel) -> [VertexLabel; 6] {
    let mut out = [VertexLabel { xi: 0, eta: 0, nu: 0 }; 6];
    for (nu, slot) in (0u8..).zip(out.iter_mut()) {
        *slot = canonical_vertex_label(face.local(nu));
    }
    out
}

/// Canonical labels of the six edges of `face`, by local index.
#[must_use]
pub fn local_edges(face: FaceLabel) -> [EdgeLabel; 6] {
    let mut out = [EdgeLabel { xi: 0, eta: 0, nu: 0 }; 6];
    for (nu, slot) in (0u8..).zip(out.iter_mut()) {
        *slot = canonical_edge_label(face.local(nu));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_distinct_vertices_and_edges() {
        let face = FaceData::new(FaceLabel::new(2, -3));
        let vertices: HashSet<_> = face.incident_vertices().iter().collect();
        let edges: HashSet<_> = face.incident_edges().iter().collect();
        assert_eq!(vertices.len(), 6);
        assert_eq!(edges.len(), 6);
    }

    #[test]
    fn incident_edge_matches_list() {
        let face = FaceData::new(FaceLabel::new(0, 0));
        assert_eq!(face.incident_edge(4), EdgeLabel { xi: 0, eta: -1, nu: 1 });
        assert_eq!(face.incident_edge(0), face.incident_edges()[0]);
    }

    #[test]
    fn new_face_has_no_neighbours() {
        assert!(FaceData::new(FaceLabel::new(0, 0)).adjacent_faces().is_empty());
    }
}
