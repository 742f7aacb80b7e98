use super::label::{EdgeLabel, FaceLabel, VertexLabel};

slotmap::new_key_type! {
    /// Unique identifier for an edge in the benzenoid arena.
    pub struct EdgeId;
}

/// Data associated with an edge of the tiling.
///
/// Incidence lists hold only entities currently present in the benzenoid;
/// they are rebuilt from the candidate tables below whenever the
/// neighbourhood changes.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Canonical label of the edge.
    pub label: EdgeLabel,
    vertices: Vec<VertexLabel>,
    adjacent_edges: Vec<EdgeLabel>,
    faces: Vec<FaceLabel>,
}

impl EdgeData {
    #[must_use]
    pub fn new(label: EdgeLabel) -> Self {
        Self {
            label,
            vertices: Vec::new(),
            adjacent_edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Endpoints present in the benzenoid.
    #[must_use]
    pub fn incident_vertices(&self) -> &[VertexLabel] {
        &self.vertices
    }

    /// Edges present in the benzenoid that share an endpoint with this one.
    #[must_use]
    pub fn adjacent_edges(&self) -> &[EdgeLabel] {
        &self.adjacent_edges
    }

    /// Hexagons of the benzenoid containing this edge (one or two).
    #[must_use]
    pub fn incident_faces(&self) -> &[FaceLabel] {
        &self.faces
    }

    /// `true` iff exactly one hexagon contains this edge.
    ///
    /// Boundary edges are the union of the perimeter and all holes.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.faces.len() == 1
    }

    /// Both hexagon positions on either side of this edge, present or not.
    #[must_use]
    pub fn incident_face_candidates(&self) -> [FaceLabel; 2] {
        face_candidates(self.label)
    }

    pub(crate) fn set_vertices(&mut self, vertices: Vec<VertexLabel>) {
        self.vertices = vertices;
    }

    pub(crate) fn set_adjacent_edges(&mut self, edges: Vec<EdgeLabel>) {
        self.adjacent_edges = edges;
    }

    pub(crate) fn set_faces(&mut self, faces: Vec<FaceLabel>) {
        self.faces = faces;
    }
}

/// The two endpoints of a canonical edge.
#[must_use]
pub fn vertex_candidates(edge: EdgeLabel) -> [VertexLabel; 2] {
    let EdgeLabel { xi, eta, nu } = edge;
    let v = |xi, eta, nu| VertexLabel { xi, eta, nu };
    match nu {
        0 => [v(xi - 1, eta, 1), v(xi, eta, 0)],
        1 => [v(xi, eta, 0), v(xi, eta, 1)],
        _ => [v(xi, eta, 1), v(xi + 1, eta - 1, 0)],
    }
}

/// The four edges sharing an endpoint with a canonical edge, two per endpoint.
#[must_use]
pub fn edge_candidates(edge: EdgeLabel) -> [EdgeLabel; 4] {
    let EdgeLabel { xi, eta, nu } = edge;
    let e = |xi, eta, nu| EdgeLabel { xi, eta, nu };
    match nu {
        0 => [
            e(xi - 1, eta + 1, 2),
            e(xi - 1, eta, 1),
            e(xi, eta, 1),
            e(xi - 1, eta, 2),
        ],
        1 => [
            e(xi - 1, eta + 1, 2),
            e(xi, eta, 0),
            e(xi + 1, eta, 0),
            e(xi, eta, 2),
        ],
        _ => [
            e(xi, eta, 1),
            e(xi + 1, eta, 0),
            e(xi + 1, eta - 1, 0),
            e(xi + 1, eta - 1, 1),
        ],
    }
}

/// The two hexagon positions on either side of a canonical edge.
#[must_use]
pub fn face_candidates(edge: EdgeLabel) -> [FaceLabel; 2] {
    let EdgeLabel { xi, eta, nu } = edge;
    match nu {
        0 => [FaceLabel::new(xi - 1, eta + 1), FaceLabel::new(xi, eta)],
        1 => [FaceLabel::new(xi, eta + 1), FaceLabel::new(xi, eta)],
        _ => [FaceLabel::new(xi, eta), FaceLabel::new(xi + 1, eta)],
    }
}
