mod cache;
pub mod edge;
pub mod face;
pub mod label;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use label::{
    canonical_edge_label, canonical_vertex_label, try_canonical_edge_label,
    try_canonical_vertex_label, EdgeLabel, FaceLabel, Parity, RawLabel, VertexLabel,
};
pub use vertex::{VertexData, VertexId};

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::error::TopologyError;
use cache::BoundaryCache;

/// A benzenoid system: the arena owning every face, edge and vertex.
///
/// Entities are stored in insertion order and addressed by canonical label;
/// cross references between them are label lists, never pointers. The
/// structure only grows: hexagons are added, never removed.
#[derive(Debug, Clone, Default)]
pub struct Benzenoid {
    faces: SlotMap<FaceId, FaceData>,
    edges: SlotMap<EdgeId, EdgeData>,
    vertices: SlotMap<VertexId, VertexData>,
    face_index: HashMap<FaceLabel, FaceId>,
    edge_index: HashMap<EdgeLabel, EdgeId>,
    vertex_index: HashMap<VertexLabel, VertexId>,
    bottom_left: Option<FaceLabel>,
    pub(crate) cache: BoundaryCache,
}

impl Benzenoid {
    /// Builds a benzenoid by adding the given hexagons in order.
    #[must_use]
    pub fn new<I, L>(hexagons: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<FaceLabel>,
    {
        let mut benzenoid = Self::default();
        for hexagon in hexagons {
            benzenoid.add_hexagon(hexagon);
        }
        benzenoid
    }

    /// Creates a benzenoid without any hexagon.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of hexagons (faces).
    #[must_use]
    pub fn hexagon_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn contains_hexagon(&self, label: FaceLabel) -> bool {
        self.face_index.contains_key(&label)
    }

    #[must_use]
    pub fn face(&self, label: FaceLabel) -> Option<&FaceData> {
        self.face_index.get(&label).and_then(|&id| self.faces.get(id))
    }

    #[must_use]
    pub fn edge(&self, label: EdgeLabel) -> Option<&EdgeData> {
        self.edge_index.get(&label).and_then(|&id| self.edges.get(id))
    }

    #[must_use]
    pub fn vertex(&self, label: VertexLabel) -> Option<&VertexData> {
        self.vertex_index.get(&label).and_then(|&id| self.vertices.get(id))
    }

    /// Faces in insertion order.
    pub fn faces(&self) -> impl Iterator<Item = &FaceData> {
        self.faces.values()
    }

    /// Edges in the order they were first referenced.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.values()
    }

    /// Vertices in the order they were first referenced.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexData> {
        self.vertices.values()
    }

    /// Coordinates of all hexagons, in insertion order.
    pub fn face_coordinates(&self) -> impl Iterator<Item = FaceLabel> + '_ {
        self.faces.values().map(|f| f.label)
    }

    /// The lowest hexagon, leftmost among the lowest.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] if no hexagon was added.
    pub fn bottom_left_hexagon(&self) -> Result<&FaceData, TopologyError> {
        self.bottom_left
            .and_then(|label| self.face(label))
            .ok_or(TopologyError::EmptyStructure)
    }

    /// Adds a hexagon and links it to its neighbourhood.
    ///
    /// Adding a hexagon that is already present leaves the structure
    /// untouched but still drops the cached boundary properties.
    pub fn add_hexagon(&mut self, hexagon: impl Into<FaceLabel>) {
        let label = hexagon.into();
        if self.face_index.contains_key(&label) {
            debug!(hexagon = %label, "hexagon already present");
        } else {
            self.insert_face(label);
            self.update_bottom_left(label);
            trace!(
                hexagon = %label,
                faces = self.faces.len(),
                edges = self.edges.len(),
                vertices = self.vertices.len(),
                "hexagon added"
            );
        }
        self.cache.clear();
    }

    fn insert_face(&mut self, label: FaceLabel) {
        let face = FaceData::new(label);
        let own_vertices = *face.incident_vertices();
        let own_edges = *face.incident_edges();

        for v in own_vertices {
            self.vertex_index
                .entry(v)
                .or_insert_with(|| self.vertices.insert(VertexData::new(v)));
        }
        for e in own_edges {
            self.edge_index
                .entry(e)
                .or_insert_with(|| self.edges.insert(EdgeData::new(e)));
        }
        let id = self.faces.insert(face);
        self.face_index.insert(label, id);

        // The new face and its own edges and vertices.
        self.refresh_face(label);
        for e in own_edges {
            self.refresh_edge(e);
        }
        for v in own_vertices {
            self.refresh_vertex(v);
        }

        // Faces across its edges gained a neighbour.
        let adjacent = self
            .face(label)
            .map(|f| f.adjacent_faces().to_vec())
            .unwrap_or_default();
        for f in adjacent {
            self.refresh_face(f);
        }

        // Outer layer: entities touching the new face's vertices without
        // belonging to the face, whose neighbour lists may have grown.
        let mut edge_layer = HashSet::new();
        let mut vertex_layer = HashSet::new();
        for v in own_vertices {
            if let Some(data) = self.vertex(v) {
                edge_layer.extend(data.incident_edges().iter().copied());
                vertex_layer.extend(data.adjacent_vertices().iter().copied());
            }
        }
        for e in edge_layer.into_iter().filter(|e| !own_edges.contains(e)) {
            self.refresh_edge_neighbors(e);
        }
        for v in vertex_layer.into_iter().filter(|v| !own_vertices.contains(v)) {
            self.refresh_vertex_neighbors(v);
        }
    }

    fn update_bottom_left(&mut self, label: FaceLabel) {
        match self.bottom_left {
            Some(current) if current.row_major_key() <= label.row_major_key() => {}
            _ => self.bottom_left = Some(label),
        }
    }

    fn face_mut(&mut self, label: FaceLabel) -> Option<&mut FaceData> {
        let id = *self.face_index.get(&label)?;
        self.faces.get_mut(id)
    }

    fn edge_mut(&mut self, label: EdgeLabel) -> Option<&mut EdgeData> {
        let id = *self.edge_index.get(&label)?;
        self.edges.get_mut(id)
    }

    fn vertex_mut(&mut self, label: VertexLabel) -> Option<&mut VertexData> {
        let id = *self.vertex_index.get(&label)?;
        self.vertices.get_mut(id)
    }

    fn present_faces<const N: usize>(&self, candidates: [FaceLabel; N]) -> Vec<FaceLabel> {
        candidates
            .into_iter()
            .filter(|f| self.face_index.contains_key(f))
            .collect()
    }

    fn refresh_face(&mut self, label: FaceLabel) {
        let adjacent = self.present_faces(label.neighbors());
        if let Some(face) = self.face_mut(label) {
            face.set_adjacent_faces(adjacent);
        }
    }

    fn refresh_edge(&mut self, label: EdgeLabel) {
        let vertices = edge::vertex_candidates(label)
            .into_iter()
            .filter(|v| self.vertex_index.contains_key(v))
            .collect();
        let faces = self.present_faces(edge::face_candidates(label));
        if let Some(edge) = self.edge_mut(label) {
            edge.set_vertices(vertices);
            edge.set_faces(faces);
        }
        self.refresh_edge_neighbors(label);
    }

    fn refresh_edge_neighbors(&mut self, label: EdgeLabel) {
        let adjacent = edge::edge_candidates(label)
            .into_iter()
            .filter(|e| self.edge_index.contains_key(e))
            .collect();
        if let Some(edge) = self.edge_mut(label) {
            edge.set_adjacent_edges(adjacent);
        }
    }

    fn refresh_vertex(&mut self, label: VertexLabel) {
        let edges = vertex::edge_candidates(label)
            .into_iter()
            .filter(|e| self.edge_index.contains_key(e))
            .collect();
        let faces = self.present_faces(vertex::face_candidates(label));
        if let Some(vertex) = self.vertex_mut(label) {
            vertex.set_edges(edges);
            vertex.set_faces(faces);
        }
        self.refresh_vertex_neighbors(label);
    }

    fn refresh_vertex_neighbors(&mut self, label: VertexLabel) {
        let adjacent = vertex::neighbor_candidates(label)
            .into_iter()
            .filter(|(v, e)| self.vertex_index.contains_key(v) && self.edge_index.contains_key(e))
            .map(|(v, _)| v)
            .collect();
        if let Some(vertex) = self.vertex_mut(label) {
            vertex.set_adjacent_vertices(adjacent);
        }
    }
}

impl<L: Into<FaceLabel>> FromIterator<L> for Benzenoid {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<L: Into<FaceLabel>> Extend<L> for Benzenoid {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        for hexagon in iter {
            self.add_hexagon(hexagon);
        }
    }
}
