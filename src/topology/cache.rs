use std::cell::OnceCell;
use std::collections::HashSet;

use super::label::{EdgeLabel, VertexLabel};

/// Derived boundary properties, one slot per property.
///
/// Every slot is dropped when a hexagon is added, since any insertion may
/// change the boundary.
#[derive(Debug, Clone, Default)]
pub(crate) struct BoundaryCache {
    pub perimeter: OnceCell<Vec<EdgeLabel>>,
    pub perimeter_edge_set: OnceCell<HashSet<EdgeLabel>>,
    pub perimeter_vertices: OnceCell<Vec<VertexLabel>>,
    pub holes: OnceCell<Vec<Vec<EdgeLabel>>>,
    pub hole_vertices: OnceCell<Vec<Vec<VertexLabel>>>,
}

impl BoundaryCache {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
