use crate::math::vertex_position;
use crate::topology::{Benzenoid, VertexLabel};

impl Benzenoid {
    /// A male vertex on a single hexagon lying above all of its neighbours.
    #[must_use]
    pub fn is_peak(&self, vertex: VertexLabel) -> bool {
        vertex.is_male() && self.is_extreme(vertex, |own, other| own > other)
    }

    /// A female vertex on a single hexagon lying below all of its neighbours.
    #[must_use]
    pub fn is_valley(&self, vertex: VertexLabel) -> bool {
        vertex.is_female() && self.is_extreme(vertex, |own, other| own < other)
    }

    fn is_extreme(&self, vertex: VertexLabel, beyond: impl Fn(f64, f64) -> bool) -> bool {
        let Some(data) = self.vertex(vertex) else {
            return false;
        };
        // Heights compare the same way at any scale.
        let height = |v: VertexLabel| vertex_position(v, 1.0).y;
        let own = height(vertex);
        data.incident_faces().len() == 1
            && data
                .adjacent_vertices()
                .iter()
                .all(|&w| beyond(own, height(w)))
    }
}
