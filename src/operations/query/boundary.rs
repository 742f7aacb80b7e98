//! Perimeter and hole extraction.
//!
//! Boundary edges (edges on exactly one hexagon) form vertex-disjoint
//! cycles: every boundary vertex touches exactly two boundary edges. A
//! depth-first walk over the "adjacent and boundary" relation therefore
//! returns one whole cycle in cyclic order. The lower-left edge of the
//! bottom-left hexagon always lies on the outer cycle, because nothing of the
//! benzenoid lies below or to the left of it.

use std::collections::HashSet;

use tracing::debug;

use crate::error::TopologyError;
use crate::topology::{Benzenoid, EdgeLabel, VertexLabel};
use crate::traversal::depth_first;

/// Local index of the lower-left edge, where the perimeter walk starts.
const PERIMETER_START_EDGE: u8 = 4;

impl Benzenoid {
    /// `true` iff `edge` is present and lies on exactly one hexagon.
    #[must_use]
    pub fn is_boundary(&self, edge: EdgeLabel) -> bool {
        self.edge(edge).is_some_and(|e| e.is_boundary())
    }

    /// All boundary edges, perimeter and holes alike.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeLabel> + '_ {
        self.edges().filter(|e| e.is_boundary()).map(|e| e.label)
    }

    /// The outer boundary cycle, as edges in cyclic order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn perimeter(&self) -> Result<&[EdgeLabel], TopologyError> {
        let start = self
            .bottom_left_hexagon()?
            .incident_edge(PERIMETER_START_EDGE);
        let perimeter = self.cache.perimeter.get_or_init(|| {
            let edges = self.boundary_cycle(start, |e| self.is_boundary(e));
            debug!(length = edges.len(), "perimeter traced");
            edges
        });
        Ok(perimeter.as_slice())
    }

    /// Labels of the perimeter edges, for membership tests.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn perimeter_edge_set(&self) -> Result<&HashSet<EdgeLabel>, TopologyError> {
        let perimeter = self.perimeter()?;
        Ok(self
            .cache
            .perimeter_edge_set
            .get_or_init(|| perimeter.iter().copied().collect()))
    }

    /// The perimeter as vertices in cyclic order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn perimeter_vertices(&self) -> Result<&[VertexLabel], TopologyError> {
        let perimeter = self.perimeter()?;
        Ok(self
            .cache
            .perimeter_vertices
            .get_or_init(|| self.cycle_vertices(perimeter))
            .as_slice())
    }

    /// `true` iff `edge` lies on the outer perimeter.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn belongs_to_perimeter(&self, edge: EdgeLabel) -> Result<bool, TopologyError> {
        Ok(self.perimeter_edge_set()?.contains(&edge))
    }

    /// `true` iff `edge` is a boundary edge of one of the holes.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn belongs_to_hole(&self, edge: EdgeLabel) -> Result<bool, TopologyError> {
        Ok(self.is_boundary(edge) && !self.belongs_to_perimeter(edge)?)
    }

    /// Boundaries of the interior holes, each as edges in cyclic order.
    ///
    /// Holes are listed in the order their first edge was created.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn holes(&self) -> Result<&[Vec<EdgeLabel>], TopologyError> {
        let on_perimeter = self.perimeter_edge_set()?;
        let holes = self.cache.holes.get_or_init(|| {
            let residual: Vec<EdgeLabel> = self
                .boundary_edges()
                .filter(|e| !on_perimeter.contains(e))
                .collect();
            let in_hole: HashSet<EdgeLabel> = residual.iter().copied().collect();
            let mut discovered = HashSet::new();
            let mut holes = Vec::new();
            for edge in residual {
                if discovered.contains(&edge) {
                    continue;
                }
                let hole = self.boundary_cycle(edge, |e| in_hole.contains(&e));
                discovered.extend(hole.iter().copied());
                holes.push(hole);
            }
            debug!(count = holes.len(), "holes traced");
            holes
        });
        Ok(holes.as_slice())
    }

    /// Each hole boundary as vertices in cyclic order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn hole_vertices(&self) -> Result<&[Vec<VertexLabel>], TopologyError> {
        let holes = self.holes()?;
        Ok(self
            .cache
            .hole_vertices
            .get_or_init(|| holes.iter().map(|h| self.cycle_vertices(h)).collect())
            .as_slice())
    }

    /// `true` iff the benzenoid has no holes.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn is_simply_connected(&self) -> Result<bool, TopologyError> {
        Ok(self.holes()?.is_empty())
    }

    fn boundary_cycle(
        &self,
        start: EdgeLabel,
        mut keep: impl FnMut(EdgeLabel) -> bool,
    ) -> Vec<EdgeLabel> {
        depth_first(start, |e| {
            self.edge(e)
                .map(|data| data.adjacent_edges().to_vec())
                .unwrap_or_default()
                .into_iter()
                .filter(|&d| keep(d))
                .collect::<Vec<_>>()
        })
    }

    /// Turns a cyclically ordered edge sequence into its vertex sequence:
    /// for edge `i`, the endpoint shared with edge `i + 1`.
    fn cycle_vertices(&self, cycle: &[EdgeLabel]) -> Vec<VertexLabel> {
        let n = cycle.len();
        let ends = |e: EdgeLabel| {
            self.edge(e)
                .map(|data| data.incident_vertices().to_vec())
                .unwrap_or_default()
        };
        (0..n)
            .filter_map(|i| {
                let here = ends(cycle[i]);
                let next = ends(cycle[(i + 1) % n]);
                let (&u, &v) = (here.first()?, here.get(1)?);
                Some(if next.contains(&u) { u } else { v })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::FaceLabel;

    const RING: [(i32, i32); 6] = [(-1, 1), (0, 1), (-1, 0), (1, 0), (0, -1), (1, -1)];

    fn assert_cyclic(b: &Benzenoid, cycle: &[EdgeLabel]) {
        let n = cycle.len();
        for i in 0..n {
            let next = cycle[(i + 1) % n];
            assert!(
                b.edge(cycle[i]).unwrap().adjacent_edges().contains(&next),
                "{} and {next} are not adjacent",
                cycle[i]
            );
        }
    }

    #[test]
    fn single_hexagon_perimeter() {
        let b = Benzenoid::new([(0, 0)]);
        let perimeter = b.perimeter().unwrap();
        assert_eq!(perimeter.len(), 6);
        assert_eq!(perimeter[0], EdgeLabel { xi: 0, eta: -1, nu: 1 });
        assert_cyclic(&b, perimeter);
        assert_eq!(b.perimeter_vertices().unwrap().len(), 6);
        assert!(b.is_simply_connected().unwrap());
    }

    #[test]
    fn naphthalene_perimeter_skips_shared_edge() {
        let b = Benzenoid::new([(0, 0), (1, 0)]);
        let perimeter = b.perimeter().unwrap();
        assert_eq!(perimeter.len(), 10);
        assert!(!perimeter.contains(&EdgeLabel { xi: 0, eta: 0, nu: 2 }));
        assert_cyclic(&b, perimeter);
    }

    #[test]
    fn perimeter_vertices_are_consecutive() {
        let b = Benzenoid::new([(0, 0), (1, 0), (1, 1), (2, 1)]);
        let vertices = b.perimeter_vertices().unwrap();
        assert_eq!(vertices.len(), b.perimeter().unwrap().len());
        for i in 0..vertices.len() {
            let next = vertices[(i + 1) % vertices.len()];
            assert!(b.vertex(vertices[i]).unwrap().adjacent_vertices().contains(&next));
        }
    }

    #[test]
    fn ring_of_six_has_one_hole() {
        let b = Benzenoid::new(RING);
        assert_eq!(b.perimeter().unwrap().len(), 18);
        let holes = b.holes().unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].len(), 6);
        assert_cyclic(&b, &holes[0]);
        assert!(!b.is_simply_connected().unwrap());
        assert_eq!(b.hole_vertices().unwrap()[0].len(), 6);
        for edge in &holes[0] {
            assert!(b.belongs_to_hole(*edge).unwrap());
            assert!(!b.belongs_to_perimeter(*edge).unwrap());
        }
    }

    #[test]
    fn filling_the_hole_clears_the_cache() {
        let mut b = Benzenoid::new(RING);
        assert_eq!(b.holes().unwrap().len(), 1);
        b.add_hexagon((0, 0));
        assert!(b.holes().unwrap().is_empty());
        assert_eq!(b.perimeter().unwrap().len(), 18);
    }

    #[test]
    fn interior_edge_is_neither_perimeter_nor_hole() {
        let b = Benzenoid::new([(0, 0), (1, 0)]);
        let shared = EdgeLabel { xi: 0, eta: 0, nu: 2 };
        assert!(!b.is_boundary(shared));
        assert!(!b.belongs_to_perimeter(shared).unwrap());
        assert!(!b.belongs_to_hole(shared).unwrap());
    }

    #[test]
    fn perimeter_edge_set_matches_perimeter() {
        let b = Benzenoid::new([(0, 0), (1, 0), (0, 1)]);
        let set = b.perimeter_edge_set().unwrap();
        assert_eq!(set.len(), b.perimeter().unwrap().len());
        assert_eq!(b.boundary_edges().count(), set.len());
    }

    #[test]
    fn perimeter_is_the_longest_boundary() {
        // Two rings side by side, around (0, 0) and around (3, 0).
        let mut hexagons: Vec<FaceLabel> = RING.iter().map(|&h| h.into()).collect();
        hexagons.extend(RING.iter().map(|&(x, y)| FaceLabel::new(x + 3, y)));
        let b = Benzenoid::new(hexagons);
        let perimeter_len = b.perimeter().unwrap().len();
        let holes = b.holes().unwrap();
        assert_eq!(holes.len(), 2);
        for hole in holes {
            assert!(hole.len() < perimeter_len);
            assert_cyclic(&b, hole);
        }
    }

    #[test]
    fn empty_benzenoid_has_no_perimeter() {
        let b = Benzenoid::empty();
        assert_eq!(b.perimeter().unwrap_err(), TopologyError::EmptyStructure);
        assert!(b.holes().is_err());
        assert!(b.is_simply_connected().is_err());
    }
}
