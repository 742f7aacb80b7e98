//! Graph views of a benzenoid for external consumers: spectral tools read
//! the adjacency matrix, drawing and chemistry tools read atoms and bonds.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::math::{vertex_position, DMatrix, Point2};
use crate::topology::{Benzenoid, VertexLabel};

/// Vertex adjacency matrix together with the vertex order of its rows.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    /// Row/column `i` corresponds to `order[i]`.
    pub order: Vec<VertexLabel>,
    /// Symmetric 0/1 matrix.
    pub matrix: DMatrix,
}

/// Atom positions and bond segments.
#[derive(Debug, Clone, Default)]
pub struct AtomBondLists {
    pub atoms: Vec<Point2>,
    pub bonds: Vec<(Point2, Point2)>,
}

impl Benzenoid {
    /// Index of every vertex in insertion order.
    fn vertex_numbering(&self) -> HashMap<VertexLabel, usize> {
        self.vertices()
            .enumerate()
            .map(|(i, v)| (v.label, i))
            .collect()
    }

    /// The adjacency matrix of the carbon skeleton, rows in vertex
    /// insertion order.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let numbering = self.vertex_numbering();
        let n = numbering.len();
        let mut matrix = DMatrix::zeros(n, n);
        for edge in self.edges() {
            if let [u, v] = edge.incident_vertices() {
                if let (Some(&i), Some(&j)) = (numbering.get(u), numbering.get(v)) {
                    matrix[(i, j)] = 1.0;
                    matrix[(j, i)] = 1.0;
                }
            }
        }
        AdjacencyMatrix {
            order: self.vertices().map(|v| v.label).collect(),
            matrix,
        }
    }

    /// Cartesian position of a vertex of this benzenoid.
    #[must_use]
    pub fn vertex_coordinates(&self, vertex: VertexLabel, edge_length: f64) -> Option<Point2> {
        self.vertex(vertex)
            .map(|v| vertex_position(v.label, edge_length))
    }

    /// Atom positions and bond segments, in insertion order.
    #[must_use]
    pub fn atom_bond_lists(&self, edge_length: f64) -> AtomBondLists {
        let atoms = self
            .vertices()
            .map(|v| vertex_position(v.label, edge_length))
            .collect();
        let bonds = self
            .edges()
            .filter_map(|e| match e.incident_vertices() {
                [u, v] => Some((
                    vertex_position(*u, edge_length),
                    vertex_position(*v, edge_length),
                )),
                _ => None,
            })
            .collect();
        AtomBondLists { atoms, bonds }
    }

    /// Wendy Myrvold's plain-text format.
    ///
    /// The first line holds the vertex count `n`; line `i + 1` describes vertex
    /// `i` as `x y degree neighbours...`, vertices numbered in insertion order.
    #[must_use]
    pub fn myrvold_format(&self, edge_length: f64) -> String {
        let numbering = self.vertex_numbering();
        let mut out = format!("{}", numbering.len());
        for v in self.vertices() {
            let p = vertex_position(v.label, edge_length);
            let neighbours: Vec<String> = v
                .adjacent_vertices()
                .iter()
                .filter_map(|w| numbering.get(w))
                .map(ToString::to_string)
                .collect();
            let _ = write!(
                out,
                "\n{} {} {} {}",
                p.x,
                p.y,
                neighbours.len(),
                neighbours.join(" ")
            );
        }
        out
    }
}
