//! Renderer-facing geometry.
//!
//! A [`Drawing`] is everything a renderer needs to draw a benzenoid: vertex
//! positions, one polygon per hexagon and every edge tagged with its place on
//! the boundary. Producing pictures from it is left to the caller.

use crate::error::{DrawingError, Result};
use crate::math::{vertex_position, Point2, DEFAULT_EDGE_LENGTH};
use crate::topology::{Benzenoid, EdgeLabel, FaceLabel, VertexLabel};

/// Parameters controlling the projection onto the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingParams {
    edge_length: f64,
}

impl DrawingParams {
    /// Creates drawing parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge_length` is not a positive finite number.
    pub fn new(edge_length: f64) -> Result<Self> {
        if !(edge_length.is_finite() && edge_length > 0.0) {
            return Err(DrawingError::InvalidParameters(format!(
                "edge length must be positive, got {edge_length}"
            ))
            .into());
        }
        Ok(Self { edge_length })
    }

    /// Returns the edge length.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }
}

impl Default for DrawingParams {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
        }
    }
}

/// Where an edge sits relative to the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Shared by two hexagons.
    Interior,
    /// On the outer perimeter.
    Perimeter,
    /// On the boundary of a hole.
    Hole,
}

/// One hexagon as a closed polygon, vertices clockwise from the top.
#[derive(Debug, Clone)]
pub struct FacePolygon {
    pub label: FaceLabel,
    pub points: [Point2; 6],
}

/// One edge as a segment.
#[derive(Debug, Clone)]
pub struct DrawnEdge {
    pub label: EdgeLabel,
    pub start: Point2,
    pub end: Point2,
    pub kind: EdgeKind,
}

/// Geometry of a whole benzenoid, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    pub vertices: Vec<(VertexLabel, Point2)>,
    pub faces: Vec<FacePolygon>,
    pub edges: Vec<DrawnEdge>,
}

impl Drawing {
    /// Edges of the given kind.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &DrawnEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }
}

impl Benzenoid {
    /// Projects the benzenoid onto the plane.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`](crate::error::TopologyError::EmptyStructure)
    /// on an empty benzenoid.
    pub fn drawing(&self, params: &DrawingParams) -> Result<Drawing> {
        let length = params.edge_length();
        let on_perimeter = self.perimeter_edge_set()?;
        let place = |v: VertexLabel| vertex_position(v, length);

        let vertices = self.vertices().map(|v| (v.label, place(v.label))).collect();
        let faces = self
            .faces()
            .map(|f| FacePolygon {
                label: f.label,
                points: f.incident_vertices().map(place),
            })
            .collect();
        let edges = self
            .edges()
            .filter_map(|e| {
                let [u, v] = e.incident_vertices() else {
                    return None;
                };
                let kind = if !e.is_boundary() {
                    EdgeKind::Interior
                } else if on_perimeter.contains(&e.label) {
                    EdgeKind::Perimeter
                } else {
                    EdgeKind::Hole
                };
                Some(DrawnEdge {
                    label: e.label,
                    start: place(*u),
                    end: place(*v),
                    kind,
                })
            })
            .collect();

        Ok(Drawing {
            vertices,
            faces,
            edges,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn params_reject_bad_lengths() {
        assert!(DrawingParams::new(0.0).is_err());
        assert!(DrawingParams::new(-1.0).is_err());
        assert!(DrawingParams::new(f64::NAN).is_err());
        assert_relative_eq!(DrawingParams::new(2.0).unwrap().edge_length(), 2.0);
        assert_relative_eq!(DrawingParams::default().edge_length(), 1.4);
    }

    #[test]
    fn naphthalene_edges_are_classified() {
        let b = Benzenoid::new([(0, 0), (1, 0)]);
        let drawing = b.drawing(&DrawingParams::default()).unwrap();
        assert_eq!(drawing.vertices.len(), 10);
        assert_eq!(drawing.faces.len(), 2);
        assert_eq!(drawing.edges_of_kind(EdgeKind::Interior).count(), 1);
        assert_eq!(drawing.edges_of_kind(EdgeKind::Perimeter).count(), 10);
        assert_eq!(drawing.edges_of_kind(EdgeKind::Hole).count(), 0);
    }

    #[test]
    fn hole_edges_are_tagged() {
        let b = Benzenoid::new([(-1, 1), (0, 1), (-1, 0), (1, 0), (0, -1), (1, -1)]);
        let drawing = b.drawing(&DrawingParams::new(1.0).unwrap()).unwrap();
        assert_eq!(drawing.edges_of_kind(EdgeKind::Hole).count(), 6);
        assert_eq!(drawing.edges_of_kind(EdgeKind::Perimeter).count(), 18);
        assert_eq!(drawing.edges_of_kind(EdgeKind::Interior).count(), 6);
    }

    #[test]
    fn segments_have_the_requested_length() {
        let b = Benzenoid::new([(0, 0), (0, 1)]);
        let drawing = b.drawing(&DrawingParams::new(2.5).unwrap()).unwrap();
        for edge in &drawing.edges {
            assert_relative_eq!(nalgebra::distance(&edge.start, &edge.end), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_benzenoid_cannot_be_drawn() {
        assert!(Benzenoid::empty().drawing(&DrawingParams::default()).is_err());
    }
}
