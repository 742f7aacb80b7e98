use crate::topology::{FaceLabel, VertexLabel};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Dense matrix type used for graph exports.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Default carbon-carbon bond length, in ångström.
pub const DEFAULT_EDGE_LENGTH: f64 = 1.4;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance from the centre of a hexagon to the middle of one of its edges.
#[must_use]
pub fn apothem(edge_length: f64) -> f64 {
    3f64.sqrt() * edge_length / 2.0
}

/// Cartesian centre of a hexagon (pointy-top, edge length `edge_length`).
#[must_use]
pub fn face_center(face: FaceLabel, edge_length: f64) -> Point2 {
    let a = apothem(edge_length);
    let xi = f64::from(face.xi);
    let eta = f64::from(face.eta);
    Point2::new((2.0 * xi + eta) * a, 1.5 * eta * edge_length)
}

/// Cartesian position of a vertex.
///
/// Male vertices sit at the top of their face, female vertices at its
/// upper-right corner.
#[must_use]
pub fn vertex_position(vertex: VertexLabel, edge_length: f64) -> Point2 {
    let center = face_center(FaceLabel::new(vertex.xi, vertex.eta), edge_length);
    if vertex.is_male() {
        Point2::new(center.x, center.y + edge_length)
    } else {
        Point2::new(center.x + apothem(edge_length), center.y + edge_length / 2.0)
    }
}
