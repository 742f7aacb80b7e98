//! Canonical labels for the entities of the hexagonal tiling.
//!
//! A face is addressed by its axial pair `(xi, eta)`. Edges and vertices are
//! first addressed relative to a face, as `(xi, eta, nu)` with a local index
//! `nu` in `0..6`, and then folded onto a canonical representative so that an
//! edge or vertex shared by neighbouring faces resolves to one label.
//!
//! Local vertex indices run clockwise from the top of the hexagon; local edge
//! `nu` joins local vertices `nu - 1` and `nu`.

use std::fmt;

use crate::error::TopologyError;

/// Axial coordinate of a hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceLabel {
    pub xi: i32,
    pub eta: i32,
}

impl FaceLabel {
    #[must_use]
    pub const fn new(xi: i32, eta: i32) -> Self {
        Self { xi, eta }
    }

    /// Key ordering hexagons by row first, then by column.
    #[must_use]
    pub const fn row_major_key(self) -> (i32, i32) {
        (self.eta, self.xi)
    }

    /// Raw label of the local entity `nu` of this face.
    #[must_use]
    pub const fn local(self, nu: u8) -> RawLabel {
        RawLabel {
            xi: self.xi,
            eta: self.eta,
            nu,
        }
    }

    /// The six faces sharing an edge with this one, in a fixed order.
    #[must_use]
    pub fn neighbors(self) -> [FaceLabel; 6] {
        let FaceLabel { xi, eta } = self;
        [
            FaceLabel::new(xi - 1, eta + 1),
            FaceLabel::new(xi, eta + 1),
            FaceLabel::new(xi - 1, eta),
            FaceLabel::new(xi + 1, eta),
            FaceLabel::new(xi, eta - 1),
            FaceLabel::new(xi + 1, eta - 1),
        ]
    }
}

impl From<(i32, i32)> for FaceLabel {
    fn from((xi, eta): (i32, i32)) -> Self {
        Self::new(xi, eta)
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.xi, self.eta)
    }
}

/// A face-relative label, not yet canonicalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawLabel {
    pub xi: i32,
    pub eta: i32,
    pub nu: u8,
}

/// Canonical edge label; `nu` is 0, 1 or 2 (upper-left, upper-right and
/// right edge of face `(xi, eta)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeLabel {
    pub xi: i32,
    pub eta: i32,
    pub nu: u8,
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.xi, self.eta, self.nu)
    }
}

/// Canonical vertex label; `nu` is 0 (top vertex of face `(xi, eta)`, male)
/// or 1 (upper-right vertex, female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexLabel {
    pub xi: i32,
    pub eta: i32,
    pub nu: u8,
}

/// Vertex parity class, after Gordon and Davison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Male,
    Female,
}

impl VertexLabel {
    #[must_use]
    pub const fn parity(self) -> Parity {
        if self.nu == 0 {
            Parity::Male
        } else {
            Parity::Female
        }
    }

    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self.parity(), Parity::Male)
    }

    #[must_use]
    pub const fn is_female(self) -> bool {
        matches!(self.parity(), Parity::Female)
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.xi, self.eta, self.nu)
    }
}

/// Folds a raw edge label onto its canonical representative.
///
/// # Errors
///
/// Returns [`TopologyError::LabelOutOfRange`] if `raw.nu > 5`.
pub fn try_canonical_edge_label(raw: RawLabel) -> Result<EdgeLabel, TopologyError> {
    let RawLabel { xi, eta, nu } = raw;
    let (xi, eta, nu) = match nu {
        0..=2 => (xi, eta, nu),
        3 => (xi + 1, eta - 1, 0),
        4 => (xi, eta - 1, 1),
        5 => (xi - 1, eta, 2),
        _ => return Err(TopologyError::LabelOutOfRange { kind: "edge", nu }),
    };
    Ok(EdgeLabel { xi, eta, nu })
}

/// Folds a raw vertex label onto its canonical representative.
///
/// # Errors
///
/// Returns [`TopologyError::LabelOutOfRange`] if `raw.nu > 5`.
pub fn try_canonical_vertex_label(raw: RawLabel) -> Result<VertexLabel, TopologyError> {
    let RawLabel { xi, eta, nu } = raw;
    let (xi, eta, nu) = match nu {
        0 | 1 => (xi, eta, nu),
        2 => (xi + 1, eta - 1, 0),
        3 | 4 => (xi, eta - 1, 4 - nu),
        5 => (xi - 1, eta, 1),
        _ => return Err(TopologyError::LabelOutOfRange { kind: "vertex", nu }),
    };
    Ok(VertexLabel { xi, eta, nu })
}

/// Infallible form of [`try_canonical_edge_label`] for internal callers.
///
/// # Panics
///
/// Panics if `raw.nu > 5`; local indices come from `0..6` loops only.
#[must_use]
pub fn canonical_edge_label(raw: RawLabel) -> EdgeLabel {
    match try_canonical_edge_label(raw) {
        Ok(label) => label,
        Err(err) => panic!("{err}"),
    }
}

/// Infallible form of [`try_canonical_vertex_label`] for internal callers.
///
/// # Panics
///
/// Panics if `raw.nu > 5`; local indices come from `0..6` loops only.
#[must_use]
pub fn canonical_vertex_label(raw: RawLabel) -> VertexLabel {
    match try_canonical_vertex_label(raw) {
        Ok(label) => label,
        Err(err) => panic!("{err}"),
    }
}
