//! Boundary-edges code (BEC) of a benzenoid.
//!
//! See P. Hansen et al., *The boundary-edges code for polyhexes*,
//! J. Mol. Struct. (Theochem) 363 (1996) 237–247.

use crate::error::TopologyError;
use crate::topology::Benzenoid;

/// Code of the single hexagon, which has no degree-3 vertex to anchor on.
pub const BENZENE_CODE: &str = "6";

impl Benzenoid {
    /// The canonical boundary-edges code.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn boundary_edges_code(&self) -> Result<String, TopologyError> {
        let degrees: Vec<usize> = self
            .perimeter_vertices()?
            .iter()
            .filter_map(|&v| self.vertex(v))
            .map(|v| v.degree())
            .collect();
        Ok(code_from_degrees(&degrees))
    }

    /// `true` iff no digit of the canonical code exceeds 1.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn is_convex(&self) -> Result<bool, TopologyError> {
        Ok(self.convex_deficit()? == 0)
    }

    /// How far the canonical code is from the all-ones code: the sum of
    /// `digit - 1` over its digits. Zero exactly when [`Self::is_convex`]
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyStructure`] on an empty benzenoid.
    pub fn convex_deficit(&self) -> Result<u32, TopologyError> {
        let code = self.boundary_edges_code()?;
        Ok(code
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d.saturating_sub(1))
            .sum())
    }
}

/// Builds the canonical code from perimeter vertex degrees in cyclic order.
#[must_use]
pub fn code_from_degrees(degrees: &[usize]) -> String {
    let Some(first) = degrees.iter().position(|&d| d == 3) else {
        return BENZENE_CODE.to_owned();
    };
    // Walk once around the cycle starting right after the first degree-3
    // vertex; it closes the last run.
    let mut raw = String::new();
    let mut run = 0u32;
    for &d in degrees[first + 1..].iter().chain(&degrees[..=first]) {
        if d == 3 {
            raw.push(digit(run + 1));
            run = 0;
        } else {
            run += 1;
        }
    }
    canonical_code(&raw)
}

/// The lexicographically largest rotation of `raw` or of its reversal.
#[must_use]
pub fn canonical_code(raw: &str) -> String {
    let forward: Vec<char> = raw.chars().collect();
    let backward: Vec<char> = forward.iter().rev().copied().collect();
    let n = forward.len();
    let mut best: Vec<char> = forward.clone();
    for word in [&forward, &backward] {
        for shift in 0..n {
            let candidate: Vec<char> = word[shift..]
                .iter()
                .chain(&word[..shift])
                .copied()
                .collect();
            if candidate > best {
                best = candidate;
            }
        }
    }
    best.into_iter().collect()
}

fn digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('?')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::FaceLabel;

    fn code(hexagons: &[(i32, i32)]) -> String {
        Benzenoid::new(hexagons.iter().copied())
            .boundary_edges_code()
            .unwrap()
    }

    #[test]
    fn benzene() {
        assert_eq!(code(&[(0, 0)]), "6");
    }

    #[test]
    fn small_catacondensed() {
        assert_eq!(code(&[(0, 0), (1, 0)]), "55");
        assert_eq!(code(&[(0, 0), (1, 0), (2, 0)]), "5252");
        assert_eq!(code(&[(0, 0), (1, 0), (1, 1)]), "5351");
    }

    #[test]
    fn pericondensed() {
        assert_eq!(code(&[(0, 0), (1, 0), (0, 1)]), "444");
        assert_eq!(code(&[(0, 0), (1, 0), (0, 1), (-1, 1)]), "4343");
        assert_eq!(
            code(&[(0, 0), (-1, 1), (0, 1), (-1, 0), (1, 0), (0, -1), (1, -1)]),
            "333333"
        );
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        assert_eq!(code(&[(1, 1), (0, 0), (1, 0)]), code(&[(0, 0), (1, 0), (1, 1)]));
    }

    #[test]
    fn mirror_and_rotation_share_a_code() {
        let shape = [(0, 0), (1, 0), (1, 1), (3, -1), (2, 0)];
        let mirrored: Vec<(i32, i32)> = shape.iter().map(|&(x, y)| (y, x)).collect();
        let rotated: Vec<(i32, i32)> = shape.iter().map(|&(x, y)| (-y, x + y)).collect();
        assert_eq!(code(&shape), code(&mirrored));
        assert_eq!(code(&shape), code(&rotated));
    }

    #[test]
    fn canonical_code_picks_largest_dihedral_image() {
        assert_eq!(canonical_code("1535"), "5351");
        assert_eq!(canonical_code("2525"), "5252");
        assert_eq!(canonical_code("123"), "321");
        assert_eq!(canonical_code(""), "");
    }

    #[test]
    fn degrees_without_branching_are_benzene() {
        assert_eq!(code_from_degrees(&[2; 6]), BENZENE_CODE);
    }

    #[test]
    fn degrees_to_runs() {
        // Naphthalene perimeter: 3 2 2 2 2 3 2 2 2 2.
        assert_eq!(code_from_degrees(&[3, 2, 2, 2, 2, 3, 2, 2, 2, 2]), "55");
        assert_eq!(code_from_degrees(&[2, 2, 3, 2, 2, 2, 2, 3, 2, 2]), "55");
    }

    #[test]
    fn convexity_follows_the_digits() {
        let b = Benzenoid::new([FaceLabel::new(0, 0), FaceLabel::new(1, 0)]);
        assert!(!b.is_convex().unwrap());
        assert_eq!(b.convex_deficit().unwrap(), 8);
        let benzene = Benzenoid::new([(0, 0)]);
        assert_eq!(benzene.convex_deficit().unwrap(), 5);
        assert!(Benzenoid::empty().is_convex().is_err());
    }
}
