//! Reconstruction of the hexagon set from a boundary-edges code.
//!
//! The code is replayed as a walk along the perimeter on a brick-wall grid
//! of lattice vertices. Male vertices (`x + y` even) open upwards, female
//! ones downwards. Every vertical boundary edge the walk crosses is recorded
//! with its row; sorting the crossings of a row pairs them up into runs of
//! hexagons lying inside the perimeter.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CodeError, Result};
use crate::operations::query::BENZENE_CODE;
use crate::topology::{Benzenoid, FaceLabel};

/// Unit steps from a male vertex, by direction.
const MALE_STEPS: [(i32, i32); 3] = [(0, 1), (1, 0), (-1, 0)];

/// Unit steps from a female vertex, by direction.
const FEMALE_STEPS: [(i32, i32); 3] = [(1, 0), (0, -1), (-1, 0)];

/// Returns the hexagons of the benzenoid described by `code`.
///
/// Hexagons are listed row by row from the bottom, left to right within a
/// row. The result describes the shape up to translation, rotation and
/// reflection.
///
/// # Errors
///
/// Returns [`CodeError::MalformedCode`] if `code` is empty, contains a
/// character other than `1`–`5`, or does not close into a perimeter whose
/// rows pair up.
pub fn bec_to_hex_list(code: &str) -> std::result::Result<Vec<FaceLabel>, CodeError> {
    if code == BENZENE_CODE {
        return Ok(vec![FaceLabel::new(0, 0)]);
    }
    let runs = parse_runs(code)?;
    let crossings = Walker::default().replay(&runs);
    let hexagons = fill_rows(crossings)?;
    debug!(code, hexagons = hexagons.len(), "code decoded");
    Ok(hexagons)
}

impl Benzenoid {
    /// Builds the benzenoid described by a boundary-edges code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::MalformedCode`] if the code cannot be decoded.
    pub fn from_code(code: &str) -> Result<Self> {
        Ok(Self::new(bec_to_hex_list(code)?))
    }
}

fn parse_runs(code: &str) -> std::result::Result<Vec<u32>, CodeError> {
    if code.is_empty() {
        return Err(CodeError::MalformedCode("empty code".to_owned()));
    }
    code.chars()
        .enumerate()
        .map(|(i, c)| match c.to_digit(10) {
            Some(d @ 1..=5) => Ok(d),
            _ => Err(CodeError::MalformedCode(format!(
                "unexpected character {c:?} at position {i}"
            ))),
        })
        .collect()
}

/// Position and heading of the walk along the perimeter.
#[derive(Debug, Default)]
struct Walker {
    x: i32,
    y: i32,
    dir: usize,
}

impl Walker {
    /// Replays the code and returns the crossing columns recorded per row.
    fn replay(mut self, runs: &[u32]) -> BTreeMap<i32, Vec<i32>> {
        let mut crossings: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for &run in runs {
            for _ in 0..run {
                if let Some((row, column)) = self.step() {
                    crossings.entry(row).or_default().push(column);
                }
            }
            // Arrived at a 3-valent vertex.
            self.dir = (self.dir + 2) % 3;
        }
        crossings
    }

    /// Takes one unit step, reporting the vertical edge crossed, if any.
    fn step(&mut self) -> Option<(i32, i32)> {
        let male = (self.x + self.y).rem_euclid(2) == 0;
        let crossing = if male {
            // Going up the left side of hexagon ((x - y) / 2, y).
            (self.dir == 0).then_some((self.y, (self.x - self.y).div_euclid(2)))
        } else {
            // Going down the left side of hexagon ((x - y + 1) / 2, y - 1).
            (self.dir == 1).then_some((self.y - 1, (self.x - self.y + 1).div_euclid(2)))
        };
        let (dx, dy) = if male {
            MALE_STEPS[self.dir]
        } else {
            FEMALE_STEPS[self.dir]
        };
        self.x += dx;
        self.y += dy;
        if !male {
            self.dir = (self.dir + 1) % 3;
        }
        crossing
    }
}

fn fill_rows(
    crossings: BTreeMap<i32, Vec<i32>>,
) -> std::result::Result<Vec<FaceLabel>, CodeError> {
    let mut hexagons = Vec::new();
    for (row, mut columns) in crossings {
        if columns.len() % 2 != 0 {
            return Err(CodeError::MalformedCode(format!(
                "row {row} has an odd number ({}) of boundary crossings",
                columns.len()
            )));
        }
        columns.sort_unstable();
        for pair in columns.chunks_exact(2) {
            hexagons.extend((pair[0]..pair[1]).map(|xi| FaceLabel::new(xi, row)));
        }
    }
    Ok(hexagons)
}
