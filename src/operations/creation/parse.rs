use std::str::FromStr;

use tracing::debug;

use crate::error::{BenzenoidError, ParseError};
use crate::topology::{Benzenoid, FaceLabel};

/// Parses a hexagon list written as `[(x, y), (x, y), ...]`.
///
/// Whitespace is free, the empty list `[]` and a trailing comma are
/// accepted.
///
/// # Errors
///
/// Returns [`ParseError::ParseFailure`] for anything else. The error carries
/// no detail; the rejected input is logged at debug level instead.
pub fn parse_hexagon_list(text: &str) -> Result<Vec<FaceLabel>, ParseError> {
    let parsed = parse_pairs(text);
    if parsed.is_none() {
        debug!(input = text, "rejected hexagon list");
    }
    parsed.ok_or(ParseError::ParseFailure)
}

impl FromStr for Benzenoid {
    type Err = BenzenoidError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse_hexagon_list(text)?))
    }
}

fn parse_pairs(text: &str) -> Option<Vec<FaceLabel>> {
    let mut rest = text.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
    let mut hexagons = Vec::new();
    while !rest.is_empty() {
        let (pair, after) = rest.strip_prefix('(')?.split_once(')')?;
        let (xi, eta) = pair.split_once(',')?;
        hexagons.push(FaceLabel::new(
            xi.trim().parse().ok()?,
            eta.trim().parse().ok()?,
        ));
        rest = after.trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
        } else if !rest.is_empty() {
            return None;
        }
    }
    Some(hexagons)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let hexagons = parse_hexagon_list("[(0, 0), (1, 0), (-2, 3)]").unwrap();
        assert_eq!(
            hexagons,
            vec![FaceLabel::new(0, 0), FaceLabel::new(1, 0), FaceLabel::new(-2, 3)]
        );
    }

    #[test]
    fn tolerates_whitespace_and_trailing_comma() {
        let hexagons = parse_hexagon_list("  [ (0,0) ,(1 , 0), ]\n").unwrap();
        assert_eq!(hexagons.len(), 2);
        assert!(parse_hexagon_list("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_input() {
        for text in [
            "",
            "(0, 0)",
            "[(0, 0)",
            "[(0 0)]",
            "[(0, 0, 0)]",
            "[(a, 1)]",
            "[(0, 0) (1, 0)]",
            "[(0, 0)],",
            "[,]",
        ] {
            assert_eq!(
                parse_hexagon_list(text),
                Err(ParseError::ParseFailure),
                "{text:?} was accepted"
            );
        }
    }

    #[test]
    fn failure_message_is_generic() {
        let err = "[(x, y)]".parse::<Benzenoid>().unwrap_err();
        assert_eq!(err.to_string(), "not a valid hexagon list");
    }

    #[test]
    fn parse_builds_a_benzenoid() {
        let b: Benzenoid = "[(0, 0), (1, 0)]".parse().unwrap();
        assert_eq!(b.boundary_edges_code().unwrap(), "55");
    }
}
