use thiserror::Error;

/// Top-level error type for the benzenoid crate.
#[derive(Debug, Error)]
pub enum BenzenoidError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Drawing(#[from] DrawingError),
}

/// Errors related to the incidence graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("the benzenoid is empty")]
    EmptyStructure,

    #[error("{kind} local index {nu} is out of range [0, 5]")]
    LabelOutOfRange { kind: &'static str, nu: u8 },
}

/// Errors related to boundary-edges codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("malformed boundary-edges code: {0}")]
    MalformedCode(String),
}

/// Errors raised while reading textual hexagon lists.
///
/// The message carries no detail, so callers can show it to end users as is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a valid hexagon list")]
    ParseFailure,
}

/// Errors related to planar drawings.
#[derive(Debug, Error, PartialEq)]
pub enum DrawingError {
    #[error("invalid drawing parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BenzenoidError`].
pub type Result<T> = std::result::Result<T, BenzenoidError>;
