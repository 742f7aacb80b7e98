mod boundary;
mod code;
mod connectivity;
mod export;
mod peaks;

pub use code::{canonical_code, code_from_degrees, BENZENE_CODE};
pub use export::{AdjacencyMatrix, AtomBondLists};
