pub mod drawing;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;
pub mod traversal;

pub use error::{BenzenoidError, Result};
pub use operations::creation::{bec_to_hex_list, parse_hexagon_list};
pub use operations::query::{canonical_code, BENZENE_CODE};
pub use topology::{
    canonical_edge_label, canonical_vertex_label, Benzenoid, EdgeLabel, FaceLabel, VertexLabel,
};
