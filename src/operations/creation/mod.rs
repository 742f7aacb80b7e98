mod from_code;
mod parse;

pub use from_code::bec_to_hex_list;
pub use parse::parse_hexagon_list;
