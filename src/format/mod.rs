//! Text and JSON formats for adjacency graphs.

pub mod parser;
pub mod writer;

pub use parser::{
    parse_adjacency, read_adjacency, read_adjacency_file, ParseOptions, ParsedGraph, SkippedLine,
};
pub use writer::{
    graph_from_json, graph_to_json, write_adjacency, write_adjacency_file, write_adjacency_to,
};
