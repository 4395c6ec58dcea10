//! Writes graphs back out as adjacency text or JSON.

use std::io::Write;
use std::path::Path;

use crate::graph::AdjacencyGraph;
use crate::types::{BfsError, BfsResult};

/// Ids that would not parse back unchanged: empty, containing whitespace,
/// or containing the separator.
fn check_representable(id: &str, separator: char) -> BfsResult<()> {
    if id.is_empty() || id.contains(char::is_whitespace) || id.contains(separator) {
        return Err(BfsError::UnrepresentableNodeId {
            id: id.to_string(),
            separator,
        });
    }
    Ok(())
}

/// Render `graph` as adjacency text, one `node<sep> n1 n2` line per entry.
///
/// Parsing the output with the same separator yields an equal graph. Fails
/// with [`BfsError::UnrepresentableNodeId`] for any id the text format
/// cannot carry.
pub fn write_adjacency(graph: &AdjacencyGraph, separator: char) -> BfsResult<String> {
    let mut out = String::new();
    for (node, neighbors) in graph.entries() {
        check_representable(node, separator)?;
        out.push_str(node);
        out.push(separator);
        for neighbor in neighbors {
            check_representable(neighbor, separator)?;
            out.push(' ');
            out.push_str(neighbor);
        }
        out.push('\n');
    }
    Ok(out)
}

/// Write adjacency text for `graph` to any writer.
pub fn write_adjacency_to(
    graph: &AdjacencyGraph,
    separator: char,
    writer: &mut impl Write,
) -> BfsResult<()> {
    writer.write_all(write_adjacency(graph, separator)?.as_bytes())?;
    Ok(())
}

/// Write adjacency text for `graph` to a file.
pub fn write_adjacency_file(graph: &AdjacencyGraph, separator: char, path: &Path) -> BfsResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_adjacency_to(graph, separator, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode `graph` as a JSON object `{"node": ["neighbor", ...]}` in entry order.
pub fn graph_to_json(graph: &AdjacencyGraph, pretty: bool) -> BfsResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)?
    } else {
        serde_json::to_string(graph)?
    };
    Ok(json)
}

/// Decode a graph from the JSON object produced by [`graph_to_json`].
pub fn graph_from_json(json: &str) -> BfsResult<AdjacencyGraph> {
    Ok(serde_json::from_str(json)?)
}
