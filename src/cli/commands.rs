//! CLI command implementations.

use std::io::Read;
use std::path::Path;

use crate::engine::Session;
use crate::format::{
    graph_from_json, graph_to_json, parse_adjacency, write_adjacency, ParseOptions,
};
use crate::graph::AdjacencyGraph;
use crate::types::{BfsResult, Edge, OutputFormat};

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> BfsResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Run BFS and print the visitation order with levels.
pub fn cmd_traverse(path: &Path, start: &str, options: &ParseOptions, json: bool) -> BfsResult<()> {
    let text = read_input(path)?;
    let mut session = Session::with_options(*options);
    let report = session.submit(&text, start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        return Ok(());
    }

    let Some(result) = session.result() else {
        return Ok(());
    };
    println!(
        "BFS from {}: visited {} of {} nodes, depth {}",
        result.start,
        report.visited,
        session.graph().all_nodes().len(),
        report.depth
    );
    for node in &result.order {
        let level = result.level(node).unwrap_or_default();
        println!("  [{}] {}", level, node);
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} malformed lines", report.skipped.len());
    }
    Ok(())
}

/// Print the BFS tree edges (or discovery edges) of a traversal.
pub fn cmd_tree(
    path: &Path,
    start: &str,
    options: &ParseOptions,
    discovery: bool,
    json: bool,
) -> BfsResult<()> {
    let text = read_input(path)?;
    let mut session = Session::with_options(*options);
    session.submit(&text, start)?;

    let edges: Vec<Edge> = if discovery {
        session
            .result()
            .map(|result| result.discovery_edges())
            .unwrap_or_default()
    } else {
        session.tree_edges()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&edges)?);
    } else {
        for edge in &edges {
            println!("{}", edge);
        }
    }
    Ok(())
}

/// Print the parsed graph and any skipped lines.
pub fn cmd_show(path: &Path, options: &ParseOptions, json: bool) -> BfsResult<()> {
    let text = read_input(path)?;
    let parsed = parse_adjacency(&text, options)?;
    let graph = &parsed.graph;

    if json {
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "graph": graph,
            "skipped": parsed.skipped,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let neighbor_only = graph.all_nodes().len() - graph.node_count();
    println!("Nodes: {}", graph.node_count());
    println!("Neighbor-only nodes: {}", neighbor_only);
    println!("Edges: {}", graph.edge_count());
    print!("{}", write_adjacency(graph, options.separator)?);
    for skipped in &parsed.skipped {
        println!("Skipped line {}: {:?}", skipped.line, skipped.content);
    }
    Ok(())
}

/// Convert between adjacency text and the JSON graph object.
pub fn cmd_convert(
    path: &Path,
    options: &ParseOptions,
    from_json: bool,
    to: OutputFormat,
    output: Option<&Path>,
) -> BfsResult<()> {
    let text = read_input(path)?;
    let graph: AdjacencyGraph = if from_json {
        graph_from_json(&text)?
    } else {
        parse_adjacency(&text, options)?.graph
    };

    let rendered = match to {
        OutputFormat::Json => {
            let mut json = graph_to_json(&graph, true)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => write_adjacency(&graph, options.separator)?,
    };

    match output {
        Some(out) => {
            std::fs::write(out, rendered)?;
            log::debug!("wrote {} to {}", to, out.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
