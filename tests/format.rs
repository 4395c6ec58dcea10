//! Adjacency text parsing, writing and JSON tests.

use tempfile::NamedTempFile;

use bfs_explorer::format::{
    graph_from_json, graph_to_json, parse_adjacency, read_adjacency, read_adjacency_file,
    write_adjacency, write_adjacency_file, ParseOptions, SkippedLine,
};
use bfs_explorer::graph::{AdjacencyGraph, GraphBuilder};
use bfs_explorer::types::{BfsError, NodeId};

// ==================== Parsing ====================

#[test]
fn test_parse_basic_lines() {
    let text = "A: B C\nB: D\nC: D\nD:\n";
    let parsed = parse_adjacency(text, &ParseOptions::default()).unwrap();

    let expected = GraphBuilder::new()
        .node("A", ["B", "C"])
        .node("B", ["D"])
        .node("C", ["D"])
        .leaf("D")
        .build();
    assert_eq!(parsed.graph, expected);
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_parse_trims_whitespace() {
    let text = "   A   :   B\t  C   \r\n\n  B:D  ";
    let parsed = parse_adjacency(text, &ParseOptions::default()).unwrap();

    assert_eq!(parsed.graph.neighbors("A"), ["B", "C"]);
    assert_eq!(parsed.graph.neighbors("B"), ["D"]);
    assert_eq!(parsed.graph.node_count(), 2);
}

#[test]
fn test_parse_empty_neighbor_list() {
    let parsed = parse_adjacency("A:   ", &ParseOptions::default()).unwrap();
    assert!(parsed.graph.contains_node("A"));
    assert!(parsed.graph.neighbors("A").is_empty());
}

#[test]
fn test_parse_splits_on_first_separator_only() {
    let parsed = parse_adjacency("A: B:1 C", &ParseOptions::default()).unwrap();
    assert_eq!(parsed.graph.neighbors("A"), ["B:1", "C"]);
}

#[test]
fn test_parse_skips_lines_without_separator() {
    let text = "A: B\nthis line has no separator\n\n: orphan\nB: A";
    let parsed = parse_adjacency(text, &ParseOptions::default()).unwrap();

    assert_eq!(parsed.graph.node_count(), 2);
    assert_eq!(
        parsed.skipped,
        vec![
            SkippedLine {
                line: 2,
                content: "this line has no separator".to_string(),
            },
            SkippedLine {
                line: 4,
                content: ": orphan".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_strict_rejects_malformed_line() {
    let err = parse_adjacency("A: B\nnope\n", &ParseOptions::strict()).unwrap_err();
    match err {
        BfsError::MalformedLine { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "nope");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_strict_rejects_empty_node() {
    let err = parse_adjacency("A: B\n  : C", &ParseOptions::strict()).unwrap_err();
    assert!(matches!(err, BfsError::EmptyNodeId { line: 2 }));
    assert!(err.is_input_error());
}

#[test]
fn test_parse_strict_allows_blank_lines() {
    let parsed = parse_adjacency("\nA: B\n   \n", &ParseOptions::strict()).unwrap();
    assert_eq!(parsed.graph.node_count(), 1);
}

#[test]
fn test_parse_redefinition_replaces_neighbors_in_place() {
    let parsed = parse_adjacency("A: B\nC: A\nA: C D", &ParseOptions::default()).unwrap();
    let keys: Vec<&NodeId> = parsed.graph.nodes().collect();

    assert_eq!(keys, ["A", "C"]);
    assert_eq!(parsed.graph.neighbors("A"), ["C", "D"]);
}

#[test]
fn test_parse_custom_separator() {
    let options = ParseOptions::default().with_separator('>');
    let parsed = parse_adjacency("A > B C\nB > A:x", &options).unwrap();

    assert_eq!(parsed.graph.neighbors("A"), ["B", "C"]);
    assert_eq!(parsed.graph.neighbors("B"), ["A:x"]);
}

#[test]
fn test_parse_empty_input() {
    let parsed = parse_adjacency("", &ParseOptions::default()).unwrap();
    assert!(parsed.graph.is_empty());
    assert!(parsed.skipped.is_empty());
}

#[test]
fn test_from_str_is_lenient() {
    let graph: AdjacencyGraph = "A: B\ngarbage\nB:".parse().unwrap();
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_read_adjacency_from_reader_and_file() {
    let text = "A: B\nB: C\n";
    let mut cursor = std::io::Cursor::new(text.as_bytes());
    let from_reader = read_adjacency(&mut cursor, &ParseOptions::default()).unwrap();

    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), text).unwrap();
    let from_file = read_adjacency_file(tmp.path(), &ParseOptions::default()).unwrap();

    assert_eq!(from_reader, from_file);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let err = read_adjacency_file(
        std::path::Path::new("/nonexistent/graph.txt"),
        &ParseOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BfsError::Io(_)));
}

// ==================== Writing ====================

#[test]
fn test_write_adjacency_text() {
    let graph = GraphBuilder::new()
        .node("A", ["B", "C"])
        .leaf("B")
        .node("C", ["A"])
        .build();

    assert_eq!(write_adjacency(&graph, ':').unwrap(), "A: B C\nB:\nC: A\n");
}

#[test]
fn test_written_text_parses_back() {
    let graph = GraphBuilder::new()
        .node("x1", ["x2", "x2", "x3"])
        .leaf("x2")
        .node("x3", ["x1"])
        .build();

    let tmp = NamedTempFile::new().unwrap();
    write_adjacency_file(&graph, ':', tmp.path()).unwrap();
    let parsed = read_adjacency_file(tmp.path(), &ParseOptions::default()).unwrap();
    assert_eq!(parsed.graph, graph);
}

#[test]
fn test_write_rejects_ids_text_cannot_carry() {
    let graph = graph_from_json(r#"{"a b": ["c"]}"#).unwrap();
    let err = write_adjacency(&graph, ':').unwrap_err();
    assert!(matches!(
        err,
        BfsError::UnrepresentableNodeId { ref id, separator: ':' } if id == "a b"
    ));
    assert!(err.is_input_error());

    let graph = graph_from_json(r#"{"k": ["y:z"]}"#).unwrap();
    assert!(matches!(
        write_adjacency(&graph, ':'),
        Err(BfsError::UnrepresentableNodeId { ref id, .. }) if id == "y:z"
    ));

    let graph = graph_from_json(r#"{"": ["x"]}"#).unwrap();
    assert!(matches!(
        write_adjacency(&graph, ':'),
        Err(BfsError::UnrepresentableNodeId { ref id, .. }) if id.is_empty()
    ));

    // Fine with a different separator.
    let graph = graph_from_json(r#"{"k": ["y:z"]}"#).unwrap();
    assert_eq!(write_adjacency(&graph, '>').unwrap(), "k> y:z\n");
}

#[test]
fn test_write_file_fails_on_unrepresentable_id() {
    let graph = graph_from_json(r#"{"k": ["c d"]}"#).unwrap();
    let tmp = NamedTempFile::new().unwrap();
    let err = write_adjacency_file(&graph, ':', tmp.path()).unwrap_err();
    assert!(matches!(err, BfsError::UnrepresentableNodeId { .. }));
}

// ==================== JSON ====================

#[test]
fn test_graph_json_keeps_entry_order() {
    let graph = GraphBuilder::new()
        .node("zeta", ["alpha"])
        .leaf("alpha")
        .node("mid", ["zeta", "alpha"])
        .build();

    let json = graph_to_json(&graph, false).unwrap();
    assert_eq!(json, r#"{"zeta":["alpha"],"alpha":[],"mid":["zeta","alpha"]}"#);

    let back = graph_from_json(&json).unwrap();
    let keys: Vec<&NodeId> = back.nodes().collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
    assert_eq!(back, graph);
}

#[test]
fn test_graph_from_json_rejects_non_object() {
    let err = graph_from_json(r#"["A", "B"]"#).unwrap_err();
    assert!(matches!(err, BfsError::Json(_)));
}
