//! Parses adjacency-list text (`node: n1 n2 n3`) into an AdjacencyGraph.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::graph::AdjacencyGraph;
use crate::types::{BfsError, BfsResult, NodeId, DEFAULT_SEPARATOR};

/// Options controlling how adjacency text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Character separating a node from its neighbor list.
    pub separator: char,
    /// Fail on the first malformed line instead of skipping it.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            strict: false,
        }
    }
}

impl ParseOptions {
    /// Default options with strict mode enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Use `separator` between node and neighbors.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    fn validate(&self) -> BfsResult<()> {
        if self.separator.is_whitespace() {
            return Err(BfsError::InvalidSeparator(self.separator));
        }
        Ok(())
    }
}

/// A non-blank input line that was ignored in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// The line as it appeared in the input.
    pub content: String,
}

/// Output of [`parse_adjacency`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGraph {
    /// The parsed graph.
    pub graph: AdjacencyGraph,
    /// Lines skipped in lenient mode, in input order.
    pub skipped: Vec<SkippedLine>,
}

enum Line<'a> {
    Blank,
    Entry(&'a str, Vec<NodeId>),
    NoSeparator,
    EmptyNode,
}

fn classify(line: &str, separator: char) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    let Some((node, rest)) = line.split_once(separator) else {
        return Line::NoSeparator;
    };
    let node = node.trim();
    if node.is_empty() {
        return Line::EmptyNode;
    }
    let neighbors = rest.split_whitespace().map(str::to_string).collect();
    Line::Entry(node, neighbors)
}

/// Parse adjacency-list text.
///
/// Each line `node: n1 n2` defines `node`'s neighbors; a later line for the
/// same node replaces the earlier list. Blank lines are ignored. Lines with
/// no separator or an empty node id are errors in strict mode and are
/// skipped (and reported in [`ParsedGraph::skipped`]) otherwise.
pub fn parse_adjacency(text: &str, options: &ParseOptions) -> BfsResult<ParsedGraph> {
    options.validate()?;

    let mut parsed = ParsedGraph::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        match classify(raw, options.separator) {
            Line::Blank => {}
            Line::Entry(node, neighbors) => {
                if parsed.graph.insert(node, neighbors).is_some() {
                    log::debug!("line {}: node {:?} redefined", line, node);
                }
            }
            Line::NoSeparator if options.strict => {
                return Err(BfsError::MalformedLine {
                    line,
                    content: raw.to_string(),
                });
            }
            Line::EmptyNode if options.strict => {
                return Err(BfsError::EmptyNodeId { line });
            }
            Line::NoSeparator | Line::EmptyNode => {
                log::warn!("skipping line {}: {:?}", line, raw);
                parsed.skipped.push(SkippedLine {
                    line,
                    content: raw.to_string(),
                });
            }
        }
    }

    log::debug!(
        "parsed {} nodes, {} edges, {} skipped lines",
        parsed.graph.node_count(),
        parsed.graph.edge_count(),
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Parse adjacency text from any reader.
pub fn read_adjacency(reader: &mut impl Read, options: &ParseOptions) -> BfsResult<ParsedGraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_adjacency(&text, options)
}

/// Parse an adjacency text file.
pub fn read_adjacency_file(path: &Path, options: &ParseOptions) -> BfsResult<ParsedGraph> {
    let text = std::fs::read_to_string(path)?;
    parse_adjacency(&text, options)
}

impl FromStr for AdjacencyGraph {
    type Err = BfsError;

    /// Lenient parse with the default separator; skipped lines are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_adjacency(s, &ParseOptions::default()).map(|parsed| parsed.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_splits_on_first_separator() {
        match classify("  A :  B  C:D ", ':') {
            Line::Entry(node, neighbors) => {
                assert_eq!(node, "A");
                assert_eq!(neighbors, ["B", "C:D"]);
            }
            _ => panic!("expected an entry"),
        }
    }

    #[test]
    fn classify_rejects_missing_separator_and_empty_node() {
        assert!(matches!(classify("A B C", ':'), Line::NoSeparator));
        assert!(matches!(classify("  : B", ':'), Line::EmptyNode));
        assert!(matches!(classify(" \t ", ':'), Line::Blank));
    }

    #[test]
    fn empty_node_id_does_not_create_a_node() {
        let parsed = parse_adjacency(": B\nA: B", &ParseOptions::default()).unwrap();
        assert!(!parsed.graph.contains_node(""));
        assert_eq!(parsed.graph.node_count(), 1);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 1);

        let err = parse_adjacency(": B", &ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, BfsError::EmptyNodeId { line: 1 }));
    }

    #[test]
    fn whitespace_separator_is_rejected() {
        let err = parse_adjacency("A B", &ParseOptions::default().with_separator(' '));
        assert!(matches!(err, Err(BfsError::InvalidSeparator(' '))));
    }
}
