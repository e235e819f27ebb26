//! Expected-indent resolution: the correction side table, the corrected
//! indent of a node, and the leftmost node of a source line.

use std::collections::HashMap;

use crate::model::{NodeId, NodeKind, SyntaxTree};

/// First misindentation recorded for a node: `(observed, expected)` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentCorrection {
    pub observed: u32,
    pub expected: u32,
}

/// Sparse side table of corrections, scoped to one evaluation pass.
///
/// Write-once per node: the first recorded correction wins and later
/// attempts are ignored. It is the basis for reprojecting the expectations
/// of every descendant that starts on the same line.
#[derive(Debug, Default)]
pub struct Corrections {
    map: HashMap<NodeId, IndentCorrection>,
}

impl Corrections {
    pub fn record(&mut self, id: NodeId, correction: IndentCorrection) {
        self.map.entry(id).or_insert(correction);
    }

    pub fn get(&self, id: NodeId) -> Option<IndentCorrection> {
        self.map.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Column `id` should sit at, given corrections already reported on its line.
///
/// Starts from the node's own observed column and scans the node itself and
/// then each ancestor that begins on the node's start line. The first
/// recorded correction reprojects the column through its known delta; if the
/// walk leaves the line or runs out of parents, the observed column stands.
/// Reusing a flagged anchor's raw column would force a report on every
/// descendant line, so the corrected column is treated as ground truth.
pub fn correct_indent_of(tree: &SyntaxTree, corrections: &Corrections, id: NodeId) -> u32 {
    let start = tree.node(id);
    let (line, column) = (start.line, start.column);
    let mut cur = id;
    loop {
        if let Some(c) = corrections.get(cur) {
            return (column + c.expected).saturating_sub(c.observed);
        }
        match tree.parent(cur) {
            Some(parent) if tree.node(parent).line == line => cur = parent,
            _ => return column,
        }
    }
}

/// Leftmost node on the source line where `id` starts.
///
/// Walks up while the parent begins on the same line, stopping below the
/// source-unit root; then scans earlier siblings in reverse for one whose
/// subtree still ends on that line (a modifier or qualifier construct that
/// opens the physical line) and recurses from it until a fixed point.
/// Bounded by tree depth and document order, so it always terminates.
pub fn first_node_on_line(tree: &SyntaxTree, id: NodeId) -> NodeId {
    let line = tree.node(id).line;
    let mut cur = id;
    while let Some(parent) = tree.parent(cur) {
        let p = tree.node(parent);
        if p.kind == NodeKind::SourceUnit || p.line != line {
            break;
        }
        cur = parent;
    }

    if let Some(parent) = tree.parent(cur) {
        if let Some(idx) = tree.sibling_index(cur) {
            for &sibling in tree.children(parent)[..idx].iter().rev() {
                if tree.node(sibling).end_line == line {
                    return first_node_on_line(tree, sibling);
                }
            }
        }
    }
    cur
}
