//! View over a possibly-braced compound node: contract/struct/enum bodies,
//! import clauses, call-argument lists, and plain blocks.

use crate::model::{NodeId, NodeKind, SyntaxTree};

/// Non-owning view locating a node's braces among its direct children.
///
/// Bracket positions are computed once at construction: the first direct
/// terminal reading `{` and the last reading `}`. Optionally-braced
/// constructs simply yield a view without an opening brace; callers must
/// check `has_opening_brace` before relying on the brace accessors.
pub struct BlockView<'t> {
    tree: &'t SyntaxTree,
    node: NodeId,
    open: Option<usize>,
    close: Option<usize>,
}

impl<'t> BlockView<'t> {
    pub fn new(tree: &'t SyntaxTree, node: NodeId) -> Self {
        let children = tree.children(node);
        let open = children.iter().position(|&c| tree.text(c) == Some("{"));
        let close = children.iter().rposition(|&c| tree.text(c) == Some("}"));
        Self {
            tree,
            node,
            open,
            close,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn has_opening_brace(&self) -> bool {
        self.open.is_some()
    }

    pub fn opening_brace(&self) -> Option<NodeId> {
        self.open.map(|i| self.tree.children(self.node)[i])
    }

    pub fn closing_brace(&self) -> Option<NodeId> {
        self.close.map(|i| self.tree.children(self.node)[i])
    }

    /// True when both braces sit on one source line (trivial block, exempt
    /// from nested-indent checks).
    pub fn brackets_on_same_line(&self) -> bool {
        match (self.opening_brace(), self.closing_brace()) {
            (Some(open), Some(close)) => {
                self.tree.node(open).line == self.tree.node(close).line
            }
            _ => false,
        }
    }

    /// Direct children strictly between the braces, skipping terminals.
    pub fn nested_elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        let (lo, hi) = match (self.open, self.close) {
            (Some(lo), Some(hi)) if lo < hi => (lo + 1, hi),
            _ => (0, 0),
        };
        self.tree.children(self.node)[lo..hi]
            .iter()
            .copied()
            .filter(|&c| self.tree.node(c).kind != NodeKind::Terminal)
    }
}
