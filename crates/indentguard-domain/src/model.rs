//! Input data model: the syntax tree and token stream handed over by the
//! parsing layer.
//!
//! The tree is arena-backed: nodes live in one `Vec` and refer to each other
//! through `NodeId` indices. Checks never mutate it; misindentation
//! corrections live in a side table (`indent::Corrections`) scoped to one
//! evaluation pass.

/// Token channel carrying significant code. Everything else is trivia
/// (comments, whitespace) and is invisible to position-sensitive checks.
pub const SIGNIFICANT_CHANNEL: u32 = 0;

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Closed set of node kinds the checks dispatch on.
///
/// The position source maps its grammar onto these tags. Anything the indent
/// checks do not care about arrives as `Statement`, `Terminal`, or `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    SourceUnit,
    ContractDefinition,
    InterfaceDefinition,
    StructDefinition,
    EnumDefinition,
    ImportDirective,
    CallArguments,
    Block,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    Statement,
    Terminal,
    Other,
}

/// A tree element anchored at its first token.
///
/// Lines are 1-based and columns 0-based, matching the lexer contract.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub line: u32,
    pub column: u32,
    /// Line of the last token in this node's subtree.
    pub end_line: u32,
    /// Token text for terminals, `None` for interior nodes.
    pub text: Option<String>,
}

/// A lexed token as seen by the whole-file multiplicity pass.
#[derive(Clone, Debug)]
pub struct Token {
    pub line: u32,
    pub column: u32,
    pub channel: u32,
    pub token_type: u32,
    pub text: String,
}

/// Arena-backed syntax tree for one source unit.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Terminal text, `None` for interior nodes.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    /// Position of `id` among its parent's children, if it has a parent.
    pub fn sibling_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One checked source unit: its tree plus the full token stream in source
/// order.
#[derive(Clone, Debug)]
pub struct SourceModel {
    pub tree: SyntaxTree,
    pub tokens: Vec<Token>,
}

/// Adapter surface for the external parser.
///
/// Terminals contribute significant tokens to the stream as they are added;
/// `trivia` records tokens outside the significant channel that only the
/// whole-file pass sees. `finish` settles subtree end lines bottom-up.
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    tokens: Vec<Token>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let root = Node {
            kind: NodeKind::SourceUnit,
            parent: None,
            children: Vec::new(),
            line: 1,
            column: 0,
            end_line: 1,
            text: None,
        };
        Self {
            nodes: vec![root],
            tokens: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an interior node anchored at its first token's position.
    pub fn node(&mut self, parent: NodeId, kind: NodeKind, line: u32, column: u32) -> NodeId {
        self.push(parent, kind, line, column, None)
    }

    /// Append a terminal and its significant token.
    pub fn terminal(&mut self, parent: NodeId, text: &str, line: u32, column: u32) -> NodeId {
        self.tokens.push(Token {
            line,
            column,
            channel: SIGNIFICANT_CHANNEL,
            token_type: 0,
            text: text.to_string(),
        });
        self.push(parent, NodeKind::Terminal, line, column, Some(text.to_string()))
    }

    /// Record a token outside the significant channel (comments, whitespace).
    pub fn trivia(&mut self, text: &str, line: u32, column: u32) {
        self.tokens.push(Token {
            line,
            column,
            channel: 1,
            token_type: 0,
            text: text.to_string(),
        });
    }

    fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        line: u32,
        column: u32,
        text: Option<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            line,
            column,
            end_line: line,
            text,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn finish(mut self) -> SourceModel {
        // Children are appended after their parents, so one reverse sweep
        // settles every subtree end line.
        for i in (0..self.nodes.len()).rev() {
            let end = self.nodes[i].end_line;
            if let Some(parent) = self.nodes[i].parent {
                let p = parent.index();
                if end > self.nodes[p].end_line {
                    self.nodes[p].end_line = end;
                }
            }
        }
        SourceModel {
            tree: SyntaxTree {
                nodes: self.nodes,
                root: NodeId(0),
            },
            tokens: self.tokens,
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
