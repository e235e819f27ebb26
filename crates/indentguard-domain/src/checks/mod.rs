use crate::indent::Corrections;
use crate::model::{NodeId, NodeKind, SourceModel};
use crate::policy::EffectiveConfig;
use indentguard_types::Finding;
use std::collections::BTreeSet;

mod base_multiplicity;
mod block_indent;
mod single_statement;


/// Shared mutable state for one traversal: the correction side table, the
/// lines already reported, and a counter for the run summary. Discarded when
/// the pass ends.
pub(crate) struct Pass {
    pub corrections: Corrections,
    pub error_lines: BTreeSet<u32>,
    pub nodes_checked: u32,
}

/// Run the structural validators over a depth-first walk, then the
/// whole-file base-multiplicity pass. Returns the number of constructs the
/// structural validators examined.
pub fn run_all(model: &SourceModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) -> u32 {
    let mut pass = Pass {
        corrections: Corrections::default(),
        error_lines: BTreeSet::new(),
        nodes_checked: 0,
    };

    walk(model, cfg, model.tree.root(), &mut pass, out);
    base_multiplicity::run(model, cfg, &pass.error_lines, out);

    pass.nodes_checked
}

/// Depth-first enter hooks keyed on node kind.
fn walk(
    model: &SourceModel,
    cfg: &EffectiveConfig,
    id: NodeId,
    pass: &mut Pass,
    out: &mut Vec<Finding>,
) {
    let tree = &model.tree;
    match tree.node(id).kind {
        NodeKind::Block
        | NodeKind::ContractDefinition
        | NodeKind::InterfaceDefinition
        | NodeKind::StructDefinition
        | NodeKind::EnumDefinition
        | NodeKind::ImportDirective
        | NodeKind::CallArguments => block_indent::check(tree, cfg, id, pass, out),
        NodeKind::IfStatement => {
            single_statement::check(tree, cfg, id, single_statement::IF_THEN_SLOT, pass, out);
            single_statement::check(tree, cfg, id, single_statement::IF_ELSE_SLOT, pass, out);
        }
        NodeKind::WhileStatement => {
            single_statement::check(tree, cfg, id, single_statement::WHILE_BODY_SLOT, pass, out);
        }
        NodeKind::DoWhileStatement => {
            single_statement::check(tree, cfg, id, single_statement::DO_BODY_SLOT, pass, out);
        }
        NodeKind::ForStatement => {
            // The controlled statement is the construct's last child slot.
            if let Some(last) = tree.children(id).len().checked_sub(1) {
                single_statement::check(tree, cfg, id, last, pass, out);
            }
        }
        _ => {}
    }

    for &child in tree.children(id) {
        walk(model, cfg, child, pass, out);
    }
}
