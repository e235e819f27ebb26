use crate::fingerprint::fingerprint_for_indent;
use crate::indent::{correct_indent_of, IndentCorrection};
use crate::model::{NodeId, NodeKind, SyntaxTree};
use crate::policy::EffectiveConfig;
use indentguard_types::{ids, Finding, Location};
use serde_json::json;

use super::Pass;

// Child slots of the controlled statement, dictated by the grammar shape:
// `if ( cond ) stmt else stmt`, `while ( cond ) stmt`, `do stmt while ...`.
// The `for` body is the construct's last child and is resolved by the caller.
pub(crate) const IF_THEN_SLOT: usize = 4;
pub(crate) const IF_ELSE_SLOT: usize = 6;
pub(crate) const WHILE_BODY_SLOT: usize = 4;
pub(crate) const DO_BODY_SLOT: usize = 1;

/// The un-braced controlled statement of a control construct must start one
/// unit beyond the construct's enclosing anchor when it sits on its own line.
pub(crate) fn check(
    tree: &SyntaxTree,
    cfg: &EffectiveConfig,
    construct: NodeId,
    slot: usize,
    pass: &mut Pass,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_INDENT_SINGLE_STATEMENT) else {
        return;
    };

    let Some(&statement) = tree.children(construct).get(slot) else {
        return;
    };

    // Braced bodies and else-if chains are validated elsewhere.
    if let Some(&first) = tree.children(statement).first() {
        if matches!(
            tree.node(first).kind,
            NodeKind::Block | NodeKind::IfStatement
        ) {
            return;
        }
    }

    // Single-line forms like `if (c) doX();` are exempt.
    let node = tree.node(statement);
    if node.line == tree.node(construct).line {
        return;
    }

    let Some(parent) = tree.parent(construct) else {
        return;
    };
    pass.nodes_checked += 1;

    let required = correct_indent_of(tree, &pass.corrections, parent) + cfg.indent.unit_width();
    if node.column != required {
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_INDENT_SINGLE_STATEMENT.to_string(),
            code: ids::CODE_STATEMENT_BODY.to_string(),
            message: format!(
                "expected indentation of {required} {} but found {}",
                cfg.indent.unit_name(),
                node.column
            ),
            location: Location {
                line: node.line,
                col: node.column,
            },
            help: Some(
                "Indent the controlled statement one unit beyond its construct.".to_string(),
            ),
            fingerprint: Some(fingerprint_for_indent(
                ids::CHECK_INDENT_SINGLE_STATEMENT,
                ids::CODE_STATEMENT_BODY,
                node.line,
                node.column,
            )),
            data: json!({
                "observed": node.column,
                "expected": required,
            }),
        });
        pass.error_lines.insert(node.line);
        pass.corrections.record(
            statement,
            IndentCorrection {
                observed: node.column,
                expected: required,
            },
        );
    }
}
