use crate::block::BlockView;
use crate::fingerprint::fingerprint_for_indent;
use crate::indent::{correct_indent_of, first_node_on_line, IndentCorrection};
use crate::model::{NodeId, SyntaxTree};
use crate::policy::EffectiveConfig;
use indentguard_types::{ids, Finding, Location, Severity};
use serde_json::json;

use super::Pass;

/// Every direct nested element of a braced block must start one unit beyond
/// the anchor line's indent, and the closing brace must align with the
/// anchor indent itself.
pub(crate) fn check(
    tree: &SyntaxTree,
    cfg: &EffectiveConfig,
    id: NodeId,
    pass: &mut Pass,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_INDENT_BLOCK) else {
        return;
    };

    let view = BlockView::new(tree, id);
    if !view.has_opening_brace() || view.brackets_on_same_line() {
        return;
    }
    pass.nodes_checked += 1;

    let anchor = first_node_on_line(tree, id);
    let anchor_indent = correct_indent_of(tree, &pass.corrections, anchor);
    let required = anchor_indent + cfg.indent.unit_width();

    for element in view.nested_elements() {
        let node = tree.node(element);
        if node.column != required {
            out.push(nested_element_finding(
                policy.severity,
                cfg,
                node.line,
                node.column,
                required,
            ));
            pass.error_lines.insert(node.line);
            pass.corrections.record(
                element,
                IndentCorrection {
                    observed: node.column,
                    expected: required,
                },
            );
        }
    }

    // Nothing nests below the closing brace, so no correction is attached.
    if let Some(close) = view.closing_brace() {
        let node = tree.node(close);
        if node.column != anchor_indent {
            out.push(closing_brace_finding(
                policy.severity,
                cfg,
                node.line,
                node.column,
                anchor_indent,
            ));
            pass.error_lines.insert(node.line);
        }
    }
}

fn nested_element_finding(
    severity: Severity,
    cfg: &EffectiveConfig,
    line: u32,
    observed: u32,
    expected: u32,
) -> Finding {
    Finding {
        severity,
        check_id: ids::CHECK_INDENT_BLOCK.to_string(),
        code: ids::CODE_NESTED_ELEMENT.to_string(),
        message: format!(
            "expected indentation of {expected} {} but found {observed}",
            cfg.indent.unit_name()
        ),
        location: Location {
            line,
            col: observed,
        },
        help: Some("Indent nested elements one unit beyond the line that opens the block.".to_string()),
        fingerprint: Some(fingerprint_for_indent(
            ids::CHECK_INDENT_BLOCK,
            ids::CODE_NESTED_ELEMENT,
            line,
            observed,
        )),
        data: json!({
            "observed": observed,
            "expected": expected,
        }),
    }
}

fn closing_brace_finding(
    severity: Severity,
    cfg: &EffectiveConfig,
    line: u32,
    observed: u32,
    expected: u32,
) -> Finding {
    Finding {
        severity,
        check_id: ids::CHECK_INDENT_BLOCK.to_string(),
        code: ids::CODE_CLOSING_BRACE.to_string(),
        message: format!(
            "expected indentation of {expected} {} but found {observed}",
            cfg.indent.unit_name()
        ),
        location: Location {
            line,
            col: observed,
        },
        help: Some("Align the closing brace with the line that opens the block.".to_string()),
        fingerprint: Some(fingerprint_for_indent(
            ids::CHECK_INDENT_BLOCK,
            ids::CODE_CLOSING_BRACE,
            line,
            observed,
        )),
        data: json!({
            "observed": observed,
            "expected": expected,
        }),
    }
}
