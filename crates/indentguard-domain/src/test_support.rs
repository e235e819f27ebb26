use crate::model::{NodeId, NodeKind, TreeBuilder};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn, IndentPolicy};
use indentguard_types::{ids, Severity};
use std::collections::BTreeMap;

/// `contract C {` anchored at line 1, column 0. Tests append members and the
/// closing brace themselves.
pub fn contract_open(b: &mut TreeBuilder) -> NodeId {
    let root = b.root();
    let contract = b.node(root, NodeKind::ContractDefinition, 1, 0);
    b.terminal(contract, "contract", 1, 0);
    b.terminal(contract, "C", 1, 9);
    b.terminal(contract, "{", 1, 11);
    contract
}

/// A one-token statement member of `parent` at the given position.
pub fn member(b: &mut TreeBuilder, parent: NodeId, line: u32, col: u32) -> NodeId {
    let stmt = b.node(parent, NodeKind::Statement, line, col);
    b.terminal(stmt, "x", line, col);
    stmt
}

/// A member that opens a nested block at the end of its own line. Returns
/// `(member, block)`; the caller fills the block and closes it.
pub fn member_with_block(
    b: &mut TreeBuilder,
    parent: NodeId,
    line: u32,
    col: u32,
    brace_col: u32,
) -> (NodeId, NodeId) {
    let stmt = b.node(parent, NodeKind::Statement, line, col);
    b.terminal(stmt, "function", line, col);
    let block = b.node(stmt, NodeKind::Block, line, brace_col);
    b.terminal(block, "{", line, brace_col);
    (stmt, block)
}

pub fn config_for_tests(indent: IndentPolicy) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for check_id in [
        ids::CHECK_INDENT_BLOCK,
        ids::CHECK_INDENT_SINGLE_STATEMENT,
        ids::CHECK_INDENT_BASE,
    ] {
        checks.insert(check_id.to_string(), CheckPolicy::enabled(Severity::Error));
    }

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        indent,
        checks,
    }
}

pub fn config_with_check(
    check_id: &str,
    severity: Severity,
    indent: IndentPolicy,
) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        indent,
        checks,
    }
}
