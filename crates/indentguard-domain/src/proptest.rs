//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Zero false positives on consistently indented trees
//! - Deterministic evaluation output
//! - Verdicts tracking finding severities

use crate::engine::evaluate;
use crate::model::{NodeId, NodeKind, SourceModel, TreeBuilder};
use crate::policy::IndentPolicy;
use crate::test_support::config_for_tests;
use indentguard_types::Verdict;
use proptest::prelude::*;

/// A contract whose body nests `depth` levels of blocks, every element
/// indented exactly one unit beyond its anchor.
fn well_formed_model(depth: u32, members: u32, unit: u32) -> SourceModel {
    let mut b = TreeBuilder::new();
    let root = b.root();
    let contract = b.node(root, NodeKind::ContractDefinition, 1, 0);
    b.terminal(contract, "contract", 1, 0);
    b.terminal(contract, "C", 1, 9);
    b.terminal(contract, "{", 1, 11);

    let mut line = 2;
    fill_level(&mut b, contract, depth, members, unit, 1, &mut line);

    b.terminal(contract, "}", line, 0);
    b.finish()
}

fn fill_level(
    b: &mut TreeBuilder,
    parent: NodeId,
    depth: u32,
    members: u32,
    unit: u32,
    level: u32,
    line: &mut u32,
) {
    let indent = unit * level;
    for _ in 0..members {
        let stmt = b.node(parent, NodeKind::Statement, *line, indent);
        b.terminal(stmt, "x", *line, indent);
        *line += 1;
    }

    if depth > 1 {
        let stmt = b.node(parent, NodeKind::Statement, *line, indent);
        b.terminal(stmt, "function", *line, indent);
        let block = b.node(stmt, NodeKind::Block, *line, indent + 12);
        b.terminal(block, "{", *line, indent + 12);
        *line += 1;

        fill_level(b, block, depth - 1, members, unit, level + 1, line);

        b.terminal(block, "}", *line, indent);
        *line += 1;
    }
}

proptest! {
    #[test]
    fn well_formed_trees_produce_no_findings(
        depth in 1u32..5,
        members in 1u32..5,
        unit in prop_oneof![Just(2u32), Just(4u32), Just(8u32)],
    ) {
        let model = well_formed_model(depth, members, unit);
        let cfg = config_for_tests(IndentPolicy::spaces(unit));

        let report = evaluate(&model, &cfg);
        prop_assert!(
            report.findings.is_empty(),
            "findings on a well-formed tree: {:?}",
            report.findings
        );
        prop_assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn evaluation_is_deterministic(
        depth in 1u32..4,
        members in 1u32..4,
        unit in prop_oneof![Just(3u32), Just(5u32)],
    ) {
        // Checking an off-grid tree against the 4-space unit forces findings;
        // the same model must evaluate identically every time.
        let model = well_formed_model(depth, members, unit);
        let cfg = config_for_tests(IndentPolicy::default());

        let first = evaluate(&model, &cfg);
        let second = evaluate(&model, &cfg);
        prop_assert_eq!(&first.findings, &second.findings);
        prop_assert_eq!(first.verdict, second.verdict);
    }

    #[test]
    fn every_finding_names_a_scanned_line(
        depth in 1u32..4,
        members in 1u32..4,
    ) {
        let model = well_formed_model(depth, members, 3);
        // Checking a 3-space tree against a 4-space unit forces findings.
        let cfg = config_for_tests(IndentPolicy::default());

        let report = evaluate(&model, &cfg);
        let max_line = model.tokens.iter().map(|t| t.line).max().unwrap_or(0);
        for finding in &report.findings {
            prop_assert!(finding.location.line >= 1);
            prop_assert!(finding.location.line <= max_line);
        }
    }
}
