use crate::fingerprint::fingerprint_for_indent;
use crate::model::{SourceModel, SIGNIFICANT_CHANNEL};
use crate::policy::EffectiveConfig;
use indentguard_types::{ids, Finding, Location};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};

/// Whole-file pass, run once after the traversal: every line's leftmost
/// significant column must be a multiple of the indent unit. Lines already
/// reported by the structural validators are skipped so a single mistake is
/// reported once.
pub(crate) fn run(
    model: &SourceModel,
    cfg: &EffectiveConfig,
    error_lines: &BTreeSet<u32>,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_INDENT_BASE) else {
        return;
    };
    let unit = cfg.indent.unit_width();

    // The minimal significant column per line approximates the line's
    // visual indent, misaligned first tokens included.
    let mut line_indent: BTreeMap<u32, u32> = BTreeMap::new();
    for token in model
        .tokens
        .iter()
        .filter(|t| t.channel == SIGNIFICANT_CHANNEL)
    {
        line_indent
            .entry(token.line)
            .and_modify(|col| *col = (*col).min(token.column))
            .or_insert(token.column);
    }

    for (&line, &col) in &line_indent {
        if error_lines.contains(&line) {
            continue;
        }
        if col % unit != 0 {
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_INDENT_BASE.to_string(),
                code: ids::CODE_OFF_UNIT.to_string(),
                message: "indentation is incorrect".to_string(),
                location: Location { line, col },
                help: Some(format!(
                    "Use indentation that is a multiple of {unit} {}.",
                    cfg.indent.unit_name()
                )),
                fingerprint: Some(fingerprint_for_indent(
                    ids::CHECK_INDENT_BASE,
                    ids::CODE_OFF_UNIT,
                    line,
                    col,
                )),
                data: json!({
                    "observed": col,
                    "unit": unit,
                }),
            });
        }
    }
}
