use crate::checks;
use crate::model::{SourceModel, SIGNIFICANT_CHANNEL};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, IndentData, SeverityCounts};
use indentguard_types::{Finding, Severity, Verdict};

pub fn evaluate(model: &SourceModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    let nodes_checked = checks::run_all(model, cfg, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = IndentData {
        profile: cfg.profile.clone(),
        lines_scanned: count_significant_lines(model),
        nodes_checked,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn count_significant_lines(model: &SourceModel) -> u32 {
    let mut lines: Vec<u32> = model
        .tokens
        .iter()
        .filter(|t| t.channel == SIGNIFICANT_CHANNEL)
        .map(|t| t.line)
        .collect();
    lines.sort_unstable();
    lines.dedup();
    lines.len() as u32
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location line
    // 3) location column
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(a.location.line.cmp(&b.location.line))
        .then(a.location.col.cmp(&b.location.col))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
