use indentguard_types::{Finding, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Run summary surfaced alongside the findings.
#[derive(Clone, Debug)]
pub struct IndentData {
    pub profile: String,
    /// Distinct source lines carrying significant tokens.
    pub lines_scanned: u32,
    /// Constructs the structural validators actually examined.
    pub nodes_checked: u32,
    pub findings_total: u32,
    pub findings_emitted: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: IndentData,
    pub counts: SeverityCounts,
}
