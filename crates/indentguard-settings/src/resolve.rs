use crate::{model::IndentConfigV1, presets};
use anyhow::Context;
use indentguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, IndentPolicy};
use indentguard_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub indent_size: Option<u32>,
    pub indent_unit: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: IndentConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // Indent options never fail resolution: a bad size or unit means the
    // 4-space default.
    let size = overrides.indent_size.or(cfg.indent_size);
    let unit = overrides.indent_unit.clone().or(cfg.indent_unit.clone());
    effective.indent = indent_policy(size, unit.as_deref());

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn indent_policy(size: Option<u32>, unit: Option<&str>) -> IndentPolicy {
    match unit {
        Some("tabs") => IndentPolicy::tabs(),
        Some("spaces") | None => match size {
            Some(n) if n > 0 => IndentPolicy::spaces(n),
            Some(_) => IndentPolicy::default(),
            None => IndentPolicy::default(),
        },
        // Unknown unit names fall back wholesale.
        Some(_) => IndentPolicy::default(),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
