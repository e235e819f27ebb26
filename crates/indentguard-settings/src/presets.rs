use indentguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, IndentPolicy};
use indentguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        indent: IndentPolicy::default(),
        checks: default_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        indent: IndentPolicy::default(),
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use indentguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_INDENT_BLOCK.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_INDENT_SINGLE_STATEMENT.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_INDENT_BASE.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
