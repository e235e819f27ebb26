//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, IndentConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

use indentguard_domain::policy::EffectiveConfig;

/// Parse `indentguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IndentConfigV1> {
    let cfg: IndentConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config).
pub fn resolve_config(
    cfg: IndentConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Effective config for `input`, falling back to the strict preset with the
/// default 4-space unit when the document is absent or malformed.
pub fn effective_or_default(input: Option<&str>) -> EffectiveConfig {
    let cfg = input
        .and_then(|s| parse_config_toml(s).ok())
        .unwrap_or_default();
    resolve_config(cfg, Overrides::default())
        .map(|r| r.effective)
        .unwrap_or_else(|_| presets::preset("strict"))
}
