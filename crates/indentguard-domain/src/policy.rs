use indentguard_types::Severity;
use std::collections::BTreeMap;

/// Kind of the configured indentation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndentUnit {
    Spaces,
    Tabs,
}

/// Effective indent unit: kind plus size in columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentPolicy {
    pub unit: IndentUnit,
    pub size: u32,
}

impl IndentPolicy {
    pub const DEFAULT_SIZE: u32 = 4;

    /// Space indentation of `size` columns per level. A zero size is clamped
    /// to one column.
    pub fn spaces(size: u32) -> Self {
        Self {
            unit: IndentUnit::Spaces,
            size: size.max(1),
        }
    }

    /// Tab indentation. The unit size is fixed at one column regardless of
    /// any configured size.
    pub fn tabs() -> Self {
        Self {
            unit: IndentUnit::Tabs,
            size: 1,
        }
    }

    /// Width of one indent level in columns.
    pub fn unit_width(self) -> u32 {
        match self.unit {
            IndentUnit::Tabs => 1,
            IndentUnit::Spaces => self.size,
        }
    }

    /// Unit name for diagnostic messages.
    pub fn unit_name(self) -> &'static str {
        match self.unit {
            IndentUnit::Tabs => "tabs",
            IndentUnit::Spaces => "spaces",
        }
    }
}

impl Default for IndentPolicy {
    fn default() -> Self {
        Self::spaces(Self::DEFAULT_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub indent: IndentPolicy,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_fix_the_unit_width_at_one() {
        assert_eq!(IndentPolicy::tabs().unit_width(), 1);
        assert_eq!(IndentPolicy::spaces(2).unit_width(), 2);
        assert_eq!(IndentPolicy::default().unit_width(), 4);
    }

    #[test]
    fn zero_space_size_is_clamped() {
        assert_eq!(IndentPolicy::spaces(0).unit_width(), 1);
    }
}
