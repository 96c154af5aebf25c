//! Evaluation context shared by every check

use crate::patterns::{CriticalPattern, compile_critical_patterns};
use lakeguard_domain::{ComplianceConfig, Result};

/// Validated configuration plus the artefacts compiled from it
///
/// Built once before evaluation; checks only ever borrow it.
#[derive(Debug, Clone)]
pub struct CheckContext {
    config: ComplianceConfig,
    critical_patterns: Vec<CriticalPattern>,
}

impl CheckContext {
    /// Validate `config` and compile its critical-name patterns
    pub fn new(config: ComplianceConfig) -> Result<Self> {
        config.validate()?;
        let critical_patterns = compile_critical_patterns(
            &config.critical_column_patterns,
            config.case_sensitive_critical_patterns,
        )?;
        Ok(Self {
            config,
            critical_patterns,
        })
    }

    /// Context over the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(ComplianceConfig::default())
    }

    /// The configuration in effect
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Compiled critical-name patterns, in configured order
    pub fn critical_patterns(&self) -> &[CriticalPattern] {
        &self.critical_patterns
    }
}
