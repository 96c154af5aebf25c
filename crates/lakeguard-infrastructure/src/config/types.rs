//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use lakeguard_domain::{ComplianceConfig, Result};
use lakeguard_validate::{CheckContext, CheckRegistry, ComprehensiveEvaluator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON lines instead of plain text
    pub json_format: bool,

    /// Also write to a daily-rotated file at this path
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Compliance rules
    pub compliance: ComplianceConfig,
}

impl AppConfig {
    /// Evaluation context for the compliance section
    pub fn check_context(&self) -> Result<CheckContext> {
        CheckContext::new(self.compliance.clone())
    }

    /// Evaluator over the compliance section and the built-in checks
    pub fn evaluator(&self) -> Result<ComprehensiveEvaluator> {
        ComprehensiveEvaluator::new(self.check_context()?, &CheckRegistry::standard())
    }
}
