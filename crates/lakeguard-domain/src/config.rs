//! Typed compliance configuration
//!
//! Built once at startup and immutable for the duration of an evaluation run.
//! Every key has a documented default (see [`crate::constants`]); an absent key
//! falls back to its default, never to an error. Out-of-domain values are
//! rejected by [`ComplianceConfig::validate`] before any entity is evaluated.

use crate::constants::{
    DEFAULT_AUTO_CLUSTER_PROPERTY, DEFAULT_AUTO_COMPACT_PROPERTY, DEFAULT_CLUSTERING_PROPERTY,
    DEFAULT_COLUMN_COVERAGE_THRESHOLD, DEFAULT_CRITICAL_COLUMN_PATTERNS, DEFAULT_FLAG_VALUE,
    DEFAULT_MANUAL_EXCLUSION_PROPERTY, DEFAULT_MAX_CLUSTERING_COLUMNS,
    DEFAULT_MINIMUM_COMMENT_LENGTH, DEFAULT_OPTIMIZE_WRITE_PROPERTY,
    DEFAULT_PLACEHOLDER_PATTERNS, DEFAULT_REQUIRED_CHECKS, DEFAULT_SIZE_THRESHOLD_BYTES,
    DEFAULT_TEST_NAMESPACE, DEFAULT_TEST_SIZE_THRESHOLD_BYTES,
};
use crate::entities::Entity;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Recognised compliance options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    // --- documentation ---
    /// Minimum table comment length in Unicode code points
    pub minimum_comment_length: usize,
    /// Placeholder patterns, matched at the start of a comment
    pub placeholder_patterns: Vec<String>,
    /// Compare placeholders case-sensitively
    pub case_sensitive_placeholders: bool,
    /// Minimum documented-column percentage (0–100)
    pub column_coverage_threshold: f64,
    /// Critical column name patterns (single leading/trailing `*`)
    pub critical_column_patterns: Vec<String>,
    /// Compare critical names case-sensitively
    pub case_sensitive_critical_patterns: bool,

    // --- clustering ---
    /// Property holding explicit clustering columns
    pub clustering_property_name: String,
    /// Maximum number of explicit clustering columns
    pub max_clustering_columns: usize,
    /// Property set by `CLUSTER BY AUTO`
    pub auto_cluster_property_name: String,
    /// Value of the auto-cluster property when enabled
    pub auto_cluster_property_value: String,
    /// Optimized-write and auto-compact property names
    pub delta_optimize_property_names: (String, String),
    /// Value of the delta properties when enabled
    pub delta_optimize_property_value: String,
    /// Require both delta flags (otherwise either suffices)
    pub require_both_delta_flags: bool,
    /// Manual exclusion property
    pub manual_exclusion_property_name: String,
    /// Value of the manual exclusion property when set
    pub manual_exclusion_property_value: String,
    /// Whether manual exclusion is honoured at all
    pub honor_exclusion_flag: bool,
    /// Production size threshold in bytes
    pub size_threshold_bytes: u64,
    /// Size threshold for test fixtures in bytes
    pub test_size_threshold_bytes: u64,
    /// Whether small entities are exempt from clustering
    pub exempt_small_tables: bool,
    /// Namespace marking test fixtures
    pub test_namespace: String,

    // --- comprehensive ---
    /// Checks that must all pass, in report order
    pub comprehensive_required_checks: Vec<String>,
    /// Evaluation worker threads (`None` = available parallelism)
    pub worker_threads: Option<usize>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            minimum_comment_length: DEFAULT_MINIMUM_COMMENT_LENGTH,
            placeholder_patterns: to_strings(DEFAULT_PLACEHOLDER_PATTERNS),
            case_sensitive_placeholders: false,
            column_coverage_threshold: DEFAULT_COLUMN_COVERAGE_THRESHOLD,
            critical_column_patterns: to_strings(DEFAULT_CRITICAL_COLUMN_PATTERNS),
            case_sensitive_critical_patterns: false,
            clustering_property_name: DEFAULT_CLUSTERING_PROPERTY.to_string(),
            max_clustering_columns: DEFAULT_MAX_CLUSTERING_COLUMNS,
            auto_cluster_property_name: DEFAULT_AUTO_CLUSTER_PROPERTY.to_string(),
            auto_cluster_property_value: DEFAULT_FLAG_VALUE.to_string(),
            delta_optimize_property_names: (
                DEFAULT_OPTIMIZE_WRITE_PROPERTY.to_string(),
                DEFAULT_AUTO_COMPACT_PROPERTY.to_string(),
            ),
            delta_optimize_property_value: DEFAULT_FLAG_VALUE.to_string(),
            require_both_delta_flags: true,
            manual_exclusion_property_name: DEFAULT_MANUAL_EXCLUSION_PROPERTY.to_string(),
            manual_exclusion_property_value: DEFAULT_FLAG_VALUE.to_string(),
            honor_exclusion_flag: true,
            size_threshold_bytes: DEFAULT_SIZE_THRESHOLD_BYTES,
            test_size_threshold_bytes: DEFAULT_TEST_SIZE_THRESHOLD_BYTES,
            exempt_small_tables: true,
            test_namespace: DEFAULT_TEST_NAMESPACE.to_string(),
            comprehensive_required_checks: to_strings(DEFAULT_REQUIRED_CHECKS),
            worker_threads: None,
        }
    }
}

impl ComplianceConfig {
    /// Reject values outside their domain
    ///
    /// Pattern syntax and check identifiers are verified by the evaluation
    /// crate, which owns their grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.column_coverage_threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::OutOfRange {
                key: "column_coverage_threshold",
                value: threshold.to_string(),
                min: "0".to_string(),
                max: "100".to_string(),
            });
        }
        if self.max_clustering_columns == 0 {
            return Err(ConfigError::Zero {
                key: "max_clustering_columns",
            });
        }
        if self.size_threshold_bytes == 0 {
            return Err(ConfigError::Zero {
                key: "size_threshold_bytes",
            });
        }
        if self.test_size_threshold_bytes == 0 {
            return Err(ConfigError::Zero {
                key: "test_size_threshold_bytes",
            });
        }
        if self.test_size_threshold_bytes > self.size_threshold_bytes {
            return Err(ConfigError::TestThresholdAboveProduction {
                test: self.test_size_threshold_bytes,
                production: self.size_threshold_bytes,
            });
        }
        if self.worker_threads == Some(0) {
            return Err(ConfigError::Zero {
                key: "worker_threads",
            });
        }

        let required_names = [
            ("clustering_property_name", &self.clustering_property_name),
            ("auto_cluster_property_name", &self.auto_cluster_property_name),
            ("auto_cluster_property_value", &self.auto_cluster_property_value),
            (
                "delta_optimize_property_names",
                &self.delta_optimize_property_names.0,
            ),
            (
                "delta_optimize_property_names",
                &self.delta_optimize_property_names.1,
            ),
            (
                "delta_optimize_property_value",
                &self.delta_optimize_property_value,
            ),
            (
                "manual_exclusion_property_name",
                &self.manual_exclusion_property_name,
            ),
            (
                "manual_exclusion_property_value",
                &self.manual_exclusion_property_value,
            ),
            ("test_namespace", &self.test_namespace),
        ];
        if let Some((key, _)) = required_names.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::Empty { key: *key });
        }

        if let Some(pattern) = self
            .placeholder_patterns
            .iter()
            .find(|p| p.trim().is_empty())
        {
            return Err(ConfigError::InvalidPattern {
                key: "placeholder_patterns",
                pattern: pattern.clone(),
                reason: "pattern is blank".to_string(),
            });
        }
        if self.comprehensive_required_checks.is_empty() {
            return Err(ConfigError::Empty {
                key: "comprehensive_required_checks",
            });
        }
        Ok(())
    }

    /// Size threshold that applies to an entity
    pub fn size_threshold_for(&self, entity: &Entity) -> u64 {
        if entity.is_test_fixture(&self.test_namespace) {
            self.test_size_threshold_bytes
        } else {
            self.size_threshold_bytes
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
