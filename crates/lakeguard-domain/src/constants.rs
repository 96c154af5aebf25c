//! Domain layer constants
//!
//! Default values for every recognised compliance option. The typed
//! configuration falls back to these whenever a key is absent.

// ============================================================================
// DOCUMENTATION DEFAULTS
// ============================================================================

/// Minimum number of characters (Unicode code points) for a table comment
pub const DEFAULT_MINIMUM_COMMENT_LENGTH: usize = 10;

/// Minimum percentage of documented columns
pub const DEFAULT_COLUMN_COVERAGE_THRESHOLD: f64 = 80.0;

/// Comments that carry no information when they open a table comment
pub const DEFAULT_PLACEHOLDER_PATTERNS: &[&str] = &[
    "TODO",
    "TBD",
    "TBA",
    "FIXME",
    "XXX",
    "placeholder",
    "N/A",
    "to be documented",
    "add description",
    "no description",
    "lorem ipsum",
];

/// Column names that must always be documented
///
/// A single leading or trailing `*` turns the pattern into a suffix or prefix
/// match; anything else is an exact (case-normalised) match.
pub const DEFAULT_CRITICAL_COLUMN_PATTERNS: &[&str] = &[
    "id",
    "*_id",
    "*_key",
    "uuid",
    "email",
    "*_email",
    "email_*",
    "phone*",
    "*_phone",
    "ssn",
    "password*",
    "*_token",
    "*_secret",
    "account_*",
    "*_amount",
    "created_at",
    "updated_at",
    "deleted_at",
];

// ============================================================================
// CLUSTERING DEFAULTS
// ============================================================================

/// Table property holding explicit clustering columns as a nested JSON list
pub const DEFAULT_CLUSTERING_PROPERTY: &str = "clusteringColumns";

/// Maximum number of clustering columns the catalog accepts
pub const DEFAULT_MAX_CLUSTERING_COLUMNS: usize = 4;

/// Table property set by `CLUSTER BY AUTO`
pub const DEFAULT_AUTO_CLUSTER_PROPERTY: &str = "clusterByAuto";

/// Delta property enabling optimized writes
pub const DEFAULT_OPTIMIZE_WRITE_PROPERTY: &str = "delta.autoOptimize.optimizeWrite";

/// Delta property enabling auto compaction
pub const DEFAULT_AUTO_COMPACT_PROPERTY: &str = "delta.autoOptimize.autoCompact";

/// Table property that manually excludes a table from clustering
pub const DEFAULT_MANUAL_EXCLUSION_PROPERTY: &str = "cluster_exclusion";

/// Value that switches a boolean-like property on
pub const DEFAULT_FLAG_VALUE: &str = "true";

/// Tables strictly below this size are exempt from clustering (1 GiB)
pub const DEFAULT_SIZE_THRESHOLD_BYTES: u64 = 1024 * 1024 * 1024;

/// Size threshold applied to test fixtures (1 MiB)
pub const DEFAULT_TEST_SIZE_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// Namespace that marks an entity as a test fixture
pub const DEFAULT_TEST_NAMESPACE: &str = "pytest_test_data";

// ============================================================================
// COMPREHENSIVE DEFAULTS
// ============================================================================

/// Checks that must all pass for a table to be comprehensively compliant
pub const DEFAULT_REQUIRED_CHECKS: &[&str] = &[
    "table_has_comment",
    "table_comment_length",
    "no_placeholder_comments",
    "column_coverage >= 80",
    "critical_columns_documented",
];
