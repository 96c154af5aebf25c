//! Check trait and registry
//!
//! Every compliance rule is a stateless [`Check`] registered under a stable
//! identifier. The comprehensive evaluator resolves its required checks
//! through a [`CheckRegistry`], so an unknown identifier is caught before any
//! entity is evaluated.

use crate::context::CheckContext;
use crate::documentation::ColumnCoverage;
use lakeguard_domain::{ConfigError, Entity, Error, Result, ValidationOutcome};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Stable check identifiers
pub mod ids {
    /// Entity has a non-blank comment
    pub const TABLE_HAS_COMMENT: &str = "table_has_comment";
    /// Entity comment meets the minimum length
    pub const TABLE_COMMENT_LENGTH: &str = "table_comment_length";
    /// Entity comment is not placeholder text
    pub const NO_PLACEHOLDER_COMMENTS: &str = "no_placeholder_comments";
    /// Documented-column percentage meets the threshold
    pub const COLUMN_COVERAGE: &str = "column_coverage";
    /// Every critical column is documented
    pub const CRITICAL_COLUMNS_DOCUMENTED: &str = "critical_columns_documented";
    /// Explicit clustering columns are present
    pub const EXPLICIT_CLUSTERING_COLUMNS: &str = "explicit_clustering_columns";
    /// Explicit clustering columns stay within the limit
    pub const CLUSTERING_COLUMN_LIMIT: &str = "clustering_column_limit";
    /// `CLUSTER BY AUTO` is enabled
    pub const AUTO_CLUSTERING: &str = "auto_clustering";
    /// Delta optimized writes and auto compaction are enabled
    pub const DELTA_AUTO_OPTIMIZATION: &str = "delta_auto_optimization";
    /// Entity is manually excluded from clustering
    pub const MANUAL_EXCLUSION: &str = "manual_exclusion";
    /// Entity is small enough to be exempt from clustering
    pub const SIZE_EXEMPTION: &str = "size_exemption";
    /// Entity is exempt from clustering or clustered
    pub const CLUSTERING_COMPLIANCE: &str = "clustering_compliance";
}

/// `column_coverage >= 90` style identifiers
static COVERAGE_OVERRIDE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*column_coverage\s*>=\s*(\d+(?:\.\d+)?)\s*$").ok()
});

/// Compliance dimension a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDomain {
    /// Comments and column documentation
    Documentation,
    /// Clustering configuration and exemptions
    Clustering,
}

impl std::fmt::Display for CheckDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Documentation => write!(f, "documentation"),
            Self::Clustering => write!(f, "clustering"),
        }
    }
}

/// A single compliance rule
///
/// Checks are pure: the same entity and context always produce the same
/// outcome.
pub trait Check: Send + Sync {
    /// Identifier used in configuration and reports
    fn id(&self) -> &str;

    /// Compliance dimension
    fn domain(&self) -> CheckDomain;

    /// What this check verifies
    fn description(&self) -> &'static str {
        ""
    }

    /// Evaluate one entity
    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome;
}

/// Registry of checks, keyed by identifier
pub struct CheckRegistry {
    checks: Vec<Arc<dyn Check>>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.id()))
            .finish()
    }
}

impl CheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register a check, replacing any check with the same identifier
    pub fn register(&mut self, check: Arc<dyn Check>) {
        self.checks.retain(|c| c.id() != check.id());
        self.checks.push(check);
    }

    /// Register a check (builder pattern)
    pub fn with_check(mut self, check: Arc<dyn Check>) -> Self {
        self.register(check);
        self
    }

    /// All registered checks, in registration order
    pub fn checks(&self) -> &[Arc<dyn Check>] {
        &self.checks
    }

    /// Registered identifiers, in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|c| c.id())
    }

    /// Registered check by exact identifier
    pub fn get(&self, id: &str) -> Option<Arc<dyn Check>> {
        self.checks.iter().find(|c| c.id() == id).cloned()
    }

    /// Resolve a configured identifier to a check
    ///
    /// Besides registered identifiers this accepts `column_coverage >= N`,
    /// which yields a coverage check with threshold `N` reporting under the
    /// identifier as written.
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn Check>> {
        if let Some(check) = self.get(id.trim()) {
            return Ok(check);
        }

        let threshold = COVERAGE_OVERRIDE
            .as_ref()
            .and_then(|re| re.captures(id))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());

        match threshold {
            Some(t) if (0.0..=100.0).contains(&t) => {
                let check: Arc<dyn Check> = Arc::new(ColumnCoverage::with_threshold(id, t));
                Ok(check)
            }
            Some(t) => Err(ConfigError::OutOfRange {
                key: "comprehensive_required_checks",
                value: t.to_string(),
                min: "0".to_string(),
                max: "100".to_string(),
            }
            .into()),
            None => Err(Error::UnknownCheck { id: id.to_string() }),
        }
    }

    /// Resolve every identifier, in order
    pub fn resolve_all<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Arc<dyn Check>>> {
        ids.iter().map(|id| self.resolve(id.as_ref())).collect()
    }

    /// Registry with every built-in check
    pub fn standard() -> Self {
        use crate::clustering::{
            AutoClusterFlag, ClusteringColumnLimit, DeltaAutoOptimization,
            ExplicitClusteringColumns, ManualExclusion, SizeExemption,
        };
        use crate::documentation::{
            CommentMinLength, CriticalColumnsDocumented, HasComment, NoPlaceholderComment,
        };
        use crate::precedence::ClusteringCompliance;

        Self::new()
            // Documentation
            .with_check(Arc::new(HasComment))
            .with_check(Arc::new(CommentMinLength))
            .with_check(Arc::new(NoPlaceholderComment))
            .with_check(Arc::new(ColumnCoverage::new()))
            .with_check(Arc::new(CriticalColumnsDocumented))
            // Clustering
            .with_check(Arc::new(ExplicitClusteringColumns))
            .with_check(Arc::new(ClusteringColumnLimit))
            .with_check(Arc::new(AutoClusterFlag))
            .with_check(Arc::new(DeltaAutoOptimization))
            .with_check(Arc::new(ManualExclusion))
            .with_check(Arc::new(SizeExemption))
            .with_check(Arc::new(ClusteringCompliance))
    }
}
