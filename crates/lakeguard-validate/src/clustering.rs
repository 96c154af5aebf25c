//! Clustering checks and property queries
//!
//! An entity can be clustered three ways: explicit clustering columns,
//! `CLUSTER BY AUTO`, or Delta auto-optimization. It can also be exempt from
//! clustering, either manually through the exclusion property or because it
//! is small. The queries here read one signal each; combining them is the job
//! of [`crate::precedence`].

use crate::checks::{Check, CheckDomain, ids};
use crate::context::CheckContext;
use lakeguard_domain::{ComplianceConfig, Entity, ValidationOutcome};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Explicit clustering columns
// ============================================================================

/// Raw clustering groups from the clustering property
///
/// The catalog stores them as a JSON nested list (`[["a"],["b"]]`). A missing,
/// empty or unparseable value yields no groups.
fn clustering_groups(entity: &Entity, config: &ComplianceConfig) -> Vec<Value> {
    entity
        .properties
        .get(&config.clustering_property_name)
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|value| match value {
            Value::Array(groups) => Some(groups),
            _ => None,
        })
        .unwrap_or_default()
}

/// Clustering column names, one per group (first name of each group)
pub fn clustering_columns(entity: &Entity, config: &ComplianceConfig) -> Vec<String> {
    clustering_groups(entity, config)
        .iter()
        .filter_map(|group| match group {
            Value::Array(names) => names.first().map(|name| match name {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// Whether the clustering property lists at least one group
pub fn has_clustering_columns(entity: &Entity, config: &ComplianceConfig) -> bool {
    !clustering_groups(entity, config).is_empty()
}

/// Explicit clustering columns are present
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitClusteringColumns;

impl Check for ExplicitClusteringColumns {
    fn id(&self) -> &str {
        ids::EXPLICIT_CLUSTERING_COLUMNS
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity defines explicit clustering columns"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        if has_clustering_columns(entity, config) {
            ValidationOutcome::passed_with(
                self.id(),
                format!(
                    "clustered by: {}",
                    clustering_columns(entity, config).join(", ")
                ),
            )
        } else {
            ValidationOutcome::failed(
                self.id(),
                format!(
                    "no clustering columns in '{}'",
                    config.clustering_property_name
                ),
            )
        }
    }
}

/// Explicit clustering columns stay within `max_clustering_columns`
///
/// The catalog refuses to create tables over the limit, so this only fires on
/// hand-built metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusteringColumnLimit;

impl Check for ClusteringColumnLimit {
    fn id(&self) -> &str {
        ids::CLUSTERING_COLUMN_LIMIT
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Explicit clustering columns stay within the limit"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let limit = ctx.config().max_clustering_columns;
        let count = clustering_columns(entity, ctx.config()).len();
        if count > limit {
            ValidationOutcome::failed(
                self.id(),
                format!("{count} clustering columns, maximum is {limit}"),
            )
        } else {
            ValidationOutcome::passed(self.id())
        }
    }
}

// ============================================================================
// Auto clustering
// ============================================================================

/// State of the auto-clustering property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoClusteringStatus {
    /// Property set to the configured value
    Enabled,
    /// Property absent or set to anything else
    Disabled,
    /// Entity has no properties at all
    Unknown,
}

/// Whether `CLUSTER BY AUTO` is enabled
pub fn has_auto_clustering(entity: &Entity, config: &ComplianceConfig) -> bool {
    entity.properties.has_value(
        &config.auto_cluster_property_name,
        &config.auto_cluster_property_value,
    )
}

/// Auto-clustering status
pub fn auto_clustering_status(entity: &Entity, config: &ComplianceConfig) -> AutoClusteringStatus {
    if entity.properties.is_empty() {
        AutoClusteringStatus::Unknown
    } else if has_auto_clustering(entity, config) {
        AutoClusteringStatus::Enabled
    } else {
        AutoClusteringStatus::Disabled
    }
}

/// `CLUSTER BY AUTO` is enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoClusterFlag;

impl Check for AutoClusterFlag {
    fn id(&self) -> &str {
        ids::AUTO_CLUSTERING
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity has automatic clustering enabled"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        if has_auto_clustering(entity, config) {
            ValidationOutcome::passed(self.id())
        } else {
            ValidationOutcome::failed(
                self.id(),
                format!(
                    "'{}' is not '{}'",
                    config.auto_cluster_property_name, config.auto_cluster_property_value
                ),
            )
        }
    }
}

// ============================================================================
// Delta auto-optimization
// ============================================================================

/// Per-flag Delta auto-optimization state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeltaOptimizationStatus {
    /// Optimized writes enabled
    pub optimize_write: bool,
    /// Auto compaction enabled
    pub auto_compact: bool,
    /// Both flags are required
    pub require_both: bool,
    /// Overall result under `require_both`
    pub enabled: bool,
}

/// Whether optimized writes are enabled
pub fn has_optimize_write(entity: &Entity, config: &ComplianceConfig) -> bool {
    entity.properties.has_value(
        &config.delta_optimize_property_names.0,
        &config.delta_optimize_property_value,
    )
}

/// Whether auto compaction is enabled
pub fn has_auto_compact(entity: &Entity, config: &ComplianceConfig) -> bool {
    entity.properties.has_value(
        &config.delta_optimize_property_names.1,
        &config.delta_optimize_property_value,
    )
}

/// Per-flag and overall Delta auto-optimization state
pub fn delta_optimization_status(
    entity: &Entity,
    config: &ComplianceConfig,
) -> DeltaOptimizationStatus {
    let optimize_write = has_optimize_write(entity, config);
    let auto_compact = has_auto_compact(entity, config);
    let require_both = config.require_both_delta_flags;
    DeltaOptimizationStatus {
        optimize_write,
        auto_compact,
        require_both,
        enabled: if require_both {
            optimize_write && auto_compact
        } else {
            optimize_write || auto_compact
        },
    }
}

/// Whether Delta auto-optimization satisfies clustering
pub fn has_delta_auto_optimization(entity: &Entity, config: &ComplianceConfig) -> bool {
    delta_optimization_status(entity, config).enabled
}

/// Delta optimized writes and auto compaction are enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaAutoOptimization;

impl Check for DeltaAutoOptimization {
    fn id(&self) -> &str {
        ids::DELTA_AUTO_OPTIMIZATION
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity has Delta auto-optimization enabled"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        let status = delta_optimization_status(entity, config);
        if status.enabled {
            return ValidationOutcome::passed(self.id());
        }

        let (write, compact) = &config.delta_optimize_property_names;
        let mut missing = Vec::new();
        if !status.optimize_write {
            missing.push(write.as_str());
        }
        if !status.auto_compact {
            missing.push(compact.as_str());
        }
        let quantifier = if status.require_both { "all" } else { "any" };
        ValidationOutcome::failed(
            self.id(),
            format!(
                "{quantifier} of [{write}, {compact}] must be '{}'; not set: {}",
                config.delta_optimize_property_value,
                missing.join(", ")
            ),
        )
    }
}

// ============================================================================
// Exemptions
// ============================================================================

/// State of the manual exclusion property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionStatus {
    /// Property set to the configured value
    Excluded,
    /// Property absent or set to anything else
    NotExcluded,
    /// Entity has no properties at all
    Unknown,
    /// Manual exclusion is not honoured
    Disabled,
}

/// Whether the entity is manually excluded (always false when not honoured)
pub fn has_manual_exclusion(entity: &Entity, config: &ComplianceConfig) -> bool {
    config.honor_exclusion_flag
        && entity.properties.has_value(
            &config.manual_exclusion_property_name,
            &config.manual_exclusion_property_value,
        )
}

/// Manual exclusion status
pub fn exclusion_status(entity: &Entity, config: &ComplianceConfig) -> ExclusionStatus {
    if !config.honor_exclusion_flag {
        ExclusionStatus::Disabled
    } else if entity.properties.is_empty() {
        ExclusionStatus::Unknown
    } else if has_manual_exclusion(entity, config) {
        ExclusionStatus::Excluded
    } else {
        ExclusionStatus::NotExcluded
    }
}

/// Whether the entity is below its size threshold
///
/// `None` when the size is unknown. A size exactly at the threshold is not
/// small.
pub fn is_small_entity(entity: &Entity, config: &ComplianceConfig) -> Option<bool> {
    let threshold = config.size_threshold_for(entity);
    entity.size_bytes.map(|size| size < threshold)
}

/// Whether small-entity exemption applies
pub fn has_size_exemption(entity: &Entity, config: &ComplianceConfig) -> bool {
    config.exempt_small_tables && is_small_entity(entity, config) == Some(true)
}

/// Entity is manually excluded from clustering
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualExclusion;

impl Check for ManualExclusion {
    fn id(&self) -> &str {
        ids::MANUAL_EXCLUSION
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity is manually excluded from clustering"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        match exclusion_status(entity, config) {
            ExclusionStatus::Excluded => ValidationOutcome::passed(self.id()),
            ExclusionStatus::Disabled => {
                ValidationOutcome::failed(self.id(), "manual exclusion is not honoured")
            }
            ExclusionStatus::NotExcluded | ExclusionStatus::Unknown => ValidationOutcome::failed(
                self.id(),
                format!(
                    "'{}' is not '{}'",
                    config.manual_exclusion_property_name, config.manual_exclusion_property_value
                ),
            ),
        }
    }
}

/// Entity is small enough to be exempt from clustering
///
/// Defers when the size is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeExemption;

impl Check for SizeExemption {
    fn id(&self) -> &str {
        ids::SIZE_EXEMPTION
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity is below the size threshold for clustering"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        if !config.exempt_small_tables {
            return ValidationOutcome::failed(self.id(), "size-based exemption is disabled");
        }

        let threshold = config.size_threshold_for(entity);
        match entity.size_bytes {
            None => ValidationOutcome::deferred(self.id(), "entity size is unknown"),
            Some(size) if size < threshold => ValidationOutcome::passed_with(
                self.id(),
                format!("{size} bytes is below the {threshold}-byte threshold"),
            ),
            Some(size) => ValidationOutcome::failed(
                self.id(),
                format!("{size} bytes is not below the {threshold}-byte threshold"),
            ),
        }
    }
}
