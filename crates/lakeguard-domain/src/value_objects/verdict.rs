//! Resolved clustering status of one entity

use crate::entities::QualifiedName;
use serde::{Deserialize, Serialize};

/// Why an entity does not need clustering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExemptReason {
    /// Manually excluded through the exclusion property
    Manual,
    /// Known size below the applicable threshold
    Size,
    /// Not exempt
    None,
}

impl std::fmt::Display for ExemptReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Size => write!(f, "size"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Ways an entity can satisfy the clustering requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringApproach {
    /// Explicit clustering columns
    ExplicitColumns,
    /// `CLUSTER BY AUTO`
    AutoClustering,
    /// Delta optimized writes plus auto compaction
    DeltaAutoOptimization,
}

impl std::fmt::Display for ClusteringApproach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExplicitColumns => write!(f, "explicit clustering columns"),
            Self::AutoClustering => write!(f, "auto clustering"),
            Self::DeltaAutoOptimization => write!(f, "delta auto-optimization"),
        }
    }
}

/// Kind of contradictory clustering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Explicit clustering columns on a manually excluded entity
    ExplicitColumnsWithExclusion,
    /// Auto clustering on a manually excluded entity
    AutoClusteringWithExclusion,
}

/// A data-hygiene signal; never changes the verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// What kind of conflict
    pub kind: ConflictKind,
    /// Operator-facing description
    pub description: String,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Clustering exemption/requirement verdict for one entity
///
/// Derived fresh per evaluation; never cached across configuration changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionVerdict {
    /// Entity the verdict belongs to
    pub entity: QualifiedName,
    /// Whether the entity must be clustered
    pub requires_clustering: bool,
    /// Exemption path that applied
    pub exempt_reason: ExemptReason,
    /// Clustering approaches present on the entity
    pub satisfied_by: Vec<ClusteringApproach>,
    /// Contradictory signals, in detection order
    pub conflicts: Vec<Conflict>,
}

impl ExemptionVerdict {
    /// Whether any exemption applied
    pub fn is_exempt(&self) -> bool {
        self.exempt_reason != ExemptReason::None
    }

    /// Whether at least one clustering approach is configured
    pub fn clustering_satisfied(&self) -> bool {
        !self.satisfied_by.is_empty()
    }

    /// Exempt, or required and satisfied
    pub fn is_compliant(&self) -> bool {
        !self.requires_clustering || self.clustering_satisfied()
    }

    /// Whether any conflict was recorded
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
