//! Clustering exemption precedence
//!
//! Resolution order for one entity:
//!
//! 1. manual exclusion wins outright
//! 2. otherwise a known size under the applicable threshold exempts it
//! 3. otherwise clustering is required, and any of explicit columns, auto
//!    clustering or Delta auto-optimization satisfies it
//!
//! An unknown size never exempts. Conflicting signals (clustering configured
//! on an excluded entity) are recorded on the verdict but never change it.

use crate::checks::{Check, CheckDomain, ids};
use crate::clustering::{
    has_auto_clustering, has_clustering_columns, has_delta_auto_optimization,
    has_manual_exclusion, has_size_exemption,
};
use crate::context::CheckContext;
use lakeguard_domain::{
    ClusteringApproach, Conflict, ConflictKind, Entity, ExemptReason, ExemptionVerdict,
    ValidationOutcome,
};
use tracing::debug;

/// Resolve the clustering verdict for one entity
pub fn resolve(entity: &Entity, ctx: &CheckContext) -> ExemptionVerdict {
    let config = ctx.config();
    let manually_excluded = has_manual_exclusion(entity, config);

    let exempt_reason = if manually_excluded {
        ExemptReason::Manual
    } else if has_size_exemption(entity, config) {
        ExemptReason::Size
    } else {
        ExemptReason::None
    };

    let explicit = has_clustering_columns(entity, config);
    let auto = has_auto_clustering(entity, config);

    let mut satisfied_by = Vec::new();
    if explicit {
        satisfied_by.push(ClusteringApproach::ExplicitColumns);
    }
    if auto {
        satisfied_by.push(ClusteringApproach::AutoClustering);
    }
    if has_delta_auto_optimization(entity, config) {
        satisfied_by.push(ClusteringApproach::DeltaAutoOptimization);
    }

    let mut conflicts = Vec::new();
    if manually_excluded && explicit {
        conflicts.push(Conflict {
            kind: ConflictKind::ExplicitColumnsWithExclusion,
            description: format!(
                "{} is manually excluded but defines explicit clustering columns",
                entity.name
            ),
        });
    }
    if manually_excluded && auto {
        conflicts.push(Conflict {
            kind: ConflictKind::AutoClusteringWithExclusion,
            description: format!(
                "{} is manually excluded but has auto clustering enabled",
                entity.name
            ),
        });
    }

    let verdict = ExemptionVerdict {
        entity: entity.name.clone(),
        requires_clustering: exempt_reason == ExemptReason::None,
        exempt_reason,
        satisfied_by,
        conflicts,
    };

    debug!(
        entity = %verdict.entity,
        requires_clustering = verdict.requires_clustering,
        exempt_reason = %verdict.exempt_reason,
        conflicts = verdict.conflicts.len(),
        "Resolved clustering verdict"
    );
    verdict
}

/// Resolve verdicts for a batch, in input order
pub fn resolve_batch<'a, I>(entities: I, ctx: &CheckContext) -> Vec<ExemptionVerdict>
where
    I: IntoIterator<Item = &'a Entity>,
{
    entities.into_iter().map(|e| resolve(e, ctx)).collect()
}

/// Entity is exempt from clustering, or clustered
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusteringCompliance;

impl Check for ClusteringCompliance {
    fn id(&self) -> &str {
        ids::CLUSTERING_COMPLIANCE
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Clustering
    }

    fn description(&self) -> &'static str {
        "Entity is exempt from clustering or uses a clustering approach"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let verdict = resolve(entity, ctx);
        if !verdict.requires_clustering {
            return ValidationOutcome::passed_with(
                self.id(),
                format!("exempt ({})", verdict.exempt_reason),
            );
        }
        if verdict.clustering_satisfied() {
            let approaches: Vec<String> =
                verdict.satisfied_by.iter().map(ToString::to_string).collect();
            return ValidationOutcome::passed_with(
                self.id(),
                format!("clustered via {}", approaches.join(", ")),
            );
        }
        ValidationOutcome::failed(
            self.id(),
            "clustering required: no explicit clustering columns, auto clustering or Delta auto-optimization",
        )
    }
}
