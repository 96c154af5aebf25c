//! Comprehensive compliance evaluation
//!
//! Runs every required check against every entity of a batch and folds the
//! outcomes into a [`ComplianceReport`]. An entity is compliant only when all
//! required checks pass. Every failing entity is reported with every failure;
//! nothing is sampled.
//!
//! Entities are evaluated in parallel on a dedicated Rayon pool. Results keep
//! the batch order regardless of which worker finished first.

use crate::checks::{Check, CheckRegistry};
use crate::context::CheckContext;
use crate::precedence;
use lakeguard_domain::{
    ComplianceReport, Entity, EntityBatch, EntityResult, Error, ExemptionVerdict, Result,
    ValidationOutcome,
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Evaluates batches against the configured required checks
pub struct ComprehensiveEvaluator {
    ctx: CheckContext,
    checks: Vec<Arc<dyn Check>>,
    pool: ThreadPool,
}

impl ComprehensiveEvaluator {
    /// Resolve the required checks and start the worker pool
    ///
    /// Fails on an unknown check identifier before anything is evaluated.
    pub fn new(ctx: CheckContext, registry: &CheckRegistry) -> Result<Self> {
        let checks = registry.resolve_all(&ctx.config().comprehensive_required_checks)?;

        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("lakeguard-eval-{index}"));
        if let Some(threads) = ctx.config().worker_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().map_err(|e| Error::WorkerPool {
            message: e.to_string(),
        })?;

        info!(
            checks = checks.len(),
            workers = pool.current_num_threads(),
            "Comprehensive evaluator ready"
        );

        Ok(Self { ctx, checks, pool })
    }

    /// Evaluator over the default configuration and the built-in checks
    pub fn with_defaults() -> Result<Self> {
        Self::new(CheckContext::with_defaults()?, &CheckRegistry::standard())
    }

    /// Evaluation context
    pub fn context(&self) -> &CheckContext {
        &self.ctx
    }

    /// Required check identifiers, in report order
    pub fn required_checks(&self) -> Vec<String> {
        self.checks.iter().map(|c| c.id().to_string()).collect()
    }

    /// Run every required check against one entity
    ///
    /// A structurally malformed entity fails every required check with the
    /// structural error attached.
    pub fn evaluate_entity(&self, entity: &Entity) -> EntityResult {
        let outcomes: Vec<ValidationOutcome> = match entity.validate_identity() {
            Ok(()) => self
                .checks
                .iter()
                .map(|check| check.evaluate(entity, &self.ctx))
                .collect(),
            Err(error) => {
                warn!(entity = %entity.name, error = %error, "Rejecting malformed entity");
                self.checks
                    .iter()
                    .map(|check| ValidationOutcome::rejected(check.id(), error.clone()))
                    .collect()
            }
        };

        let result = EntityResult::from_outcomes(entity.name.clone(), outcomes);
        debug!(
            entity = %result.entity,
            compliant = result.compliant,
            failures = result.failures.len(),
            "Evaluated entity"
        );
        result
    }

    /// Evaluate a batch to completion
    pub fn evaluate(&self, entities: &[Entity]) -> ComplianceReport {
        self.evaluate_with_cancel(entities, &CancellationToken::new())
    }

    /// Evaluate a discovery batch to completion
    pub fn evaluate_batch(&self, batch: &EntityBatch) -> ComplianceReport {
        self.evaluate(batch.entities())
    }

    /// Evaluate a batch, skipping entities not yet started once `cancel` fires
    ///
    /// Results computed before cancellation are kept and the report is flagged
    /// as cancelled.
    pub fn evaluate_with_cancel(
        &self,
        entities: &[Entity],
        cancel: &CancellationToken,
    ) -> ComplianceReport {
        info!(entities = entities.len(), "Starting comprehensive evaluation");

        let results: Vec<Option<EntityResult>> = self.pool.install(|| {
            entities
                .par_iter()
                .map(|entity| {
                    if cancel.is_cancelled() {
                        None
                    } else {
                        Some(self.evaluate_entity(entity))
                    }
                })
                .collect()
        });

        let skipped = results.iter().filter(|r| r.is_none()).count();
        let evaluated: Vec<EntityResult> = results.into_iter().flatten().collect();
        if skipped > 0 {
            warn!(
                skipped,
                evaluated = evaluated.len(),
                "Evaluation cancelled before every entity ran"
            );
        }

        let report = ComplianceReport::new(self.required_checks(), evaluated, skipped);
        info!(
            total = report.summary.total_entities,
            passing = report.summary.total_passing,
            failing = report.summary.total_failing,
            compliance_rate = report.summary.compliance_rate,
            "Comprehensive evaluation complete"
        );
        report
    }

    /// Clustering verdicts for a batch, in input order
    pub fn resolve_verdicts(&self, entities: &[Entity]) -> Vec<ExemptionVerdict> {
        precedence::resolve_batch(entities, &self.ctx)
    }
}
