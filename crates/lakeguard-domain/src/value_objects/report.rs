//! Entity-level and fleet-level compliance results

use crate::entities::QualifiedName;
use crate::value_objects::{CheckStatus, EntityError, ValidationOutcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One failed required check with its reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    /// Check identifier
    pub check: String,
    /// Why it failed
    pub reason: String,
}

/// Comprehensive result for one entity
///
/// The entity is compliant iff `failures` is empty (pure AND over the
/// required checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityResult {
    /// Entity the result belongs to
    pub entity: QualifiedName,
    /// Overall verdict
    pub compliant: bool,
    /// Every executed outcome, in required-check order
    pub outcomes: Vec<ValidationOutcome>,
    /// Every failed check, in required-check order
    pub failures: Vec<CheckFailure>,
    /// Structural error when the entity was rejected as malformed
    pub error: Option<EntityError>,
}

impl EntityResult {
    /// Build a result from the outcomes of the required checks
    pub fn from_outcomes(entity: QualifiedName, outcomes: Vec<ValidationOutcome>) -> Self {
        let failures: Vec<CheckFailure> = outcomes
            .iter()
            .filter(|o| o.is_failed())
            .map(|o| CheckFailure {
                check: o.check().to_string(),
                reason: o.reason().unwrap_or("check failed").to_string(),
            })
            .collect();
        let error = outcomes.iter().find_map(|o| o.error().cloned());

        Self {
            entity,
            compliant: failures.is_empty(),
            outcomes,
            failures,
            error,
        }
    }

    /// Identifiers of the failed checks
    pub fn failing_checks(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.check.as_str())
    }

    /// Outcome of a specific check, if it was run
    pub fn outcome(&self, check: &str) -> Option<&ValidationOutcome> {
        self.outcomes.iter().find(|o| o.check() == check)
    }

    /// One-line summary, e.g. `Passed: 3/5 checks. Failed: [a, b]`
    pub fn compliance_summary(&self) -> String {
        if self.failures.is_empty() {
            return "All checks passed".to_string();
        }
        let passed = self.outcomes.iter().filter(|o| o.is_passed()).count();
        let failed: Vec<&str> = self.failing_checks().collect();
        format!(
            "Passed: {}/{} checks. Failed: [{}]",
            passed,
            self.outcomes.len(),
            failed.join(", ")
        )
    }
}

/// Batch-wide statistics for one check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckStats {
    /// Check identifier
    pub check: String,
    /// Entities that passed
    pub passed: usize,
    /// Entities that failed
    pub failed: usize,
    /// Entities for which the check deferred
    pub deferred: usize,
    /// `passed / evaluated * 100` (0 for an empty batch)
    pub pass_rate: f64,
}

/// Fleet summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Entities evaluated
    pub total_entities: usize,
    /// Entities passing every required check
    pub total_passing: usize,
    /// Entities failing at least one required check
    pub total_failing: usize,
    /// Entities skipped because evaluation was cancelled
    pub total_skipped: usize,
    /// `total_passing / total_entities * 100` (0 for an empty batch)
    pub compliance_rate: f64,
    /// Per-check statistics, in required-check order
    pub check_stats: Vec<CheckStats>,
    /// Failed check → number of entities failing it
    pub common_failures: BTreeMap<String, usize>,
}

/// Aggregate over a batch; read-only after construction
///
/// Every failing entity is listed with all of its failures. Nothing is
/// sampled or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Required checks, in configured order
    pub required_checks: Vec<String>,
    /// Results for every evaluated entity, in batch order
    pub entities: Vec<EntityResult>,
    /// Fleet statistics
    pub summary: ComplianceSummary,
    /// Whether evaluation was cancelled before every entity ran
    pub cancelled: bool,
}

impl ComplianceReport {
    /// Build the report and its summary
    ///
    /// `skipped` is the number of entities that were never evaluated because
    /// the run was cancelled.
    pub fn new(required_checks: Vec<String>, entities: Vec<EntityResult>, skipped: usize) -> Self {
        let total_entities = entities.len();
        let total_passing = entities.iter().filter(|e| e.compliant).count();
        let total_failing = total_entities - total_passing;

        let check_stats = required_checks
            .iter()
            .map(|check| {
                let mut stats = CheckStats {
                    check: check.clone(),
                    passed: 0,
                    failed: 0,
                    deferred: 0,
                    pass_rate: 0.0,
                };
                for outcome in entities.iter().filter_map(|e| e.outcome(check)) {
                    match outcome.status() {
                        CheckStatus::Passed => stats.passed += 1,
                        CheckStatus::Failed => stats.failed += 1,
                        CheckStatus::Deferred => stats.deferred += 1,
                    }
                }
                stats.pass_rate = percentage(stats.passed, total_entities);
                stats
            })
            .collect();

        let mut common_failures = BTreeMap::new();
        for check in entities.iter().flat_map(|e| e.failing_checks()) {
            *common_failures.entry(check.to_string()).or_insert(0) += 1;
        }

        Self {
            summary: ComplianceSummary {
                total_entities,
                total_passing,
                total_failing,
                total_skipped: skipped,
                compliance_rate: percentage(total_passing, total_entities),
                check_stats,
                common_failures,
            },
            required_checks,
            entities,
            cancelled: skipped > 0,
        }
    }

    /// Entities failing at least one required check
    pub fn failing_entities(&self) -> impl Iterator<Item = &EntityResult> {
        self.entities.iter().filter(|e| !e.compliant)
    }

    /// Result for a specific entity
    pub fn entity(&self, name: &QualifiedName) -> Option<&EntityResult> {
        self.entities.iter().find(|e| &e.entity == name)
    }

    /// Statistics for a specific check
    pub fn check_stats(&self, check: &str) -> Option<&CheckStats> {
        self.summary.check_stats.iter().find(|s| s.check == check)
    }

    /// Whether every evaluated entity is compliant
    pub fn passed(&self) -> bool {
        self.summary.total_failing == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
