//! Tests for the comprehensive evaluator

use crate::test_utils::{ctx_with, documented, entity, undocumented, well_documented};
use lakeguard_domain::{Entity, EntityError, Error, QualifiedName, ValidationOutcome};
use lakeguard_validate::{
    CancellationToken, Check, CheckContext, CheckDomain, CheckRegistry, ComprehensiveEvaluator,
};
use std::sync::Arc;

fn evaluator() -> ComprehensiveEvaluator {
    ComprehensiveEvaluator::with_defaults().expect("Default evaluator should build")
}

fn evaluator_with(ctx: CheckContext) -> ComprehensiveEvaluator {
    ComprehensiveEvaluator::new(ctx, &CheckRegistry::standard())
        .expect("Evaluator should build")
}

/// Fails only the coverage check (3/5 documented)
fn coverage_only_failure(name: &str) -> Entity {
    entity(name)
        .with_comment("Warehouse shipments by carrier")
        .with_fields([
            documented("a"),
            documented("b"),
            documented("c"),
            undocumented("d"),
            undocumented("e"),
        ])
}

#[test]
fn test_default_required_checks() {
    assert_eq!(
        evaluator().required_checks(),
        vec![
            "table_has_comment",
            "table_comment_length",
            "no_placeholder_comments",
            "column_coverage >= 80",
            "critical_columns_documented",
        ]
    );
}

#[test]
fn test_compliant_entity() {
    let report = evaluator().evaluate(&[well_documented("orders")]);
    assert!(report.passed());
    assert_eq!(report.summary.total_passing, 1);
    assert!((report.summary.compliance_rate - 100.0).abs() < f64::EPSILON);
    assert_eq!(report.entities[0].compliance_summary(), "All checks passed");
}

#[test]
fn test_and_semantics_single_failure() {
    let report = evaluator().evaluate(&[coverage_only_failure("t")]);
    let result = &report.entities[0];
    assert!(!result.compliant);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].check, "column_coverage >= 80");
    assert_eq!(
        result.compliance_summary(),
        "Passed: 4/5 checks. Failed: [column_coverage >= 80]"
    );
}

#[test]
fn test_every_failure_reported() {
    let bare = entity("bare").with_field(undocumented("user_id"));
    let report = evaluator().evaluate(&[bare]);
    let failing: Vec<&str> = report.entities[0].failing_checks().collect();
    assert_eq!(
        failing,
        vec![
            "table_has_comment",
            "table_comment_length",
            "column_coverage >= 80",
            "critical_columns_documented",
        ]
    );
}

#[test]
fn test_every_failing_entity_listed() {
    let entities: Vec<Entity> = (0..40)
        .map(|i| {
            if i % 2 == 0 {
                well_documented(&format!("ok_{i}"))
            } else {
                coverage_only_failure(&format!("bad_{i}"))
            }
        })
        .collect();
    let report = evaluator().evaluate(&entities);
    assert_eq!(report.failing_entities().count(), 20);
    assert_eq!(report.summary.total_failing, 20);
    assert!((report.summary.compliance_rate - 50.0).abs() < f64::EPSILON);
    assert_eq!(
        report.summary.common_failures.get("column_coverage >= 80"),
        Some(&20)
    );
    let stats = report
        .check_stats("table_has_comment")
        .expect("stats for table_has_comment");
    assert_eq!(stats.passed, 40);
}

#[test]
fn test_results_keep_batch_order() {
    let ctx = ctx_with(|c| c.worker_threads = Some(4));
    let entities: Vec<Entity> = (0..64)
        .map(|i| well_documented(&format!("t{i:02}")))
        .collect();
    let report = evaluator_with(ctx).evaluate(&entities);
    let names: Vec<String> = report
        .entities
        .iter()
        .map(|e| e.entity.name.clone())
        .collect();
    let expected: Vec<String> = (0..64).map(|i| format!("t{i:02}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_evaluation_is_idempotent() {
    let evaluator = evaluator();
    let entities = vec![
        well_documented("a"),
        coverage_only_failure("b"),
        entity("c").with_comment("TODO"),
    ];
    assert_eq!(evaluator.evaluate(&entities), evaluator.evaluate(&entities));
}

#[test]
fn test_malformed_entity_rejected_batch_continues() {
    let malformed = Entity::new(QualifiedName::new("main", "", "orphan"));
    let report = evaluator().evaluate(&[malformed, well_documented("ok")]);

    let rejected = &report.entities[0];
    assert!(!rejected.compliant);
    assert_eq!(
        rejected.error,
        Some(EntityError::MissingIdentity {
            parts: vec!["namespace".to_string()]
        })
    );
    assert_eq!(rejected.failures.len(), 5);
    assert!(rejected.outcomes.iter().all(|o| o.error().is_some()));

    assert!(report.entities[1].compliant);
}

#[test]
fn test_unknown_check_rejected_at_startup() {
    let ctx = ctx_with(|c| {
        c.comprehensive_required_checks =
            vec!["table_has_comment".to_string(), "has_owner".to_string()];
    });
    let err = ComprehensiveEvaluator::new(ctx, &CheckRegistry::standard())
        .err()
        .expect("Unknown check should be rejected");
    assert!(matches!(err, Error::UnknownCheck { ref id } if id == "has_owner"));
}

#[test]
fn test_clustering_checks_in_required_list() {
    let ctx = ctx_with(|c| {
        c.comprehensive_required_checks = vec![
            "table_has_comment".to_string(),
            "clustering_compliance".to_string(),
            "size_exemption".to_string(),
        ];
    });
    let evaluator = evaluator_with(ctx);
    let unknown_size = well_documented("t").with_property("clusterByAuto", "true");
    let report = evaluator.evaluate(&[unknown_size]);

    let result = &report.entities[0];
    assert!(result.compliant, "deferred outcomes do not fail an entity");
    let stats = report
        .check_stats("size_exemption")
        .expect("stats for size_exemption");
    assert_eq!(stats.deferred, 1);
}

#[test]
fn test_empty_batch() {
    let report = evaluator().evaluate(&[]);
    assert_eq!(report.summary.total_entities, 0);
    assert!(report.summary.compliance_rate.abs() < f64::EPSILON);
    assert!(!report.cancelled);
}

#[test]
fn test_cancelled_before_start_skips_everything() {
    let token = CancellationToken::new();
    token.cancel();
    let entities = vec![well_documented("a"), well_documented("b")];
    let report = evaluator().evaluate_with_cancel(&entities, &token);
    assert!(report.cancelled);
    assert_eq!(report.summary.total_entities, 0);
    assert_eq!(report.summary.total_skipped, 2);
}

#[test]
fn test_uncancelled_token_evaluates_everything() {
    let token = CancellationToken::new();
    let entities = vec![well_documented("a"), well_documented("b")];
    let report = evaluator().evaluate_with_cancel(&entities, &token);
    assert!(!report.cancelled);
    assert_eq!(report.summary.total_entities, 2);
}

/// Passes, and fires the token the first time it runs
struct CancelOnFirstRun {
    token: CancellationToken,
}

impl Check for CancelOnFirstRun {
    fn id(&self) -> &str {
        "cancel_on_first_run"
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn evaluate(&self, _entity: &Entity, _ctx: &CheckContext) -> ValidationOutcome {
        self.token.cancel();
        ValidationOutcome::passed(self.id())
    }
}

#[test]
fn test_cancel_mid_run_keeps_finished_results() {
    let token = CancellationToken::new();
    let registry = CheckRegistry::new().with_check(Arc::new(CancelOnFirstRun {
        token: token.clone(),
    }));
    let ctx = ctx_with(|c| {
        c.comprehensive_required_checks = vec!["cancel_on_first_run".to_string()];
        c.worker_threads = Some(1);
    });
    let evaluator = ComprehensiveEvaluator::new(ctx, &registry).expect("Evaluator should build");

    let entities: Vec<Entity> = (0..50).map(|i| well_documented(&format!("t{i}"))).collect();
    let report = evaluator.evaluate_with_cancel(&entities, &token);

    assert!(report.cancelled);
    assert!(report.summary.total_entities >= 1);
    assert!(report.summary.total_skipped > 0);
    assert_eq!(
        report.summary.total_entities + report.summary.total_skipped,
        entities.len()
    );
    assert!(report.entities.iter().all(|r| r.compliant));
}

#[test]
fn test_evaluate_batch() {
    let batch = lakeguard_domain::EntityBatch::new(vec![well_documented("a")])
        .expect("Batch should build");
    assert!(evaluator().evaluate_batch(&batch).passed());
}

#[test]
fn test_resolve_verdicts() {
    let verdicts = evaluator().resolve_verdicts(&[entity("a").with_size_bytes(1)]);
    assert_eq!(verdicts.len(), 1);
    assert!(!verdicts[0].requires_clustering);
}
