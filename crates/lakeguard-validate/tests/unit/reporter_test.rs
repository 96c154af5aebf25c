//! Tests for report rendering

use crate::test_utils::{clustering_json, ctx, entity, well_documented};
use lakeguard_validate::{ComplianceRecord, ComprehensiveEvaluator, Reporter, resolve_batch};

const STAMP: &str = "2026-01-01T00:00:00+00:00";

fn mixed_report() -> lakeguard_domain::ComplianceReport {
    let evaluator = ComprehensiveEvaluator::with_defaults().expect("Default evaluator should build");
    evaluator.evaluate(&[
        well_documented("orders"),
        entity("scratch").with_comment("TODO"),
    ])
}

#[test]
fn test_json_report_is_stamped() {
    let json = Reporter::to_json_at(&mixed_report(), STAMP);
    let value: serde_json::Value = serde_json::from_str(&json).expect("Report JSON should parse");
    assert_eq!(value["timestamp"], STAMP);
    assert_eq!(value["summary"]["total_entities"], 2);
    assert_eq!(value["summary"]["total_failing"], 1);
    assert_eq!(value["cancelled"], false);
    assert_eq!(
        value["entities"][1]["entity"]["name"],
        serde_json::json!("scratch")
    );
}

#[test]
fn test_json_report_with_current_time() {
    let json = Reporter::to_json(&mixed_report());
    let value: serde_json::Value = serde_json::from_str(&json).expect("Report JSON should parse");
    assert!(value["timestamp"].is_string());
}

#[test]
fn test_human_readable_report() {
    let text = Reporter::to_human_readable_at(&mixed_report(), STAMP);
    assert!(text.contains("=== Compliance Report ==="));
    assert!(text.contains(&format!("Timestamp: {STAMP}")));
    assert!(text.contains("Compliance rate:  50.0%"));
    assert!(text.contains("Status: FAILED"));
    assert!(text.contains("--- Failing Entities ---"));
    assert!(text.contains("main.sales.scratch: Passed: 3/5 checks."));
    assert!(text.contains("    - no_placeholder_comments: comment 'TODO' is placeholder text"));
    assert!(!text.contains("main.sales.orders:"));
}

#[test]
fn test_human_readable_passing_report() {
    let evaluator = ComprehensiveEvaluator::with_defaults().expect("Default evaluator should build");
    let report = evaluator.evaluate(&[well_documented("orders")]);
    let text = Reporter::to_human_readable_at(&report, STAMP);
    assert!(text.contains("Status: PASSED"));
    assert!(!text.contains("--- Failing Entities ---"));
}

#[test]
fn test_verdict_rendering() {
    let entities = vec![
        entity("excluded")
            .with_property("cluster_exclusion", "true")
            .with_property("clusteringColumns", &clustering_json(&["a"])),
        entity("small").with_size_bytes(1),
        entity("bare"),
    ];
    let verdicts = resolve_batch(&entities, &ctx());

    let text = Reporter::verdicts_to_human_readable(&verdicts);
    assert!(text.contains("main.sales.excluded: exempt (manual)"));
    assert!(text.contains("conflict: main.sales.excluded is manually excluded"));
    assert!(text.contains("main.sales.small: exempt (size)"));
    assert!(text.contains("main.sales.bare: REQUIRES CLUSTERING"));
    assert!(text.contains("3 entities, 1 requiring clustering without it"));

    let json = Reporter::verdicts_to_json(&verdicts);
    let value: serde_json::Value = serde_json::from_str(&json).expect("Verdict JSON should parse");
    assert_eq!(value["verdicts"][0]["exempt_reason"], "manual");
    assert_eq!(
        value["verdicts"][0]["conflicts"][0]["kind"],
        "explicit_columns_with_exclusion"
    );
}

#[test]
fn test_compliance_record_from_report() {
    let record = ComplianceRecord::from_report("documentation", &mixed_report(), STAMP);
    assert_eq!(record.domain, "documentation");
    assert_eq!(record.total_objects, 2);
    assert_eq!(record.compliant_objects, 1);
    assert_eq!(record.non_compliant_objects, 1);
    assert!((record.compliance_rate - 50.0).abs() < f64::EPSILON);
    assert_eq!(record.violations.len(), 1);
    assert!(record.violations[0].starts_with("main.sales.scratch: "));
    assert_eq!(record.timestamp, STAMP);
}

#[test]
fn test_compliance_record_from_verdicts() {
    let entities = vec![entity("small").with_size_bytes(1), entity("bare")];
    let verdicts = resolve_batch(&entities, &ctx());
    let record = ComplianceRecord::from_verdicts(&verdicts, STAMP);
    assert_eq!(record.domain, "clustering");
    assert_eq!(record.non_compliant_objects, 1);
    assert!((record.compliance_rate - 50.0).abs() < f64::EPSILON);

    let empty = ComplianceRecord::from_verdicts(&[], STAMP);
    assert!(empty.compliance_rate.abs() < f64::EPSILON);
}
