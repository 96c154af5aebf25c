//! Unit tests for validation outcomes and exemption verdicts

#[cfg(test)]
mod tests {
    use lakeguard_domain::{
        CheckStatus, ClusteringApproach, EntityError, ExemptReason, ExemptionVerdict,
        QualifiedName, ValidationOutcome,
    };

    #[test]
    fn test_outcome_constructors() {
        let passed = ValidationOutcome::passed("table_has_comment");
        assert!(passed.is_passed());
        assert_eq!(passed.reason(), None);

        let failed = ValidationOutcome::failed("table_has_comment", "no comment");
        assert!(failed.is_failed());
        assert_eq!(failed.reason(), Some("no comment"));

        let deferred = ValidationOutcome::deferred("size_exemption", "size unknown");
        assert_eq!(deferred.status(), CheckStatus::Deferred);
        assert!(!deferred.is_failed());
    }

    #[test]
    fn test_rejected_outcome_carries_error() {
        let error = EntityError::UnnamedField { index: 2 };
        let outcome = ValidationOutcome::rejected("column_coverage", error.clone());
        assert!(outcome.is_failed());
        assert_eq!(outcome.error(), Some(&error));
        assert_eq!(
            outcome.reason(),
            Some("malformed entity: field #2 has an empty name")
        );
    }

    #[test]
    fn test_outcome_display() {
        let outcome = ValidationOutcome::failed("x", "because");
        assert_eq!(outcome.to_string(), "[FAILED] x: because");
        assert_eq!(ValidationOutcome::passed("x").to_string(), "[PASSED] x");
    }

    #[test]
    fn test_verdict_compliance() {
        let mut verdict = ExemptionVerdict {
            entity: QualifiedName::new("main", "sales", "orders"),
            requires_clustering: true,
            exempt_reason: ExemptReason::None,
            satisfied_by: Vec::new(),
            conflicts: Vec::new(),
        };
        assert!(!verdict.is_compliant());
        assert!(!verdict.is_exempt());

        verdict.satisfied_by.push(ClusteringApproach::AutoClustering);
        assert!(verdict.is_compliant());

        verdict.satisfied_by.clear();
        verdict.requires_clustering = false;
        verdict.exempt_reason = ExemptReason::Size;
        assert!(verdict.is_compliant());
        assert!(verdict.is_exempt());
        assert_eq!(verdict.exempt_reason.to_string(), "size");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(CheckStatus::Deferred).expect("serialize status");
        assert_eq!(json, serde_json::json!("deferred"));
    }
}
