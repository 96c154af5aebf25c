//! Compliance report rendering
//!
//! Renders evaluation results in two formats:
//! - JSON for CI integration and result archives
//! - Human-readable text for terminal output
//!
//! Reports themselves carry no timestamp so that re-evaluating the same batch
//! yields an identical report; the timestamp is added here at render time.

use lakeguard_domain::{ComplianceReport, ExemptionVerdict};
use serde::{Deserialize, Serialize};

/// Current UTC time in RFC 3339
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[derive(Serialize)]
struct Stamped<'a, T: Serialize> {
    timestamp: &'a str,
    #[serde(flatten)]
    body: &'a T,
}

#[derive(Serialize)]
struct VerdictList<'a> {
    verdicts: &'a [ExemptionVerdict],
}

/// Flat per-domain compliance record for result archives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    /// Compliance domain (`documentation`, `clustering`, ...)
    pub domain: String,
    /// Entities evaluated
    pub total_objects: usize,
    /// Compliant entities
    pub compliant_objects: usize,
    /// Non-compliant entities
    pub non_compliant_objects: usize,
    /// `compliant / total * 100` (0 for an empty batch)
    pub compliance_rate: f64,
    /// One line per non-compliant entity
    pub violations: Vec<String>,
    /// When the record was produced (RFC 3339)
    pub timestamp: String,
}

impl ComplianceRecord {
    /// Record for a comprehensive report
    pub fn from_report(
        domain: impl Into<String>,
        report: &ComplianceReport,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            total_objects: report.summary.total_entities,
            compliant_objects: report.summary.total_passing,
            non_compliant_objects: report.summary.total_failing,
            compliance_rate: report.summary.compliance_rate,
            violations: report
                .failing_entities()
                .map(|e| format!("{}: {}", e.entity, e.compliance_summary()))
                .collect(),
            timestamp: timestamp.into(),
        }
    }

    /// Clustering record for a list of verdicts
    #[allow(clippy::cast_precision_loss)]
    pub fn from_verdicts(verdicts: &[ExemptionVerdict], timestamp: impl Into<String>) -> Self {
        let violations: Vec<String> = verdicts
            .iter()
            .filter(|v| !v.is_compliant())
            .map(|v| format!("{}: clustering required but not configured", v.entity))
            .collect();
        let total = verdicts.len();
        let non_compliant = violations.len();
        let compliant = total - non_compliant;

        Self {
            domain: "clustering".to_string(),
            total_objects: total,
            compliant_objects: compliant,
            non_compliant_objects: non_compliant,
            compliance_rate: if total == 0 {
                0.0
            } else {
                compliant as f64 * 100.0 / total as f64
            },
            violations,
            timestamp: timestamp.into(),
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// JSON rendering of a report, stamped with the current time
    pub fn to_json(report: &ComplianceReport) -> String {
        Self::to_json_at(report, &timestamp_now())
    }

    /// JSON rendering of a report with an explicit timestamp
    pub fn to_json_at(report: &ComplianceReport, timestamp: &str) -> String {
        let stamped = Stamped {
            timestamp,
            body: report,
        };
        serde_json::to_string_pretty(&stamped).unwrap_or_else(|_| "{}".to_string())
    }

    /// JSON rendering of clustering verdicts, stamped with the current time
    pub fn verdicts_to_json(verdicts: &[ExemptionVerdict]) -> String {
        let stamped = Stamped {
            timestamp: &timestamp_now(),
            body: &VerdictList { verdicts },
        };
        serde_json::to_string_pretty(&stamped).unwrap_or_else(|_| "{}".to_string())
    }

    /// Human-readable rendering of a report
    pub fn to_human_readable(report: &ComplianceReport) -> String {
        Self::to_human_readable_at(report, &timestamp_now())
    }

    /// Human-readable rendering of a report with an explicit timestamp
    pub fn to_human_readable_at(report: &ComplianceReport, timestamp: &str) -> String {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str("=== Compliance Report ===\n\n");
        output.push_str(&format!("Timestamp: {timestamp}\n"));
        output.push_str(&format!(
            "Required checks: {}\n\n",
            report.required_checks.join(", ")
        ));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!("Entities:         {}\n", summary.total_entities));
        output.push_str(&format!("  Passing:        {}\n", summary.total_passing));
        output.push_str(&format!("  Failing:        {}\n", summary.total_failing));
        if summary.total_skipped > 0 {
            output.push_str(&format!("  Skipped:        {}\n", summary.total_skipped));
        }
        output.push_str(&format!(
            "Compliance rate:  {:.1}%\n\n",
            summary.compliance_rate
        ));

        output.push_str("--- Checks ---\n");
        for stats in &summary.check_stats {
            output.push_str(&format!(
                "  {:<32} {} passed, {} failed, {} deferred ({:.1}%)\n",
                stats.check, stats.passed, stats.failed, stats.deferred, stats.pass_rate
            ));
        }
        output.push('\n');

        let status = if report.passed() { "PASSED" } else { "FAILED" };
        if report.cancelled {
            output.push_str(&format!("Status: {status} (cancelled)\n\n"));
        } else {
            output.push_str(&format!("Status: {status}\n\n"));
        }

        if !summary.common_failures.is_empty() {
            output.push_str("--- Common Failures ---\n");
            for (check, count) in &summary.common_failures {
                output.push_str(&format!("  {check}: {count}\n"));
            }
            output.push('\n');
        }

        let failing: Vec<_> = report.failing_entities().collect();
        if !failing.is_empty() {
            output.push_str("--- Failing Entities ---\n");
            for entity in failing {
                output.push_str(&format!(
                    "  {}: {}\n",
                    entity.entity,
                    entity.compliance_summary()
                ));
                for failure in &entity.failures {
                    output.push_str(&format!("    - {}: {}\n", failure.check, failure.reason));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Human-readable rendering of clustering verdicts
    pub fn verdicts_to_human_readable(verdicts: &[ExemptionVerdict]) -> String {
        let mut output = String::new();
        output.push_str("=== Clustering Verdicts ===\n\n");

        for verdict in verdicts {
            let state = if !verdict.requires_clustering {
                format!("exempt ({})", verdict.exempt_reason)
            } else if verdict.clustering_satisfied() {
                let approaches: Vec<String> =
                    verdict.satisfied_by.iter().map(ToString::to_string).collect();
                format!("clustered via {}", approaches.join(", "))
            } else {
                "REQUIRES CLUSTERING".to_string()
            };
            output.push_str(&format!("  {}: {state}\n", verdict.entity));
            for conflict in &verdict.conflicts {
                output.push_str(&format!("    conflict: {conflict}\n"));
            }
        }

        let non_compliant = verdicts.iter().filter(|v| !v.is_compliant()).count();
        output.push_str(&format!(
            "\n{} entities, {} requiring clustering without it\n",
            verdicts.len(),
            non_compliant
        ));
        output
    }
}
