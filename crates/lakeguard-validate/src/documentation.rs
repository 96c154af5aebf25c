//! Documentation checks
//!
//! Validates entity documentation:
//! - Entity comment is present, long enough and not placeholder text
//! - Enough columns carry a comment
//! - Every critical column carries a comment

use crate::checks::{Check, CheckDomain, ids};
use crate::context::CheckContext;
use crate::patterns::{CriticalPattern, matches_any, matches_placeholder};
use lakeguard_domain::{Entity, ValidationOutcome};

/// Percentage of documented fields; 100 for an entity without fields
///
/// Multiplies before dividing so whole-number percentages come out exact.
#[allow(clippy::cast_precision_loss)]
pub fn column_documentation_percentage(entity: &Entity) -> f64 {
    if entity.fields.is_empty() {
        return 100.0;
    }
    let documented = entity.fields.iter().filter(|f| f.is_documented()).count();
    documented as f64 * 100.0 / entity.fields.len() as f64
}

/// Names of fields without a non-blank comment, in field order
pub fn undocumented_columns(entity: &Entity) -> Vec<&str> {
    entity
        .fields
        .iter()
        .filter(|f| !f.is_documented())
        .map(|f| f.name.as_str())
        .collect()
}

/// Names of critical fields without a non-blank comment, in field order
pub fn undocumented_critical_columns<'a>(
    entity: &'a Entity,
    patterns: &[CriticalPattern],
) -> Vec<&'a str> {
    entity
        .fields
        .iter()
        .filter(|f| matches_any(&f.name, patterns) && !f.is_documented())
        .map(|f| f.name.as_str())
        .collect()
}

/// Entity has a non-blank comment
#[derive(Debug, Clone, Copy, Default)]
pub struct HasComment;

impl Check for HasComment {
    fn id(&self) -> &str {
        ids::TABLE_HAS_COMMENT
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn description(&self) -> &'static str {
        "Entity carries a non-blank comment"
    }

    fn evaluate(&self, entity: &Entity, _ctx: &CheckContext) -> ValidationOutcome {
        if entity.has_comment() {
            ValidationOutcome::passed(self.id())
        } else {
            ValidationOutcome::failed(self.id(), "entity has no comment")
        }
    }
}

/// Entity comment has at least `minimum_comment_length` code points
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentMinLength;

impl Check for CommentMinLength {
    fn id(&self) -> &str {
        ids::TABLE_COMMENT_LENGTH
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn description(&self) -> &'static str {
        "Entity comment meets the minimum length"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let minimum = ctx.config().minimum_comment_length;
        let Some(comment) = entity.comment.as_deref() else {
            return ValidationOutcome::failed(
                self.id(),
                format!("entity has no comment (minimum length is {minimum})"),
            );
        };

        let length = comment.chars().count();
        if length < minimum {
            ValidationOutcome::failed(
                self.id(),
                format!("comment is {length} characters long, minimum is {minimum}"),
            )
        } else {
            ValidationOutcome::passed(self.id())
        }
    }
}

/// Entity comment is not placeholder text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlaceholderComment;

impl Check for NoPlaceholderComment {
    fn id(&self) -> &str {
        ids::NO_PLACEHOLDER_COMMENTS
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn description(&self) -> &'static str {
        "Entity comment is not placeholder text"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let config = ctx.config();
        if matches_placeholder(
            entity.comment.as_deref(),
            &config.placeholder_patterns,
            config.case_sensitive_placeholders,
        ) {
            ValidationOutcome::failed(
                self.id(),
                format!(
                    "comment '{}' is placeholder text",
                    entity.trimmed_comment().unwrap_or_default()
                ),
            )
        } else {
            ValidationOutcome::passed(self.id())
        }
    }
}

/// Documented-column percentage is at least the threshold
///
/// Uses `column_coverage_threshold` unless built with an explicit threshold
/// (see [`ColumnCoverage::with_threshold`]).
#[derive(Debug, Clone)]
pub struct ColumnCoverage {
    id: String,
    threshold: Option<f64>,
}

impl Default for ColumnCoverage {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnCoverage {
    /// Coverage check using the configured threshold
    pub fn new() -> Self {
        Self {
            id: ids::COLUMN_COVERAGE.to_string(),
            threshold: None,
        }
    }

    /// Coverage check with a fixed threshold, reported under `id`
    pub fn with_threshold(id: impl Into<String>, threshold: f64) -> Self {
        Self {
            id: id.into(),
            threshold: Some(threshold),
        }
    }

    /// Threshold in effect for `ctx`
    pub fn threshold(&self, ctx: &CheckContext) -> f64 {
        self.threshold
            .unwrap_or(ctx.config().column_coverage_threshold)
    }
}

impl Check for ColumnCoverage {
    fn id(&self) -> &str {
        &self.id
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn description(&self) -> &'static str {
        "Enough columns carry a comment"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let threshold = self.threshold(ctx);
        let coverage = column_documentation_percentage(entity);
        if coverage < threshold {
            ValidationOutcome::failed(
                self.id(),
                format!(
                    "{coverage:.1}% of columns documented, {threshold}% required; undocumented: {}",
                    undocumented_columns(entity).join(", ")
                ),
            )
        } else {
            ValidationOutcome::passed(self.id())
        }
    }
}

/// Every critical column carries a comment
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalColumnsDocumented;

impl Check for CriticalColumnsDocumented {
    fn id(&self) -> &str {
        ids::CRITICAL_COLUMNS_DOCUMENTED
    }

    fn domain(&self) -> CheckDomain {
        CheckDomain::Documentation
    }

    fn description(&self) -> &'static str {
        "Every critical column carries a comment"
    }

    fn evaluate(&self, entity: &Entity, ctx: &CheckContext) -> ValidationOutcome {
        let missing = undocumented_critical_columns(entity, ctx.critical_patterns());
        if missing.is_empty() {
            ValidationOutcome::passed(self.id())
        } else {
            ValidationOutcome::failed(
                self.id(),
                format!("undocumented critical columns: {}", missing.join(", ")),
            )
        }
    }
}
