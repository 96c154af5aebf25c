//! Tests for documentation checks

use crate::test_utils::{ctx, ctx_with, documented, entity, undocumented};
use lakeguard_validate::documentation::{
    column_documentation_percentage, undocumented_columns, undocumented_critical_columns,
};
use lakeguard_validate::{
    Check, CheckRegistry, ColumnCoverage, CommentMinLength, CriticalColumnsDocumented,
    HasComment, NoPlaceholderComment,
};

#[test]
fn test_has_comment() {
    let ctx = ctx();
    assert!(HasComment.evaluate(&entity("t"), &ctx).is_failed());
    assert!(
        HasComment
            .evaluate(&entity("t").with_comment("   "), &ctx)
            .is_failed()
    );
    assert!(
        HasComment
            .evaluate(&entity("t").with_comment("Orders"), &ctx)
            .is_passed()
    );
}

#[test]
fn test_comment_min_length() {
    let ctx = ctx();

    let short = CommentMinLength.evaluate(&entity("t").with_comment("short"), &ctx);
    assert!(short.is_failed());
    assert_eq!(
        short.reason(),
        Some("comment is 5 characters long, minimum is 10")
    );

    let exact = CommentMinLength.evaluate(&entity("t").with_comment("exactly10!"), &ctx);
    assert!(exact.is_passed());

    let missing = CommentMinLength.evaluate(&entity("t"), &ctx);
    assert!(missing.is_failed());
    assert!(missing.reason().is_some_and(|r| r.contains("no comment")));
}

#[test]
fn test_comment_length_counts_code_points() {
    let ctx = ctx();
    let nine = "é".repeat(9);
    let ten = "é".repeat(10);
    assert!(
        CommentMinLength
            .evaluate(&entity("t").with_comment(nine), &ctx)
            .is_failed()
    );
    assert!(
        CommentMinLength
            .evaluate(&entity("t").with_comment(ten), &ctx)
            .is_passed()
    );
}

#[test]
fn test_comment_min_length_configurable() {
    let ctx = ctx_with(|c| c.minimum_comment_length = 3);
    assert!(
        CommentMinLength
            .evaluate(&entity("t").with_comment("abc"), &ctx)
            .is_passed()
    );
}

#[test]
fn test_placeholder_comment_scenarios() {
    let ctx = ctx();

    let todo = NoPlaceholderComment.evaluate(&entity("t").with_comment("TODO"), &ctx);
    assert!(todo.is_failed());
    assert_eq!(todo.reason(), Some("comment 'TODO' is placeholder text"));

    let prose = NoPlaceholderComment.evaluate(
        &entity("t").with_comment("This table stores TODO items for users"),
        &ctx,
    );
    assert!(prose.is_passed());

    let prefixed =
        NoPlaceholderComment.evaluate(&entity("t").with_comment("tbd: fill in later"), &ctx);
    assert!(prefixed.is_failed());

    let catalog = NoPlaceholderComment.evaluate(
        &entity("t").with_comment("Product catalog with pricing information"),
        &ctx,
    );
    assert!(catalog.is_passed());
}

#[test]
fn test_placeholder_ignores_missing_comment() {
    let ctx = ctx();
    assert!(NoPlaceholderComment.evaluate(&entity("t"), &ctx).is_passed());
}

#[test]
fn test_placeholder_case_sensitivity() {
    let ctx = ctx_with(|c| c.case_sensitive_placeholders = true);
    assert!(
        NoPlaceholderComment
            .evaluate(&entity("t").with_comment("todo"), &ctx)
            .is_passed()
    );
    assert!(
        NoPlaceholderComment
            .evaluate(&entity("t").with_comment("TODO"), &ctx)
            .is_failed()
    );
}

#[test]
fn test_column_coverage_four_of_five() {
    let table = entity("t").with_fields([
        documented("a"),
        documented("b"),
        documented("c"),
        documented("d"),
        undocumented("e"),
    ]);
    assert!((column_documentation_percentage(&table) - 80.0).abs() < f64::EPSILON);

    let at_80 = ctx_with(|c| c.column_coverage_threshold = 80.0);
    assert!(ColumnCoverage::new().evaluate(&table, &at_80).is_passed());

    let at_81 = ctx_with(|c| c.column_coverage_threshold = 81.0);
    let outcome = ColumnCoverage::new().evaluate(&table, &at_81);
    assert!(outcome.is_failed());
    assert!(outcome.reason().is_some_and(|r| r.ends_with("undocumented: e")));
}

#[test]
fn test_column_coverage_exact_threshold_passes() {
    let fields = (0..100).map(|i| {
        if i < 57 {
            documented(&format!("c{i}"))
        } else {
            undocumented(&format!("c{i}"))
        }
    });
    let table = entity("t").with_fields(fields);
    assert!((column_documentation_percentage(&table) - 57.0).abs() < f64::EPSILON);

    let at_57 = ctx_with(|c| c.column_coverage_threshold = 57.0);
    assert!(ColumnCoverage::new().evaluate(&table, &at_57).is_passed());
    assert!(
        ColumnCoverage::with_threshold("column_coverage >= 57", 57.0)
            .evaluate(&table, &ctx())
            .is_passed()
    );
}

#[test]
fn test_column_coverage_vacuous() {
    let table = entity("t");
    assert!((column_documentation_percentage(&table) - 100.0).abs() < f64::EPSILON);
    let strict = ctx_with(|c| c.column_coverage_threshold = 100.0);
    assert!(ColumnCoverage::new().evaluate(&table, &strict).is_passed());
}

#[test]
fn test_blank_column_comment_is_undocumented() {
    let table = entity("t").with_fields([
        documented("a"),
        lakeguard_domain::Field::new("b", "int").with_comment("  "),
    ]);
    assert_eq!(undocumented_columns(&table), vec!["b"]);
    assert!((column_documentation_percentage(&table) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_column_coverage_threshold_override() {
    let registry = CheckRegistry::standard();
    let check = registry
        .resolve("column_coverage >= 90")
        .expect("Coverage override should resolve");
    assert_eq!(check.id(), "column_coverage >= 90");

    let table = entity("t").with_fields([
        documented("a"),
        documented("b"),
        documented("c"),
        documented("d"),
        undocumented("e"),
    ]);
    assert!(check.evaluate(&table, &ctx()).is_failed());
}

#[test]
fn test_critical_columns_documented() {
    let ctx = ctx();
    let table = entity("t").with_fields([
        undocumented("customer_id"),
        documented("order_id"),
        undocumented("email"),
        undocumented("notes"),
    ]);

    assert_eq!(
        undocumented_critical_columns(&table, ctx.critical_patterns()),
        vec!["customer_id", "email"]
    );
    let outcome = CriticalColumnsDocumented.evaluate(&table, &ctx);
    assert!(outcome.is_failed());
    assert_eq!(
        outcome.reason(),
        Some("undocumented critical columns: customer_id, email")
    );
}

#[test]
fn test_critical_columns_without_critical_fields() {
    let table = entity("t").with_fields([undocumented("notes"), undocumented("description")]);
    assert!(CriticalColumnsDocumented.evaluate(&table, &ctx()).is_passed());
}

#[test]
fn test_critical_columns_custom_patterns() {
    let ctx = ctx_with(|c| {
        c.critical_column_patterns = vec!["salary*".to_string()];
        c.case_sensitive_critical_patterns = true;
    });
    let table = entity("t").with_fields([undocumented("salary_band"), undocumented("SALARY")]);
    assert_eq!(
        undocumented_critical_columns(&table, ctx.critical_patterns()),
        vec!["salary_band"]
    );
}
