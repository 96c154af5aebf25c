//! Compliance evaluation for Lakeguard
//!
//! This crate evaluates discovered entities against the compliance rules:
//! - Documentation: entity comments, placeholder text, column coverage and
//!   critical-column documentation
//! - Clustering: explicit columns, auto clustering, Delta auto-optimization,
//!   manual exclusion and small-entity exemption
//! - Precedence: one exemption verdict per entity, with conflict detection
//! - Comprehensive: AND over a configured list of checks, reported for the
//!   whole batch
//!
//! # Example
//!
//! ```
//! use lakeguard_domain::{Entity, Field, QualifiedName};
//! use lakeguard_validate::ComprehensiveEvaluator;
//!
//! let evaluator = ComprehensiveEvaluator::with_defaults().unwrap();
//! let entity = Entity::new(QualifiedName::new("main", "sales", "orders"))
//!     .with_comment("Customer orders placed through the web shop")
//!     .with_field(Field::new("order_id", "bigint").with_comment("Order key"));
//!
//! let report = evaluator.evaluate(&[entity]);
//! assert!(report.passed());
//! ```

pub mod checks;
pub mod clustering;
pub mod comprehensive;
pub mod context;
pub mod documentation;
pub mod patterns;
pub mod precedence;
pub mod reporter;

pub use checks::{Check, CheckDomain, CheckRegistry, ids};
pub use clustering::{
    AutoClusterFlag, AutoClusteringStatus, ClusteringColumnLimit, DeltaAutoOptimization,
    DeltaOptimizationStatus, ExclusionStatus, ExplicitClusteringColumns, ManualExclusion,
    SizeExemption,
};
pub use comprehensive::ComprehensiveEvaluator;
pub use context::CheckContext;
pub use documentation::{
    ColumnCoverage, CommentMinLength, CriticalColumnsDocumented, HasComment, NoPlaceholderComment,
};
pub use patterns::{
    CriticalPattern, PatternKind, compile_critical_patterns, matches_critical_name,
    matches_placeholder,
};
pub use precedence::{ClusteringCompliance, resolve, resolve_batch};
pub use reporter::{ComplianceRecord, Reporter};
pub use tokio_util::sync::CancellationToken;
