//! Value objects produced by evaluation
//!
//! All of these are created fresh by each evaluation run and are never
//! mutated after construction.

pub mod outcome;
pub mod report;
pub mod verdict;

pub use outcome::{CheckStatus, EntityError, ValidationOutcome};
pub use report::{
    CheckFailure, CheckStats, ComplianceReport, ComplianceSummary, EntityResult,
};
pub use verdict::{ClusteringApproach, Conflict, ConflictKind, ExemptReason, ExemptionVerdict};
