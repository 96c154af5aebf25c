//! Domain layer for Lakeguard
//!
//! Contains the types every other crate builds on:
//!
//! - [`entities`]: discovered tables ([`Entity`]), their columns ([`Field`]),
//!   the string property bag and discovery batches
//! - [`value_objects`]: validation outcomes, clustering exemption verdicts and
//!   compliance reports
//! - [`config`]: the typed compliance configuration and its load-time checks
//! - [`error`]: error types shared across the workspace
//!
//! Nothing in this crate performs I/O. Entities are produced by an external
//! discovery step and are read-only to the evaluation core; results are
//! created fresh by every evaluation run.

pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use config::ComplianceConfig;
pub use entities::{Entity, EntityBatch, Field, PropertyBag, QualifiedName};
pub use error::{ConfigError, Error, Result};
pub use value_objects::{
    CheckFailure, CheckStats, CheckStatus, ClusteringApproach, ComplianceReport,
    ComplianceSummary, Conflict, ConflictKind, EntityError, EntityResult, ExemptReason,
    ExemptionVerdict, ValidationOutcome,
};
