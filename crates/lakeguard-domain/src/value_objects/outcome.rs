//! Result of running one check against one entity

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tri-state result of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The entity satisfies the check
    Passed,
    /// The entity violates the check
    Failed,
    /// The check could not reach a verdict (e.g. unknown table size)
    Deferred,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Deferred => write!(f, "DEFERRED"),
        }
    }
}

/// Structural problem with an entity record
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityError {
    /// Qualified name has blank parts
    #[error("entity is missing required identity part(s): {}", parts.join(", "))]
    MissingIdentity {
        /// Names of the blank parts
        parts: Vec<String>,
    },

    /// A field has a blank name
    #[error("field #{index} has an empty name")]
    UnnamedField {
        /// Position of the field in the entity
        index: usize,
    },
}

/// Immutable outcome of one check for one entity
///
/// A failed outcome always carries a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    check: String,
    status: CheckStatus,
    reason: Option<String>,
    error: Option<EntityError>,
}

impl ValidationOutcome {
    /// Passing outcome
    pub fn passed(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: CheckStatus::Passed,
            reason: None,
            error: None,
        }
    }

    /// Passing outcome with an explanatory note
    pub fn passed_with(check: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            reason: Some(note.into()),
            ..Self::passed(check)
        }
    }

    /// Failing outcome
    pub fn failed(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: CheckStatus::Failed,
            reason: Some(reason.into()),
            error: None,
        }
    }

    /// Outcome for a check that could not decide
    pub fn deferred(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: CheckStatus::Deferred,
            reason: Some(reason.into()),
            error: None,
        }
    }

    /// Failing outcome for a malformed entity
    pub fn rejected(check: impl Into<String>, error: EntityError) -> Self {
        Self {
            check: check.into(),
            status: CheckStatus::Failed,
            reason: Some(format!("malformed entity: {error}")),
            error: Some(error),
        }
    }

    /// Check identifier
    pub fn check(&self) -> &str {
        &self.check
    }

    /// Tri-state status
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Human-readable reason (always set on failure)
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Structural error when the entity was rejected
    pub fn error(&self) -> Option<&EntityError> {
        self.error.as_ref()
    }

    /// Whether the check passed
    pub fn is_passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    /// Whether the check failed
    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }

    /// Whether the check deferred
    pub fn is_deferred(&self) -> bool {
        self.status == CheckStatus::Deferred
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "[{}] {}: {}", self.status, self.check, reason),
            None => write!(f, "[{}] {}", self.status, self.check),
        }
    }
}
