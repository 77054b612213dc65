//! Error types shared across the workspace.
//!
//! All errors are explicit and typed; provider failures are carried
//! verbatim in the `reason` field and never retried here.

use thiserror::Error;

/// The standard Result type for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reconciliation error types.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A provider API call was rejected or failed in transit.
    #[error("provider {operation} call failed: {reason}")]
    Provider { operation: String, reason: String },

    /// No target group is registered for the rule's backing service.
    #[error("no target group found for service '{service}'")]
    TargetGroupNotFound { service: String },

    /// A priority string was neither `"default"` nor a base-10 integer.
    #[error("malformed rule priority '{value}': {reason}")]
    MalformedPriority { value: String, reason: String },

    /// A condition field string was not one of the recognized fields.
    #[error("unrecognized condition field '{field}'")]
    UnknownConditionField { field: String },

    /// A rule was asked to do something its current/desired pair cannot
    /// support (e.g. deleting a rule with no provider identifier).
    #[error("invalid rule state: {reason}")]
    InvalidState { reason: String },
}

impl Error {
    /// Create a provider call error.
    pub fn provider(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Provider {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a target group lookup error.
    pub fn target_group_not_found(service: impl Into<String>) -> Self {
        Self::TargetGroupNotFound {
            service: service.into(),
        }
    }

    /// Create a malformed priority error.
    pub fn malformed_priority(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPriority {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown condition field error.
    pub fn unknown_condition_field(field: impl Into<String>) -> Self {
        Self::UnknownConditionField {
            field: field.into(),
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
