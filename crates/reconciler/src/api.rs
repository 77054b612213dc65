//! Capability seams consumed during reconciliation.
//!
//! The provider's rule API and the event sink are injected as trait
//! objects so reconciliation can run against fakes in tests and against
//! the real client in the controller.

use async_trait::async_trait;
use tracing::{info, warn};

use albsync_core::{ForwardAction, ListenerId, Result, RuleCondition, RuleId, RuleSnapshot};

/// Request to create a listener rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRuleInput {
    pub listener_id: ListenerId,
    /// Numeric priority; the provider's create API does not accept the
    /// `"default"` sentinel.
    pub priority: i64,
    pub conditions: Vec<RuleCondition>,
    pub action: ForwardAction,
}

/// Request to update the conditions of an existing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyRuleInput {
    pub rule_id: RuleId,
    pub conditions: Vec<RuleCondition>,
}

/// Provider-native rule operations.
///
/// Calls are awaited inline on the reconciling task; no retries, rate
/// limiting, or batching happen behind this trait from the reconciler's
/// perspective. Implementations map provider failures to
/// [`Error::Provider`](albsync_core::Error::Provider).
#[async_trait]
pub trait RuleApi: Send + Sync {
    /// Create a rule under the given listener; returns the provider's
    /// representation of the new rule.
    async fn create_rule(&self, input: CreateRuleInput) -> Result<RuleSnapshot>;

    /// Replace the conditions of an existing rule; returns the provider's
    /// updated representation.
    async fn modify_rule(&self, input: ModifyRuleInput) -> Result<RuleSnapshot>;

    /// Delete a rule by its provider identifier.
    async fn delete_rule(&self, rule_id: &RuleId) -> Result<()>;
}

/// Severity of a reconciliation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSeverity {
    Normal,
    Warning,
}

/// Fire-and-forget sink for reconciliation events.
///
/// Emissions never influence control flow and must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, severity: EventSeverity, reason: &str, message: &str);
}

/// Event sink that forwards events to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, severity: EventSeverity, reason: &str, message: &str) {
        match severity {
            EventSeverity::Normal => info!(reason, "{message}"),
            EventSeverity::Warning => warn!(reason, "{message}"),
        }
    }
}
