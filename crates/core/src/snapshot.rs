//! A point-in-time view of one listener rule.

use serde::{Deserialize, Serialize};

use crate::condition::RuleCondition;
use crate::priority::RulePriority;
use crate::types::{RuleId, TargetGroupId};

/// The single forward action of a rule.
///
/// The target group stays unresolved on intent snapshots until creation
/// time, when it is looked up from the caller's target group collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardAction {
    pub target_group: Option<TargetGroupId>,
}

impl ForwardAction {
    /// An action whose target group is not yet known.
    pub fn unresolved() -> Self {
        Self { target_group: None }
    }

    /// An action forwarding to a known target group.
    pub fn to(target_group: TargetGroupId) -> Self {
        Self {
            target_group: Some(target_group),
        }
    }

    /// Whether the target group has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.target_group.is_some()
    }
}

/// One observed or intended listener rule.
///
/// The same type serves both sides of a reconciliation pair: snapshots
/// built from provider data carry a `rule_id`, snapshots built from
/// Ingress intent do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    /// Provider identifier; absent until the rule exists.
    pub rule_id: Option<RuleId>,
    pub priority: RulePriority,
    /// Ordered match clauses; order-sensitive on comparison.
    pub conditions: Vec<RuleCondition>,
    pub action: ForwardAction,
}

impl RuleSnapshot {
    /// A fresh forward rule with no conditions and an unresolved target.
    pub fn forward(priority: RulePriority) -> Self {
        Self {
            rule_id: None,
            priority,
            conditions: Vec::new(),
            action: ForwardAction::unresolved(),
        }
    }

    /// Whether this is the listener's default (catch-all) rule.
    pub fn is_default(&self) -> bool {
        self.priority.is_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_starts_unresolved() {
        let snapshot = RuleSnapshot::forward(RulePriority::from_number(5));
        assert!(snapshot.rule_id.is_none());
        assert!(!snapshot.action.is_resolved());
        assert!(snapshot.conditions.is_empty());
    }

    #[test]
    fn test_default_ness_follows_priority() {
        assert!(RuleSnapshot::forward(RulePriority::Default).is_default());
        assert!(!RuleSnapshot::forward(RulePriority::from_number(1)).is_default());
    }
}
