//! The Rule entity and its pure classification logic.

use albsync_core::{RuleCondition, RulePriority, RuleSnapshot};

/// The action a reconciliation pass decides to take for one rule.
///
/// Produced by [`Rule::classify`] with no I/O, executed by
/// [`Rule::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDecision {
    /// Nothing to do; state is converged or out of this rule's hands.
    NoOp,
    /// Current exists, desired does not; remove the provider rule.
    Delete,
    /// Desired is the listener's default rule; adopt it as current
    /// without any provider call.
    AdoptDefault,
    /// Desired exists, current does not; create the provider rule.
    Create,
    /// Both exist but conditions drifted; update the provider rule.
    Modify,
}

/// A paired current/desired view of one listener rule.
///
/// `current` is what the provider reports, `desired` is what the Ingress
/// asks for; either side may be absent. Pairing an observed rule with an
/// intent rule (by priority or default-ness) is the caller's job; a
/// `Rule` handed to `reconcile` is already paired.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The rule as it exists in the provider, if it exists.
    pub current: Option<RuleSnapshot>,
    /// The rule as intent specifies it, absent if it should be deleted.
    pub desired: Option<RuleSnapshot>,
    pub(crate) service_name: String,
    pub(crate) deleted: bool,
}

impl Rule {
    /// Build a desired-only rule from Ingress intent.
    ///
    /// Priority 0 yields the listener's default rule. A host or path
    /// condition is attached only when the corresponding value is present
    /// and non-empty. The forward action's target group stays unresolved
    /// until creation time.
    pub fn intent(
        priority: i64,
        hostname: Option<&str>,
        path: Option<&str>,
        service_name: &str,
    ) -> Self {
        let mut snapshot = RuleSnapshot::forward(RulePriority::from_number(priority));

        if let Some(host) = hostname.filter(|h| !h.is_empty()) {
            snapshot.conditions.push(RuleCondition::host_header(host));
        }
        if let Some(path) = path.filter(|p| !p.is_empty()) {
            snapshot.conditions.push(RuleCondition::path_pattern(path));
        }

        Self {
            current: None,
            desired: Some(snapshot),
            service_name: service_name.to_string(),
            deleted: false,
        }
    }

    /// Build a current-only rule from a provider-observed snapshot.
    pub fn observed(snapshot: RuleSnapshot) -> Self {
        Self {
            current: Some(snapshot),
            desired: None,
            service_name: String::new(),
            deleted: false,
        }
    }

    /// The Kubernetes service this rule's action routes to.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Whether a delete call has succeeded for this rule.
    ///
    /// Observability flag for the caller; not read by the reconciler.
    pub fn deleted(&self) -> bool {
        self.deleted
    }

    /// Classify this rule into the decision a reconciliation pass must
    /// execute. Pure, total, first match wins.
    ///
    /// Ordering matters: default-ness is checked before existence and
    /// existence before diffing, so a default rule is never scheduled for
    /// creation or deletion and a nonexistent rule is never diffed.
    pub fn classify(&self) -> RuleDecision {
        match (&self.current, &self.desired) {
            // Rule should not exist.
            (None, None) => RuleDecision::NoOp,
            (Some(current), None) if current.is_default() => RuleDecision::NoOp,
            (Some(_), None) => RuleDecision::Delete,
            // Default rules are bound to the listener at creation time.
            (_, Some(desired)) if desired.is_default() => RuleDecision::AdoptDefault,
            (None, Some(_)) => RuleDecision::Create,
            (Some(_), Some(_)) if self.needs_modification() => RuleDecision::Modify,
            _ => RuleDecision::NoOp,
        }
    }

    /// Whether current has drifted from desired.
    ///
    /// True when current is absent, or when the condition lists differ in
    /// content or order. Action and target group drift is deliberately not
    /// detected: the target group is resolved only at create time, so
    /// re-pointing an existing rule's action is invisible here. Priority
    /// is likewise not compared; the caller pairs rules by priority.
    pub fn needs_modification(&self) -> bool {
        match (&self.current, &self.desired) {
            (None, _) => true,
            (Some(current), Some(desired)) => current.conditions != desired.conditions,
            (Some(_), None) => false,
        }
    }

    /// Whether the current snapshot matches a candidate on priority and
    /// conditions. Used by callers to pair an externally observed rule
    /// with this one before reconciling.
    pub fn current_equals(&self, candidate: &RuleSnapshot) -> bool {
        match &self.current {
            None => false,
            Some(current) => {
                current.priority == candidate.priority
                    && current.conditions == candidate.conditions
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use albsync_core::{ForwardAction, RuleId};

    use super::*;

    fn snapshot(priority: i64, conditions: Vec<RuleCondition>) -> RuleSnapshot {
        RuleSnapshot {
            rule_id: Some(RuleId::new("arn:rule/x")),
            priority: RulePriority::from_number(priority),
            conditions,
            action: ForwardAction::unresolved(),
        }
    }

    #[test]
    fn test_intent_builds_host_and_path_conditions() {
        let rule = Rule::intent(3, Some("example.com"), Some("/api"), "svc-a");

        let desired = rule.desired.clone();
        assert_eq!(
            desired.as_ref().map(|d| d.conditions.clone()),
            Some(vec![
                RuleCondition::host_header("example.com"),
                RuleCondition::path_pattern("/api"),
            ])
        );
        assert_eq!(
            desired.map(|d| d.priority.to_string()),
            Some("3".to_string())
        );
        assert_eq!(rule.service_name(), "svc-a");
        assert!(rule.current.is_none());
    }

    #[test]
    fn test_intent_priority_zero_is_default() {
        let rule = Rule::intent(0, None, None, "svc-a");

        assert_eq!(rule.desired.as_ref().map(RuleSnapshot::is_default), Some(true));
        assert_eq!(
            rule.desired.as_ref().map(|d| d.priority.to_string()),
            Some("default".to_string())
        );
        assert_eq!(rule.desired.map(|d| d.conditions.len()), Some(0));
    }

    #[test]
    fn test_intent_skips_empty_match_values() {
        let rule = Rule::intent(7, Some(""), None, "svc-a");
        assert_eq!(rule.desired.map(|d| d.conditions.len()), Some(0));
    }

    #[test]
    fn test_observed_carries_current_only() {
        let rule = Rule::observed(snapshot(4, vec![RuleCondition::path_pattern("/x")]));
        assert!(rule.current.is_some());
        assert!(rule.desired.is_none());
        assert!(!rule.deleted());
    }

    #[test]
    fn test_classify_both_absent_is_noop() {
        let rule = Rule {
            current: None,
            desired: None,
            service_name: String::new(),
            deleted: false,
        };
        assert_eq!(rule.classify(), RuleDecision::NoOp);
    }

    #[test]
    fn test_classify_orphaned_default_is_noop() {
        let rule = Rule::observed(snapshot(0, vec![]));
        assert_eq!(rule.classify(), RuleDecision::NoOp);
    }

    #[test]
    fn test_classify_orphaned_rule_is_delete() {
        let rule = Rule::observed(snapshot(2, vec![RuleCondition::path_pattern("/old")]));
        assert_eq!(rule.classify(), RuleDecision::Delete);
    }

    #[test]
    fn test_classify_desired_default_adopts_even_when_current_absent() {
        let rule = Rule::intent(0, None, None, "svc-a");
        assert_eq!(rule.classify(), RuleDecision::AdoptDefault);
    }

    #[test]
    fn test_classify_missing_rule_is_create() {
        let rule = Rule::intent(3, Some("example.com"), None, "svc-a");
        assert_eq!(rule.classify(), RuleDecision::Create);
    }

    #[test]
    fn test_classify_condition_drift_is_modify() {
        let mut rule = Rule::intent(3, Some("example.com"), Some("/api"), "svc-a");
        rule.current = Some(snapshot(3, vec![RuleCondition::host_header("example.com")]));
        assert_eq!(rule.classify(), RuleDecision::Modify);
    }

    #[test]
    fn test_classify_converged_is_noop() {
        let mut rule = Rule::intent(3, Some("example.com"), None, "svc-a");
        rule.current = Some(snapshot(3, vec![RuleCondition::host_header("example.com")]));
        assert_eq!(rule.classify(), RuleDecision::NoOp);
    }

    #[test]
    fn test_needs_modification_when_current_absent() {
        let rule = Rule::intent(1, Some("a.example.com"), None, "svc");
        assert!(rule.needs_modification());
    }

    #[test]
    fn test_needs_modification_on_condition_order() {
        let mut rule = Rule::intent(1, Some("example.com"), Some("/api"), "svc");
        rule.current = Some(snapshot(
            1,
            vec![
                RuleCondition::path_pattern("/api"),
                RuleCondition::host_header("example.com"),
            ],
        ));
        assert!(rule.needs_modification());
    }

    #[test]
    fn test_no_modification_when_conditions_match() {
        let mut rule = Rule::intent(1, Some("example.com"), None, "svc");
        rule.current = Some(snapshot(1, vec![RuleCondition::host_header("example.com")]));
        assert!(!rule.needs_modification());
    }

    #[test]
    fn test_current_equals_requires_current() {
        let rule = Rule::intent(1, Some("example.com"), None, "svc");
        let candidate = snapshot(1, vec![RuleCondition::host_header("example.com")]);
        assert!(!rule.current_equals(&candidate));
    }

    #[test]
    fn test_current_equals_on_priority_and_conditions() {
        let conditions = vec![RuleCondition::host_header("example.com")];
        let rule = Rule::observed(snapshot(1, conditions.clone()));

        assert!(rule.current_equals(&snapshot(1, conditions.clone())));
        assert!(!rule.current_equals(&snapshot(2, conditions)));
        assert!(!rule.current_equals(&snapshot(1, vec![RuleCondition::path_pattern("/api")])));
    }
}
