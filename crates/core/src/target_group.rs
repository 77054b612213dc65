//! Caller-owned registry of target groups, keyed by backing service.

use serde::{Deserialize, Serialize};

use crate::types::TargetGroupId;

/// One live target group and the Kubernetes service it backs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub id: TargetGroupId,
    pub service_name: String,
}

impl TargetGroup {
    /// Create a target group record.
    pub fn new(id: TargetGroupId, service_name: impl Into<String>) -> Self {
        Self {
            id,
            service_name: service_name.into(),
        }
    }
}

/// Ordered collection of target groups.
///
/// Owned and mutated by the load-balancer reconciliation loop; read-only
/// from the rule reconciler's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetGroups(Vec<TargetGroup>);

impl TargetGroups {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target group.
    pub fn push(&mut self, target_group: TargetGroup) {
        self.0.push(target_group);
    }

    /// Find the first target group backing the given service.
    pub fn lookup_by_service(&self, service_name: &str) -> Option<&TargetGroup> {
        self.0.iter().find(|tg| tg.service_name == service_name)
    }

    /// Number of registered target groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the registered target groups.
    pub fn iter(&self) -> impl Iterator<Item = &TargetGroup> {
        self.0.iter()
    }
}

impl From<Vec<TargetGroup>> for TargetGroups {
    fn from(groups: Vec<TargetGroup>) -> Self {
        Self(groups)
    }
}

impl FromIterator<TargetGroup> for TargetGroups {
    fn from_iter<I: IntoIterator<Item = TargetGroup>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tg(arn: &str, svc: &str) -> TargetGroup {
        TargetGroup::new(TargetGroupId::new(arn), svc)
    }

    #[test]
    fn test_lookup_by_service() {
        let tgs = TargetGroups::from(vec![tg("arn:tg/a", "svc-a"), tg("arn:tg/b", "svc-b")]);
        assert_eq!(tgs.len(), 2);
        let found = tgs.lookup_by_service("svc-b").map(|t| t.id.as_str());
        assert_eq!(found, Some("arn:tg/b"));
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let tgs = TargetGroups::from(vec![tg("arn:tg/1", "svc"), tg("arn:tg/2", "svc")]);
        let found = tgs.lookup_by_service("svc").map(|t| t.id.as_str());
        assert_eq!(found, Some("arn:tg/1"));
    }

    #[test]
    fn test_lookup_miss() {
        let tgs = TargetGroups::new();
        assert!(tgs.lookup_by_service("svc-a").is_none());
        assert!(tgs.is_empty());
    }
}
