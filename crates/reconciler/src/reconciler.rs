//! Effectful execution of rule decisions against the provider API.

use tracing::{debug, error, info};

use albsync_core::{Error, ForwardAction, ListenerId, Result, TargetGroupId, TargetGroups};

use crate::api::{CreateRuleInput, EventSeverity, EventSink, ModifyRuleInput, RuleApi};
use crate::rule::{Rule, RuleDecision};

/// Collaborators supplied by the driver for one reconciliation pass.
///
/// All three are borrowed for the duration of the pass; the reconciler
/// owns none of them and mutates only its own `Rule`.
pub struct ReconcileContext<'a> {
    pub api: &'a dyn RuleApi,
    pub target_groups: &'a TargetGroups,
    pub events: &'a dyn EventSink,
}

impl<'a> ReconcileContext<'a> {
    /// Create a reconcile context.
    pub fn new(
        api: &'a dyn RuleApi,
        target_groups: &'a TargetGroups,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            api,
            target_groups,
            events,
        }
    }
}

impl Rule {
    /// Converge the provider's rule to the desired snapshot.
    ///
    /// Classifies the current/desired pair ([`Rule::classify`]) and issues
    /// at most one provider call. On success the rule's own `current`
    /// snapshot reflects the outcome; on failure the provider error is
    /// returned unchanged after a warning event, leaving state untouched
    /// so a later pass can retry.
    pub async fn reconcile(
        &mut self,
        ctx: &ReconcileContext<'_>,
        listener: &ListenerId,
    ) -> Result<()> {
        match self.classify() {
            RuleDecision::NoOp => {
                debug!("no rule modification required");
            }

            RuleDecision::AdoptDefault => {
                // The default rule is created with its listener; desired is
                // authoritative and no provider call is needed.
                debug!("desired rule is the listener default; adopting without provider call");
                self.current = self.desired.clone();
            }

            RuleDecision::Delete => {
                let Some(current) = self.current.clone() else {
                    return Ok(());
                };
                info!(priority = %current.priority, "starting rule deletion");
                self.delete(ctx).await?;
                ctx.events.emit(
                    EventSeverity::Normal,
                    "DELETE",
                    &format!("{} rule deleted", current.priority),
                );
                info!(
                    priority = %current.priority,
                    conditions = current.conditions.len(),
                    "completed rule deletion"
                );
            }

            RuleDecision::Create => {
                info!("starting rule creation");
                self.create(ctx, listener).await?;
                let priority = self
                    .current
                    .as_ref()
                    .map(|c| c.priority.to_string())
                    .unwrap_or_default();
                ctx.events.emit(
                    EventSeverity::Normal,
                    "CREATE",
                    &format!("{priority} rule created"),
                );
                info!(%priority, "completed rule creation");
            }

            RuleDecision::Modify => {
                info!("starting rule modification");
                self.modify(ctx).await?;
                let priority = self
                    .current
                    .as_ref()
                    .map(|c| c.priority.to_string())
                    .unwrap_or_default();
                ctx.events.emit(
                    EventSeverity::Normal,
                    "MODIFY",
                    &format!("{priority} rule modified"),
                );
                info!(%priority, "completed rule modification");
            }
        }

        Ok(())
    }

    /// Resolve the target group this rule's action forwards to.
    ///
    /// An identifier already resolved on the current snapshot wins, so a
    /// settled rule is not re-resolved on every pass. Otherwise the
    /// caller-owned collection is searched by service name; a miss is a
    /// configuration error, not a reason to proceed with an empty target.
    fn resolve_target_group(&self, target_groups: &TargetGroups) -> Result<TargetGroupId> {
        // One forward action per rule.
        if let Some(id) = self
            .current
            .as_ref()
            .and_then(|c| c.action.target_group.clone())
        {
            return Ok(id);
        }
        target_groups
            .lookup_by_service(&self.service_name)
            .map(|tg| tg.id.clone())
            .ok_or_else(|| Error::target_group_not_found(&self.service_name))
    }

    async fn create(&mut self, ctx: &ReconcileContext<'_>, listener: &ListenerId) -> Result<()> {
        let (priority, conditions) = match self.desired.as_ref() {
            Some(desired) => (desired.priority, desired.conditions.clone()),
            None => return Err(Error::invalid_state("create requires a desired snapshot")),
        };

        let target_group = match self.resolve_target_group(ctx.target_groups) {
            Ok(tg) => tg,
            Err(e) => {
                error!(
                    service = %self.service_name,
                    "failed to locate target group for service"
                );
                return Err(e);
            }
        };

        let input = CreateRuleInput {
            listener_id: listener.clone(),
            priority: priority.as_number(),
            conditions,
            action: ForwardAction::to(target_group),
        };

        match ctx.api.create_rule(input).await {
            Ok(snapshot) => {
                self.current = Some(snapshot);
                Ok(())
            }
            Err(e) => {
                ctx.events.emit(
                    EventSeverity::Warning,
                    "ERROR",
                    &format!("Error creating {priority} rule: {e}"),
                );
                error!(%priority, error = %e, "failed rule creation");
                Err(e)
            }
        }
    }

    async fn delete(&mut self, ctx: &ReconcileContext<'_>) -> Result<()> {
        let Some(current) = self.current.as_ref() else {
            debug!("delete requested with no current rule; nothing to do");
            return Ok(());
        };

        // Default rules are bound to the listener and are never deleted
        // from here. Guard kept for direct callers; classification already
        // filters this case.
        if current.is_default() {
            debug!("delete hit the listener default rule; it is owned by the listener");
            return Ok(());
        }

        let priority = current.priority;
        let rule_id = current
            .rule_id
            .clone()
            .ok_or_else(|| Error::invalid_state("current rule has no provider identifier"))?;

        match ctx.api.delete_rule(&rule_id).await {
            Ok(()) => {
                self.deleted = true;
                Ok(())
            }
            Err(e) => {
                ctx.events.emit(
                    EventSeverity::Warning,
                    "ERROR",
                    &format!("Error deleting {priority} rule: {e}"),
                );
                error!(%rule_id, error = %e, "failed rule deletion");
                Err(e)
            }
        }
    }

    async fn modify(&mut self, ctx: &ReconcileContext<'_>) -> Result<()> {
        let (rule_id, priority) = match self.current.as_ref() {
            Some(current) => match current.rule_id.clone() {
                Some(id) => (id, current.priority),
                None => {
                    return Err(Error::invalid_state(
                        "current rule has no provider identifier",
                    ))
                }
            },
            None => return Err(Error::invalid_state("modify requires a current snapshot")),
        };
        let conditions = match self.desired.as_ref() {
            Some(desired) => desired.conditions.clone(),
            None => return Err(Error::invalid_state("modify requires a desired snapshot")),
        };

        let input = ModifyRuleInput {
            rule_id,
            conditions,
        };

        match ctx.api.modify_rule(input).await {
            Ok(snapshot) => {
                self.current = Some(snapshot);
                Ok(())
            }
            Err(e) => {
                ctx.events.emit(
                    EventSeverity::Warning,
                    "ERROR",
                    &format!("Error modifying {priority} rule: {e}"),
                );
                error!(%priority, error = %e, "failed rule modification");
                Err(e)
            }
        }
    }
}
