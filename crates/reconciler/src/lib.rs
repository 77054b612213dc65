//! Reconciliation of ALB listener rules against Ingress-derived intent.
//!
//! This crate implements the per-rule half of a Kubernetes-style
//! reconciliation loop:
//!
//! - **Desired**: the rule an Ingress resource says should exist
//! - **Current**: the rule the provider says does exist
//! - **Classify**: a pure five-way decision over the pair
//! - **Dispatch**: the minimal provider call to converge
//!
//! # Key Concepts
//!
//! ## Decisions
//!
//! [`Rule::classify`] maps a current/desired pair to one of:
//!
//! - `NoOp` - already converged, or nothing to act on
//! - `Delete` - desired is gone and current is not the listener default
//! - `AdoptDefault` - desired is the default rule; owned by the listener,
//!   so current just adopts it without a provider call
//! - `Create` - desired exists and current does not
//! - `Modify` - both exist but their conditions drifted
//!
//! [`Rule::reconcile`] executes the decision against an injected
//! [`RuleApi`], mutating the rule's own current snapshot in place.
//!
//! ## Seams
//!
//! The provider client, the target group collection, and the event sink
//! are all passed in through [`ReconcileContext`]; nothing here touches
//! an ambient singleton, so every path is testable with fakes.
//!
//! # Example
//!
//! ```ignore
//! use albsync_core::{ListenerId, TargetGroups};
//! use albsync_reconciler::{LogEventSink, ReconcileContext, Rule};
//!
//! async fn sync(api: &dyn albsync_reconciler::RuleApi, tgs: &TargetGroups) {
//!     let mut rule = Rule::intent(3, Some("example.com"), Some("/api"), "svc-a");
//!     let events = LogEventSink;
//!     let ctx = ReconcileContext::new(api, tgs, &events);
//!     let listener = ListenerId::new("arn:aws:elasticloadbalancing:listener/x");
//!     if let Err(e) = rule.reconcile(&ctx, &listener).await {
//!         eprintln!("rule not converged: {e}");
//!     }
//! }
//! ```

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod api;
pub mod reconciler;
pub mod rule;

// Re-export main types
pub use albsync_core::{Error, Result};
pub use api::{
    CreateRuleInput, EventSeverity, EventSink, LogEventSink, ModifyRuleInput, RuleApi,
};
pub use reconciler::ReconcileContext;
pub use rule::{Rule, RuleDecision};
