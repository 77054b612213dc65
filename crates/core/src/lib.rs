//! Domain types for ALB listener rule reconciliation.
//!
//! This crate holds the pure data model shared by the reconciler:
//!
//! - **Identifiers**: newtypes over provider ARNs ([`RuleId`],
//!   [`ListenerId`], [`TargetGroupId`])
//! - **Priority codec**: [`RulePriority`] converts between the provider's
//!   string form (`"default"` or a decimal) and its numeric form
//! - **Conditions**: [`RuleCondition`] match clauses over host header and
//!   path pattern
//! - **Snapshots**: [`RuleSnapshot`] is one observed or intended rule
//! - **Target groups**: [`TargetGroups`] is the caller-owned collection
//!   rules resolve their forward action against
//!
//! Nothing here performs I/O; all provider interaction lives in
//! `albsync-reconciler`.

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod condition;
pub mod error;
pub mod priority;
pub mod snapshot;
pub mod target_group;
pub mod types;

pub use condition::{ConditionField, RuleCondition};
pub use error::{Error, Result};
pub use priority::RulePriority;
pub use snapshot::{ForwardAction, RuleSnapshot};
pub use target_group::{TargetGroup, TargetGroups};
pub use types::{ListenerId, RuleId, TargetGroupId};
