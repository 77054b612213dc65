//! Match conditions attached to a listener rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The request attribute a condition matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionField {
    /// Match on the HTTP `Host` header.
    HostHeader,
    /// Match on the request path.
    PathPattern,
}

impl ConditionField {
    /// The provider's wire string for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HostHeader => "host-header",
            Self::PathPattern => "path-pattern",
        }
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host-header" => Ok(Self::HostHeader),
            "path-pattern" => Ok(Self::PathPattern),
            other => Err(Error::unknown_condition_field(other)),
        }
    }
}

/// One `{field, values}` match clause on a rule.
///
/// Conditions compare structurally and order-sensitively: two rules with
/// the same clauses in a different order are treated as different.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCondition {
    pub field: ConditionField,
    pub values: Vec<String>,
}

impl RuleCondition {
    /// Create a condition over an explicit value list.
    pub fn new(field: ConditionField, values: Vec<String>) -> Self {
        Self { field, values }
    }

    /// Single-value host header condition.
    pub fn host_header(value: impl Into<String>) -> Self {
        Self::new(ConditionField::HostHeader, vec![value.into()])
    }

    /// Single-value path pattern condition.
    pub fn path_pattern(value: impl Into<String>) -> Self {
        Self::new(ConditionField::PathPattern, vec![value.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(ConditionField::HostHeader.as_str(), "host-header");
        assert_eq!(ConditionField::PathPattern.as_str(), "path-pattern");
    }

    #[test]
    fn test_field_parse_round_trip() {
        let parsed: Result<ConditionField, _> = "host-header".parse();
        assert_eq!(parsed.ok(), Some(ConditionField::HostHeader));
        let parsed: Result<ConditionField, _> = "path-pattern".parse();
        assert_eq!(parsed.ok(), Some(ConditionField::PathPattern));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed: Result<ConditionField, _> = "http-header".parse();
        assert!(matches!(
            parsed,
            Err(Error::UnknownConditionField { field }) if field == "http-header"
        ));
    }

    #[test]
    fn test_conditions_compare_order_sensitively() {
        let a = vec![
            RuleCondition::host_header("example.com"),
            RuleCondition::path_pattern("/api"),
        ];
        let b = vec![
            RuleCondition::path_pattern("/api"),
            RuleCondition::host_header("example.com"),
        ];
        assert_ne!(a, b);
    }
}
