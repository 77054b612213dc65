//! Priority codec between the provider's string form and numeric form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Listener rule priority.
///
/// The provider renders the listener's catch-all rule as the string
/// `"default"` and every other rule as a positive decimal integer that is
/// unique per listener (uniqueness is the caller's responsibility). The
/// numeric form maps `Default` to 0, matching the provider's create API
/// which only accepts integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RulePriority {
    /// The listener's own default rule. Owned by the listener; never
    /// independently created or deleted.
    Default,
    /// A priority-ordered rule.
    Number(i64),
}

impl RulePriority {
    /// Decode a numeric priority; 0 is the default-rule sentinel.
    pub fn from_number(n: i64) -> Self {
        if n == 0 {
            Self::Default
        } else {
            Self::Number(n)
        }
    }

    /// Encode to the numeric form the provider's create API expects.
    pub fn as_number(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Number(n) => n,
        }
    }

    /// Whether this is the listener's default rule.
    pub fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for RulePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for RulePriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "default" {
            return Ok(Self::Default);
        }
        let n = s
            .parse::<i64>()
            .map_err(|e| Error::malformed_priority(s, e.to_string()))?;
        Ok(Self::from_number(n))
    }
}
