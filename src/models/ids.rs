//! Strongly-typed ID wrappers for all entity types
//!
//! Upstream records identify entities with integers or strings; both are kept
//! in their textual form. Using newtype wrappers prevents accidentally
//! matching a transaction's budget reference against a goal ID.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Any JSON scalar an upstream ID may arrive as
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Int(n) => n.to_string(),
            RawId::Float(f) if f.fract() == 0.0 && f.is_finite() => (f as i64).to_string(),
            RawId::Float(f) => f.to_string(),
        }
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID for a locally created record
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Fallback ID for an upstream record that carries none,
            /// derived from its index in the input list
            pub fn from_position(position: usize) -> Self {
                Self(format!("idx-{}", position))
            }

            /// Wrap an upstream identifier
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Name of the entity this ID refers to
            pub const fn entity() -> &'static str {
                $entity
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

define_id!(TransactionId, "Transaction");
define_id!(BudgetId, "Budget");
define_id!(GoalId, "Savings goal");
define_id!(ContributionId, "Contribution");
