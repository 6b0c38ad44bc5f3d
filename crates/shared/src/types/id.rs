//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `BudgetId` where an
//! `ExpenseId` is expected. The backing store assigns integer keys, so
//! these wrappers never mint their own values.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a store-assigned key.
            #[must_use]
            pub const fn from_raw(id: i64) -> Self {
                Self(id)
            }

            /// Returns the inner key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(ExpenseId, "Unique identifier for an expense record.");
typed_id!(BudgetId, "Unique identifier for a budget.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        let expense = ExpenseId::from_raw(7);
        let budget = BudgetId::from_raw(7);
        assert_eq!(expense.into_inner(), budget.into_inner());
        // ExpenseId and BudgetId do not compare across types; this would
        // not compile: assert_eq!(expense, budget);
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = ExpenseId::from_raw(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(ExpenseId::from_str("42").unwrap(), id);
        assert!(ExpenseId::from_str("not-a-number").is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = BudgetId::from_raw(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let back: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
