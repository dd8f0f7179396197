//! Typed identifier newtypes backed by database-style integer keys.
//!
//! Identifiers are assigned by the repository on first save. Any value can be
//! represented so that callers can hand over raw input, but only positive
//! values refer to something that may exist.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw integer key.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Access the raw integer key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Whether this id can refer to a persisted record.
            #[must_use]
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Customer`](crate::customer::Customer).
    CustomerId
);

define_id!(
    /// Unique identifier for a [`Pet`](crate::pet::Pet).
    PetId
);

define_id!(
    /// Unique identifier for a [`PetType`](crate::pet::PetType).
    PetTypeId
);

define_id!(
    /// Unique identifier for a [`Vet`](crate::vet::Vet).
    VetId
);

define_id!(
    /// Unique identifier for a [`Specialty`](crate::vet::Specialty).
    SpecialtyId
);

define_id!(
    /// Unique identifier for a [`Visit`](crate::visit::Visit).
    VisitId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_valid_only_when_positive() {
        assert!(CustomerId::new(1).is_valid());
        assert!(!CustomerId::new(0).is_valid());
        assert!(!VetId::new(-3).is_valid());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PetId::new(42);
        let parsed: PetId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&VisitId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: VisitId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(), 7);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(VetId::from_str("not-a-number").is_err());
    }
}
