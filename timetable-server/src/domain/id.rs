//! Identifier types for stops, routes and bus plans.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an identifier from zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: must be a positive integer")]
pub struct InvalidId {
    kind: &'static str,
}

macro_rules! impl_identifier {
    ($name:ident, $kind:literal) => {
        #[doc = concat!("A positive integer identifier for a ", $kind, ".")]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(NonZeroU32);

        impl $name {
            /// The identifier `1`.
            pub const FIRST: Self = Self(NonZeroU32::MIN);

            /// Create an identifier, rejecting zero.
            pub fn new(id: u32) -> Result<Self, InvalidId> {
                NonZeroU32::new(id)
                    .map(Self)
                    .ok_or(InvalidId { kind: $kind })
            }

            /// Returns the raw identifier value.
            pub fn get(self) -> u32 {
                self.0.get()
            }
        }

        impl TryFrom<u32> for $name {
            type Error = InvalidId;

            fn try_from(id: u32) -> Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.get()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_identifier!(StopId, "stop");
impl_identifier!(RouteId, "route");
impl_identifier!(PlanId, "plan");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(StopId::new(0).is_err());
        assert!(RouteId::new(0).is_err());
        assert!(PlanId::new(0).is_err());
    }

    #[test]
    fn error_names_the_kind() {
        let err = RouteId::new(0).unwrap_err();
        assert_eq!(err.to_string(), "invalid route id: must be a positive integer");
    }

    #[test]
    fn ordering_follows_value() {
        let a = StopId::new(2).unwrap();
        let b = StopId::new(10).unwrap();
        assert!(a < b);

        let mut ids = vec![b, a, StopId::new(1).unwrap()];
        ids.sort();
        let raw: Vec<u32> = ids.into_iter().map(StopId::get).collect();
        assert_eq!(raw, vec![1, 2, 10]);
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new(7).unwrap();
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:?}", id), "StopId(7)");
    }

    #[test]
    fn serde_as_plain_integer() {
        let id = RouteId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let parsed: RouteId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<RouteId>("0").is_err());
    }
}
