//! Sequential identifiers for domain entities
//!
//! Identifiers are newtype wrappers around `u64` so that a claim id can't be
//! mixed up with an arbitrary integer. They serialize as plain JSON numbers.
//! New values come from an [`IdSequence`], which only ever moves forward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseIdError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw identifier value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix accepted when parsing
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                raw.parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseIdError(s.to_string()))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");

/// Monotonic identifier allocator
///
/// Starts at 1 and advances by exactly one per call to [`IdSequence::next`].
/// Values are never handed out twice and never decrease, even if the entity
/// that received one is later removed.
///
/// Not synchronized: callers sharing a sequence across tasks must guard it
/// together with whatever collection the ids are keyed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first value is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused value and advances the counter
    #[allow(clippy::should_implement_trait)]
    pub fn next<T: From<u64>>(&mut self) -> T {
        let current = self.next;
        self.next += 1;
        T::from(current)
    }

    /// Returns the value the next allocation will produce
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
