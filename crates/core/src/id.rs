//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are plain sequential integers on the wire (`"id": 3`), so the
//! newtypes serialize transparently.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product. Assigned sequentially from 1, never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a directory user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Parses a decimal path segment (`"12"`). Surrounding whitespace is ignored.
            ///
            /// Text that is not an integer is `InvalidId`; an integer that can never
            /// name a record (negative, or beyond `u64`) is `NotFound`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!(
                        "{}: not an integer: {:?}",
                        $name, s
                    )));
                }
                s.parse::<u64>().map(Self).map_err(|_| DomainError::not_found())
            }
        }
    };
}

impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(UserId, "UserId");
