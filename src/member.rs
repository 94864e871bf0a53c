//! Validated enum member values.
//!
//! Only two kinds of runtime value can be a TypeScript enum member: finite
//! numbers and strings. [`EnumMember`] is the narrowed form of
//! [`Value`] — holding one is this crate's equivalent of having passed a type
//! guard, which is how the containers express narrowing in a language without
//! type predicates.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::Equivalent;
use serde::Serialize;

use crate::value::{Value, canonical_bits, js_number_string};

/// Type guard for values eligible to be enum members.
///
/// Returns `true` iff the value is a string or a finite number. `NaN`,
/// infinities, bigints, booleans, symbols, objects, `null`, and `undefined`
/// are never valid members.
pub fn is_valid_enum_member(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Number(n) => n.is_finite(),
        _ => false,
    }
}

/// A validated enum member value: a finite number or a string.
///
/// Members produced by introspection are always valid; the
/// [`EnumMember::number`] constructor rejects non-finite input for members
/// built by hand.
#[derive(Clone, Debug, Serialize)]
pub enum EnumMember {
    Number(f64),
    String(String),
}

impl EnumMember {
    /// Wraps a finite number. Returns `None` for `NaN` and infinities.
    pub fn number(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Narrows a runtime value down to a member value, if eligible.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.is_finite() => Some(Self::Number(*n)),
            Value::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    /// Widens the member back to a plain runtime value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(*n),
            Self::String(s) => Value::String(s.clone()),
        }
    }
}

// Hashing uses explicit variant tags so that `EnumMember` and `MemberRef`
// produce identical hashes for equivalent keys.

impl PartialEq for EnumMember {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for EnumMember {}

impl Hash for EnumMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                0u8.hash(state);
                canonical_bits(*n).hash(state);
            }
            Self::String(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&js_number_string(*n)),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// Borrowed lookup key for member-keyed containers.
///
/// Hashes and compares exactly like [`EnumMember`], letting `has` and `get`
/// probe an index from a wide [`Value`] without cloning the query string.
#[derive(Clone, Copy, Debug)]
pub enum MemberRef<'a> {
    Number(f64),
    Str(&'a str),
}

impl<'a> MemberRef<'a> {
    /// Borrowed narrowing: `None` for values that can never be members.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.is_finite() => Some(Self::Number(*n)),
            Value::String(s) => Some(Self::Str(s)),
            _ => None,
        }
    }
}

impl Hash for MemberRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                0u8.hash(state);
                canonical_bits(*n).hash(state);
            }
            Self::Str(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl Equivalent<EnumMember> for MemberRef<'_> {
    fn equivalent(&self, key: &EnumMember) -> bool {
        match (self, key) {
            (Self::Number(a), EnumMember::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Str(a), EnumMember::String(b)) => *a == b.as_str(),
            _ => false,
        }
    }
}
