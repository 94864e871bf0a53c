//! The runtime shape of a TypeScript enum definition, and introspection over
//! it.
//!
//! At runtime a TypeScript enum compiles to a plain object mapping member
//! names to member values. For every numeric member the compiler also emits a
//! reverse-lookup entry:
//!
//! ```text
//! enum E { One = 1 }   =>   { "One": 1, "1": "One" }
//! ```
//!
//! [`extract_members`] recovers the true member universe from that shape:
//! declaration order, duplicates removed, reverse-lookup artifacts and
//! non-member values filtered out.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::member::EnumMember;
use crate::value::{Value, js_number_string};
use crate::{FxIndexMap, FxIndexSet};

/// An enum definition as it exists at runtime: an insertion-ordered mapping
/// from entry name to entry value.
///
/// The library only ever reads an `EnumObject`; containers built from one
/// never mutate it. [`EnumObject::define_number`] and
/// [`EnumObject::define_string`] replicate the entries the TypeScript
/// compiler emits, reverse-lookup entry included; [`EnumObject::insert`] is
/// the raw escape hatch for arbitrary shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumObject {
    entries: FxIndexMap<String, Value>,
}

impl EnumObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a numeric member the way `enum { Name = value }` compiles:
    /// the member entry plus the reverse-lookup entry mapping the stringified
    /// value back to the member name.
    pub fn define_number(&mut self, name: &str, value: f64) -> &mut Self {
        self.entries.insert(name.to_string(), Value::Number(value));
        self.entries
            .insert(js_number_string(value), Value::String(name.to_string()));
        self
    }

    /// Defines a string member. String members get no reverse-lookup entry.
    pub fn define_string(&mut self, name: &str, value: &str) -> &mut Self {
        self.entries
            .insert(name.to_string(), Value::String(value.to_string()));
        self
    }

    /// Inserts a raw entry without any reverse-lookup bookkeeping.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Keyed lookup, the `object[name]` read introspection relies on.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of entries, reverse-lookup entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// `(name, value)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for EnumObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: IndexMap::from_iter(iter),
        }
    }
}

/// Extracts the ordered, deduplicated member universe from an enum object.
///
/// An entry value survives iff it is a valid member value (finite number or
/// string) and is not a reverse-lookup artifact. A string value `v` is an
/// artifact when `object[v]` exists and is a number: that marks `v` as the
/// name a reverse numeric key maps back to, not a declared string member.
pub fn extract_members(object: &EnumObject) -> FxIndexSet<EnumMember> {
    let mut members = FxIndexSet::with_capacity_and_hasher(object.len(), FxBuildHasher);
    for value in object.values() {
        let Some(member) = EnumMember::from_value(value) else {
            continue;
        };
        if let EnumMember::String(name) = &member
            && matches!(object.get(name), Some(Value::Number(_)))
        {
            continue;
        }
        members.insert(member);
    }
    trace!(entries = object.len(), members = members.len(), "extracted enum members");
    members
}
