//! Immutable, order-preserving set of enum members.

use std::fmt;

use crate::FxIndexSet;
use crate::enum_map::{EnumMap, MissingMappingError};
use crate::enum_object::{EnumObject, extract_members};
use crate::member::{EnumMember, MemberRef};
use crate::value::Value;

/// An immutable, insertion-ordered set over an enum's member universe, or an
/// arbitrary subsequence of one.
///
/// Built once, never mutated. Membership tests are O(1) and accept any
/// runtime [`Value`]; values that could never be members simply answer
/// `false`.
#[derive(Clone, Debug)]
pub struct EnumSet {
    members: FxIndexSet<EnumMember>,
}

impl EnumSet {
    /// Wraps the member universe of `object`, in declaration order.
    pub fn from_enum(object: &EnumObject) -> Self {
        Self {
            members: extract_members(object),
        }
    }

    /// Wraps caller-supplied members verbatim: iteration order is preserved
    /// and duplicates keep their first-seen position.
    pub fn new(members: impl IntoIterator<Item = EnumMember>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership test over any runtime value. O(1).
    pub fn has(&self, value: &Value) -> bool {
        MemberRef::from_value(value).is_some_and(|key| self.members.contains(&key))
    }

    /// Membership test for an already-narrowed member.
    pub fn contains(&self, member: &EnumMember) -> bool {
        self.members.contains(member)
    }

    /// Narrowing lookup: a successful membership test hands back the member
    /// itself, the closest Rust rendering of a type guard.
    pub fn guard(&self, value: &Value) -> Option<EnumMember> {
        let key = MemberRef::from_value(value)?;
        self.members.get(&key).cloned()
    }

    /// Derives a new set from the given members, dropping any that do not
    /// belong to this set. The result iterates in the *caller-supplied*
    /// order, so a subset may deliberately redefine enumeration order.
    pub fn subset(&self, members: impl IntoIterator<Item = EnumMember>) -> EnumSet {
        Self {
            members: members
                .into_iter()
                .filter(|member| self.contains(member))
                .collect(),
        }
    }

    /// Projects each member of this set to an associated value, producing an
    /// [`EnumMap`] with keys in this set's order. The mapping must cover
    /// every member; the first `None` aborts construction.
    pub fn to_enum_map<V>(
        &self,
        mappings: impl FnMut(&EnumMember) -> Option<V>,
    ) -> Result<EnumMap<V>, MissingMappingError> {
        EnumMap::from_members(&self.members, mappings)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, EnumMember> {
        self.members.iter()
    }

    /// Alias of [`EnumSet::iter`], mirroring the map container's surface.
    pub fn keys(&self) -> indexmap::set::Iter<'_, EnumMember> {
        self.members.iter()
    }

    /// Alias of [`EnumSet::iter`]; a set's values are its members.
    pub fn values(&self) -> indexmap::set::Iter<'_, EnumMember> {
        self.members.iter()
    }

    /// `(member, member)` pairs, for interface symmetry with [`EnumMap`].
    pub fn entries(&self) -> impl Iterator<Item = (&EnumMember, &EnumMember)> {
        self.members.iter().map(|member| (member, member))
    }
}

impl<'a> IntoIterator for &'a EnumSet {
    type Item = &'a EnumMember;
    type IntoIter = indexmap::set::Iter<'a, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for EnumSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object EnumSet]")
    }
}
