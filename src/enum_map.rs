//! Immutable, order-preserving mapping from enum members to caller values.

use std::fmt;

use rustc_hash::FxBuildHasher;

use crate::FxIndexMap;
use crate::enum_object::{EnumObject, extract_members};
use crate::member::{EnumMember, MemberRef};
use crate::value::Value;

/// Construction failed because the mapping supplied no value for a member.
///
/// Exhaustiveness is a construction-time contract: a map over a universe must
/// cover every member, and a hole fails fast instead of silently storing an
/// absent value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingMappingError {
    pub member: EnumMember,
}

impl fmt::Display for MissingMappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no mapping value supplied for enum member `{}`", self.member)
    }
}

impl std::error::Error for MissingMappingError {}

/// An immutable mapping from enum member values to associated values.
///
/// Keys iterate in the order entries were supplied; built via
/// [`EnumMap::from_enum`] or [`EnumSet::to_enum_map`](crate::EnumSet::to_enum_map)
/// that is the member universe order. Lookups through [`EnumMap::get`] accept
/// any runtime [`Value`] and answer `None` for anything outside the universe,
/// never an error.
#[derive(Clone, Debug)]
pub struct EnumMap<V> {
    entries: FxIndexMap<EnumMember, V>,
}

impl<V> EnumMap<V> {
    /// Builds a map over the full member universe of `object`, in universe
    /// order. The mapping must produce a value for every member; the first
    /// `None` aborts construction.
    pub fn from_enum(
        object: &EnumObject,
        mappings: impl FnMut(&EnumMember) -> Option<V>,
    ) -> Result<Self, MissingMappingError> {
        Self::from_members(&extract_members(object), mappings)
    }

    /// Builds a map from explicit entries. Duplicate keys keep their
    /// first-insertion position and take the last value, the standard `Map`
    /// insertion semantics.
    pub fn from_entries(entries: impl IntoIterator<Item = (EnumMember, V)>) -> Self {
        let mut map = FxIndexMap::default();
        for (member, value) in entries {
            map.insert(member, value);
        }
        Self { entries: map }
    }

    pub(crate) fn from_members<'a>(
        members: impl IntoIterator<Item = &'a EnumMember>,
        mut mappings: impl FnMut(&EnumMember) -> Option<V>,
    ) -> Result<Self, MissingMappingError> {
        let members = members.into_iter();
        let mut entries =
            FxIndexMap::with_capacity_and_hasher(members.size_hint().0, FxBuildHasher);
        for member in members {
            let Some(value) = mappings(member) else {
                return Err(MissingMappingError {
                    member: member.clone(),
                });
            };
            entries.insert(member.clone(), value);
        }
        Ok(Self { entries })
    }

    /// Number of members in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership test over any runtime value. O(1).
    pub fn has(&self, value: &Value) -> bool {
        MemberRef::from_value(value).is_some_and(|key| self.entries.contains_key(&key))
    }

    /// Membership test for an already-narrowed member.
    pub fn contains(&self, member: &EnumMember) -> bool {
        self.entries.contains_key(member)
    }

    /// Narrowing lookup: a successful membership test hands back the member
    /// itself, the closest Rust rendering of a type guard.
    pub fn guard(&self, value: &Value) -> Option<EnumMember> {
        let key = MemberRef::from_value(value)?;
        self.entries.get_key_value(&key).map(|(member, _)| member.clone())
    }

    /// Wide lookup: `None` for any value outside the universe, including
    /// values that could never be members. Never an error.
    pub fn get(&self, key: &Value) -> Option<&V> {
        let key = MemberRef::from_value(key)?;
        self.entries.get(&key)
    }

    /// Guarded lookup by member. Still `Option`, since a member of one
    /// universe may be queried against a map built over another.
    pub fn get_member(&self, member: &EnumMember) -> Option<&V> {
        self.entries.get(member)
    }

    /// Member keys in map order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, EnumMember, V> {
        self.entries.keys()
    }

    /// Associated values in map order.
    pub fn values(&self) -> indexmap::map::Values<'_, EnumMember, V> {
        self.entries.values()
    }

    /// `(member, value)` pairs in map order.
    pub fn entries(&self) -> indexmap::map::Iter<'_, EnumMember, V> {
        self.entries.iter()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, EnumMember, V> {
        self.entries.iter()
    }
}

impl<'a, V> IntoIterator for &'a EnumMap<V> {
    type Item = (&'a EnumMember, &'a V);
    type IntoIter = indexmap::map::Iter<'a, EnumMember, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> fmt::Display for EnumMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object EnumMap]")
    }
}
