//! Standalone cached membership predicate.
//!
//! `is_enum_member` answers one-off membership queries without the caller
//! building a container. The member universe for each distinct enum object is
//! computed once and cached process-wide, keyed by the object's identity
//! (its `Arc` allocation), never by value equality: two structurally
//! identical enum objects get independent entries.
//!
//! The cache holds only `Weak` references, so it never keeps an enum object
//! alive; dead entries are pruned whenever a new one is inserted.

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::FxIndexSet;
use crate::enum_object::{EnumObject, extract_members};
use crate::member::{EnumMember, MemberRef};
use crate::value::Value;

struct CacheEntry {
    object: Weak<EnumObject>,
    members: FxIndexSet<EnumMember>,
}

static MEMBER_CACHE: Lazy<DashMap<usize, CacheEntry, FxBuildHasher>> =
    Lazy::new(DashMap::default);

/// Returns whether `value` is a member of the enum represented by `object`.
///
/// The first query for a given enum object computes its member universe and
/// caches it; later queries on the same object reuse the cached universe.
pub fn is_enum_member(object: &Arc<EnumObject>, value: &Value) -> bool {
    let key = Arc::as_ptr(object) as usize;

    if let Some(entry) = MEMBER_CACHE.get(&key) {
        // An address can be reused after its enum object is dropped; the slot
        // only counts as a hit while the weak still upgrades to this exact
        // allocation.
        if entry
            .object
            .upgrade()
            .is_some_and(|live| Arc::ptr_eq(&live, object))
        {
            trace!(key, "enum membership cache hit");
            return set_has(&entry.members, value);
        }
    }

    let members = extract_members(object);
    trace!(key, members = members.len(), "enum membership cache fill");
    let result = set_has(&members, value);
    MEMBER_CACHE.retain(|_, entry| entry.object.strong_count() > 0);
    MEMBER_CACHE.insert(
        key,
        CacheEntry {
            object: Arc::downgrade(object),
            members,
        },
    );
    result
}

fn set_has(members: &FxIndexSet<EnumMember>, value: &Value) -> bool {
    MemberRef::from_value(value).is_some_and(|key| members.contains(&key))
}
