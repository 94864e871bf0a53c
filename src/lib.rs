//! Typed set and map containers over TypeScript-style enum runtime objects.
//!
//! At runtime a TypeScript enum is an ordinary object mapping member names to
//! member values, plus a reverse-lookup entry (`"3" -> "X"`) for every
//! numeric member. This crate treats such an object as a closed, ordered,
//! typed universe of member values:
//!
//! - [`EnumObject`] — the runtime shape of an enum definition
//! - [`extract_members`] — the ordered, deduplicated member universe, with
//!   reverse-lookup artifacts filtered out
//! - [`EnumSet`] — immutable, order-preserving membership over a universe,
//!   with narrowing guards and caller-ordered subsetting
//! - [`EnumMap`] — immutable, order-preserving mapping from members to
//!   caller values, with fail-fast exhaustiveness at construction
//! - [`is_enum_member`] — one-off membership checks backed by a per-object
//!   weak cache

// The runtime value model (SameValueZero semantics)
pub mod value;
pub use value::{Value, js_number_string};

// Validated member values and the validity predicate
pub mod member;
pub use member::{EnumMember, MemberRef, is_valid_enum_member};

// Enum runtime shape + introspection
pub mod enum_object;
pub use enum_object::{EnumObject, extract_members};

// Containers
pub mod enum_map;
pub mod enum_set;
pub use enum_map::{EnumMap, MissingMappingError};
pub use enum_set::EnumSet;

// Cached standalone predicate
pub mod membership;
pub use membership::is_enum_member;

/// Insertion-ordered map with the crate-standard hasher.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set with the crate-standard hasher.
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
