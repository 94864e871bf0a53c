mod common;

use std::collections::HashMap;

use common::{heterogeneous_enum, num, numeric_enum, str_member, string_enum};
use tsenum::{EnumMap, EnumMember, Value};

/// NumericEnum members mapped to StringEnum members, as values.
fn numeric_map() -> EnumMap<&'static str> {
    EnumMap::from_enum(&numeric_enum(), |member| match member {
        EnumMember::Number(n) if *n == 0.0 => Some("A"),
        EnumMember::Number(n) if *n == 1.0 => Some("B"),
        _ => None,
    })
    .expect("mapping is exhaustive")
}

#[test]
fn test_constructs() {
    let map = numeric_map();
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
}

#[test]
fn test_constructs_with_heterogeneous_mapping_values() {
    let values = HashMap::from([
        (num(0.0), Value::from(1)),
        (num(1.0), Value::from("")),
        (str_member("A"), Value::Object),
        (str_member("B"), Value::Null),
    ]);

    let map = EnumMap::from_enum(&heterogeneous_enum(), |member| values.get(member).cloned())
        .expect("mapping is exhaustive");
    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&Value::from("B")), Some(&Value::Null));
}

#[test]
fn test_has_returns_true_for_members() {
    let map = numeric_map();

    assert!(map.has(&Value::from(0)));
    assert!(map.has(&Value::from(1)));
}

#[test]
fn test_has_returns_false_for_non_members() {
    let map = numeric_map();

    assert!(!map.has(&Value::from(2)));
    assert!(!map.has(&Value::from("2")));
    assert!(!map.has(&Value::Object));
    assert!(!map.has(&Value::Symbol));
    assert!(!map.has(&Value::Number(f64::NAN)));
}

#[test]
fn test_get_returns_mapped_values() {
    let map = numeric_map();

    assert_eq!(map.get(&Value::from(0)), Some(&"A"));
    assert_eq!(map.get(&Value::from(1)), Some(&"B"));
}

#[test]
fn test_get_returns_none_for_absent_keys() {
    let map = numeric_map();

    assert_eq!(map.get(&Value::from(2)), None);
    assert_eq!(map.get(&Value::from("A")), None);
    assert_eq!(map.get(&Value::Symbol), None);
    assert_eq!(map.get(&Value::Null), None);
    assert_eq!(map.get(&Value::Undefined), None);
}

#[test]
fn test_guarded_get_is_present() {
    // The unguarded numeric key might be absent; after a successful guard the
    // lookup on that exact member is guaranteed to hit.
    let map = numeric_map();
    let query = Value::from(1);

    let member = map.guard(&query).expect("1 is a member");
    assert_eq!(map.get_member(&member), Some(&"B"));
}

#[test]
fn test_duplicate_entries_keep_position_take_last_value() {
    let map = EnumMap::from_entries([
        (str_member("A"), 1),
        (str_member("B"), 2),
        (str_member("A"), 3),
    ]);

    assert_eq!(map.len(), 2);
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec![str_member("A"), str_member("B")]);
    assert_eq!(map.get_member(&str_member("A")), Some(&3));
}

#[test]
fn test_iteration_order_follows_universe_order() {
    let names = HashMap::from([
        (num(0.0), "Zero"),
        (num(1.0), "One"),
        (str_member("A"), "Alpha"),
        (str_member("B"), "Bravo"),
    ]);
    let map = EnumMap::from_enum(&heterogeneous_enum(), |member| names.get(member).copied())
        .expect("mapping is exhaustive");

    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec![num(0.0), num(1.0), str_member("A"), str_member("B")]);

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, vec!["Zero", "One", "Alpha", "Bravo"]);

    let entries: Vec<_> = map.entries().collect();
    let pairs: Vec<_> = (&map).into_iter().collect();
    assert_eq!(entries, pairs);
}

#[test]
fn test_missing_mapping_fails_construction() {
    let result = EnumMap::from_enum(&string_enum(), |member| match member {
        EnumMember::String(s) if s == "A" => Some(0),
        _ => None,
    });

    let err = result.expect_err("mapping omits 'B'");
    assert_eq!(err.member, str_member("B"));
    assert_eq!(
        err.to_string(),
        "no mapping value supplied for enum member `B`"
    );
}

#[test]
fn test_has_and_get_work_as_first_class_closures() {
    let map = numeric_map();
    let values = [
        Value::from(1),
        Value::from("Foo"),
        Value::Symbol,
        Value::from(0),
    ];

    let mapped: Vec<_> = values
        .iter()
        .filter_map(|value| map.guard(value))
        .filter_map(|member| map.get_member(&member).copied())
        .collect();
    assert_eq!(mapped, vec!["B", "A"]);
}

#[test]
fn test_display_label() {
    let map = numeric_map();
    assert_eq!(map.to_string(), "[object EnumMap]");
}
