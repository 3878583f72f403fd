use arraytools::{Collection, Map, MapOptions, Value};
use serde_json::json;

fn fixture() -> Map {
    Map::from_entries([("foo1", "bar1"), ("foo2", "bar2")])
}

fn locked(entries: &[(&str, &str)]) -> Map {
    Map::with_options(
        entries.iter().copied(),
        MapOptions {
            keys_locked: true,
            recursive: false,
        },
    )
}

#[test]
fn test_construct_get() {
    let map = fixture();
    assert_eq!(map.get("foo1").unwrap(), "bar1");
    assert_eq!(map.get("foo4"), None);
}

#[test]
fn test_set_get() {
    let mut map = fixture();
    map.set("foo3", "bar3").unwrap();
    assert_eq!(map.get("foo3").unwrap(), "bar3");
}

#[test]
fn test_get_or_default() {
    let map = fixture();
    let default = Value::from("bar4");
    assert_eq!(map.get_or("foo4", &default), "bar4");
    assert_eq!(map.get_or("foo1", &default), "bar1");
}

#[test]
fn test_has_and_has_keys() {
    let map = fixture();
    assert!(map.has("foo1"));
    assert!(!map.has("foo4"));
    assert!(map.has_keys(["foo1", "foo2"]));
    assert!(!map.has_keys(["foo1", "foo4"]));
}

#[test]
fn test_remove_deletes_unlocked_keys() {
    let mut map = fixture();
    map.remove("foo1");
    assert!(!map.has("foo1"));
    assert_eq!(map.get("foo1"), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_keys_in_insertion_order() {
    assert_eq!(fixture().keys(), ["foo1", "foo2"]);
}

#[test]
fn test_merge_overlays_and_appends() {
    let mut map = fixture();
    map.merge([("foo2", "updated"), ("foo5", "bar5")]);

    assert_eq!(map.get("foo2").unwrap(), "updated");
    assert_eq!(map.get("foo5").unwrap(), "bar5");
    // untouched keys keep their order, new keys append
    assert_eq!(map.keys(), ["foo1", "foo2", "foo5"]);
}

#[test]
fn test_merge_with_another_map() {
    let mut map = fixture();
    map.merge(Map::from_entries([("foo5", "bar5")]));
    assert_eq!(map.get("foo5").unwrap(), "bar5");
}

#[test]
fn test_copy_is_independent() {
    let map = fixture();
    let mut copy = map.copy();
    copy.set("foo5", "bar5").unwrap();
    assert_eq!(copy.get("foo5").unwrap(), "bar5");
    assert_eq!(map.get("foo5"), None);
}

#[test]
fn test_to_json_preserves_insertion_order() {
    assert_eq!(
        fixture().to_json().unwrap(),
        "{\"foo1\":\"bar1\",\"foo2\":\"bar2\"}"
    );

    let map = Map::from_entries([("a", 1), ("b", 2)]);
    assert_eq!(map.to_json().unwrap(), "{\"a\":1,\"b\":2}");
}

#[test]
fn test_except_and_only() {
    let map = fixture();
    assert_eq!(map.except(&["foo1"]).keys(), ["foo2"]);
    assert_eq!(map.only(&["foo1"]).keys(), ["foo1"]);
    // non-mutating
    assert_eq!(map.len(), 2);
}

#[test]
fn test_key_partition_round_trip() {
    let map = Map::from_entries([("a", 1), ("b", 2), ("c", 3)]);
    let keys = ["b"];

    let mut rebuilt = map.except(&keys);
    rebuilt.merge(map.only(&keys));

    assert_eq!(rebuilt.len(), map.len());
    for key in map.keys() {
        assert_eq!(rebuilt.get(&key), map.get(&key));
    }
}

#[test]
fn test_clear() {
    let mut map = fixture();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn test_locked_map_rejects_unknown_keys() {
    let mut map = locked(&[("foo6", "bar6")]);

    let err = map.set("foo7", "bar7").unwrap_err();
    assert!(err.is_unknown_key());

    // the failure is recoverable, known keys still writable
    map.set("foo6", "other").unwrap();
    assert_eq!(map.get("foo6").unwrap(), "other");
}

#[test]
fn test_locked_map_remove_nulls_the_value() {
    let mut map = locked(&[("foo6", "bar6")]);
    map.remove("foo6");
    assert!(map.has("foo6"));
    assert_eq!(map.get("foo6").unwrap(), &Value::Null);

    map.set("foo6", "bar6").unwrap();
    assert_eq!(map.get("foo6").unwrap(), "bar6");
}

#[test]
fn test_locked_map_clear_keeps_keys_with_null_values() {
    let mut map = locked(&[("foo6", "bar6"), ("foo7", "bar7")]);
    map.clear();
    assert_eq!(map.len(), 2);
    assert_eq!(map.keys(), ["foo6", "foo7"]);
    assert_eq!(map.get("foo6").unwrap(), &Value::Null);
    assert_eq!(map.get("foo7").unwrap(), &Value::Null);
}

#[test]
fn test_count_is_empty() {
    let mut map = fixture();
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[test]
fn test_each_visits_in_insertion_order() {
    let mut seen = Vec::new();
    fixture().each(|key, value| {
        seen.push((key.to_string(), value.clone()));
        true
    });
    assert_eq!(
        seen,
        [
            ("foo1".to_string(), Value::from("bar1")),
            ("foo2".to_string(), Value::from("bar2")),
        ]
    );
}

#[test]
fn test_each_stops_on_false() {
    let mut seen = 0;
    fixture().each(|_, _| {
        seen += 1;
        false
    });
    assert_eq!(seen, 1);
}

#[test]
fn test_map_replaces_values_in_place() {
    let mut map = fixture();
    map.map(|_, value| Value::Text(format!("mapped_{}", value.as_text().unwrap())));
    assert_eq!(map.get("foo1").unwrap(), "mapped_bar1");
    assert_eq!(map.get("foo2").unwrap(), "mapped_bar2");
}

#[test]
fn test_recursive_option_classifies_nested_shapes() {
    let map = Map::with_options(
        [
            ("persons", Value::from_plain(json!(["Luke", "Lea"]))),
            ("other", Value::from_plain(json!({"foo": "bar", "foo2": "bar2"}))),
            ("scalar", Value::from(42)),
        ],
        MapOptions {
            recursive: true,
            ..Default::default()
        },
    );

    let persons = map.get("persons").unwrap().as_collection().unwrap();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons.get(0).unwrap(), "Luke");

    let other = map.get("other").unwrap().as_map().unwrap();
    assert_eq!(other.get("foo").unwrap(), "bar");

    assert_eq!(map.get("scalar").unwrap(), &42);
}

#[test]
fn test_recursive_option_descends_unbounded() {
    let map = Map::with_options(
        [(
            "teams",
            Value::from_plain(json!([{"name": "red", "members": ["a", "b"]}])),
        )],
        MapOptions {
            recursive: true,
            ..Default::default()
        },
    );

    let teams = map.get("teams").unwrap().as_collection().unwrap();
    let red = teams.get(0).unwrap().as_map().unwrap();
    let members = red.get("members").unwrap().as_collection().unwrap();
    assert_eq!(members.get(1).unwrap(), "b");
}

#[test]
fn test_non_recursive_map_keeps_plain_values() {
    let map = Map::from_entries([("persons", Value::from_plain(json!(["Luke", "Lea"])))]);
    assert!(matches!(map.get("persons").unwrap(), Value::Array(_)));
}

#[test]
fn test_get_type() {
    let mut map = fixture();
    map.set("count", 3).unwrap();
    map.set("ratio", 1.5).unwrap();
    map.set("nested", Value::from_plain(json!({"a": 1}))).unwrap();

    assert_eq!(map.get_type("foo1"), "string");
    assert_eq!(map.get_type("count"), "integer");
    assert_eq!(map.get_type("ratio"), "float");
    assert_eq!(map.get_type("nested"), "object");
    assert_eq!(map.get_type("missing"), "null");
}

#[test]
fn test_serialization_recurses_into_wrapped_containers() {
    let mut map = Map::new();
    map.set("list", Collection::from_values([1, 2])).unwrap();
    map.set("nested", Map::from_entries([("a", 1)])).unwrap();

    assert_eq!(
        map.to_json().unwrap(),
        "{\"list\":[1,2],\"nested\":{\"a\":1}}"
    );
}

#[test]
fn test_byte_stream_round_trips_the_property_mapping() {
    let mut map = Map::new();
    map.set("text", "hello").unwrap();
    map.set("nested", Collection::from_values([1, 2])).unwrap();

    let decoded = Map::from_bytes(&map.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.to_array(), map.to_array());
}
