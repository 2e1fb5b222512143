//! Tests for the Document API surface: reads, writes, presence checks,
//! removal, and projections.

use burrow::{Document, Value};

use crate::helpers::sample;

// ===== READS =====

#[test]
fn test_get_resolves_nested_paths() {
    let doc = sample();

    assert_eq!(doc.get("foo"), Some(&"bar".into()));
    assert_eq!(doc.get("baz.quuz.quux"), Some(&"fred".into()));
    assert_eq!(doc.get("baz.quz.0"), Some(&"qux".into()));
    assert_eq!(doc.get("missing"), None);
    assert_eq!(doc.get("baz.missing"), None);
}

#[test]
fn test_get_distinguishes_declared_null_from_missing() {
    let doc = sample();

    assert_eq!(doc.get("null"), Some(&Value::Null));
    assert_eq!(doc.get("absent"), None);
    assert!(doc.contains_key("null"));
    assert!(doc.missing("absent"));
}

#[test]
fn test_get_or_defaults_only_when_absent() {
    let doc = sample();

    assert_eq!(doc.get_or("foo", "fallback"), "bar");
    assert_eq!(doc.get_or("absent", "fallback"), "fallback");
    // A declared null resolves, so the default is not used
    assert_eq!(doc.get_or("null", "fallback"), Value::Null);
}

#[test]
fn test_get_or_else_is_lazy() {
    let doc = sample();
    let mut calls = 0;

    let found = doc.get_or_else("foo", || {
        calls += 1;
        "fallback"
    });
    assert_eq!(found, "bar");
    assert_eq!(calls, 0);

    let declared_null = doc.get_or_else("null", || {
        calls += 1;
        "fallback"
    });
    assert_eq!(declared_null, Value::Null);
    assert_eq!(calls, 0);

    let missing = doc.get_or_else("absent", || {
        calls += 1;
        "fallback"
    });
    assert_eq!(missing, "fallback");
    assert_eq!(calls, 1);
}

#[test]
fn test_get_as_typed_extraction() {
    let mut doc = sample();
    doc.set("count", 42).set("ratio", 2.5).set("active", true);

    assert_eq!(doc.get_as::<String>("foo"), Some("bar".to_string()));
    assert_eq!(doc.get_as::<&str>("foo"), Some("bar"));
    assert_eq!(doc.get_as::<i64>("count"), Some(42));
    assert_eq!(doc.get_as::<f64>("ratio"), Some(2.5));
    assert_eq!(doc.get_as::<bool>("active"), Some(true));

    // Wrong type and unresolved path both give None
    assert_eq!(doc.get_as::<i64>("foo"), None);
    assert_eq!(doc.get_as::<String>("absent"), None);
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut doc = sample();

    if let Some(value) = doc.get_mut("foo") {
        *value = Value::from("edited");
    }
    assert_eq!(doc["foo"], "edited");

    assert!(doc.get_mut("absent").is_none());
}

#[test]
fn test_get_many_keyed_by_requested_path() {
    let doc = sample();

    let values = doc.get_many(["foo", "baz.quuz.quux", "absent"]);

    let keys: Vec<&str> = values.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["foo", "baz.quuz.quux", "absent"]);
    assert_eq!(values["foo"], "bar");
    assert_eq!(values["baz.quuz.quux"], "fred");
    assert_eq!(values["absent"], Value::Null);
}

#[test]
fn test_get_many_or_shares_one_default() {
    let doc = sample();

    let values = doc.get_many_or(["foo", "a", "b"], 7);

    assert_eq!(values["foo"], "bar");
    assert_eq!(values["a"], 7);
    assert_eq!(values["b"], 7);
}

#[test]
fn test_get_many_with_computes_default_per_miss() {
    let doc = sample();
    let mut calls = 0;

    let values = doc.get_many_with(["foo", "a", "null", "b"], || {
        calls += 1;
        calls
    });

    assert_eq!(calls, 2); // only "a" and "b" miss
    assert_eq!(values["foo"], "bar");
    assert_eq!(values["null"], Value::Null);
    assert_eq!(values["a"], 1);
    assert_eq!(values["b"], 2);
}

// ===== WRITES =====

#[test]
fn test_set_creates_nested_structure() {
    let mut doc = Document::new();

    doc.set("a.b.c", 1);

    assert_eq!(doc.get("a.b.c"), Some(&1.into()));
    assert!(doc.get("a").and_then(Value::as_doc).is_some());
    assert!(doc.get("a.b").and_then(Value::as_doc).is_some());
}

#[test]
fn test_set_overwrites_existing_values() {
    let mut doc = sample();

    doc.set("foo", "updated");
    doc.set("baz.quuz.quux", 9);

    assert_eq!(doc.get("foo"), Some(&"updated".into()));
    assert_eq!(doc.get("baz.quuz.quux"), Some(&9.into()));
}

#[test]
fn test_set_null_declares_the_key() {
    let mut doc = Document::new();

    doc.set("gone", Value::Null);

    assert!(doc.contains_key("gone"));
    assert!(doc.is_not_set("gone"));
}

#[test]
fn test_set_many_applies_in_iteration_order() {
    let mut doc = Document::new();

    doc.set_many([("a", 1), ("b.c", 2), ("a", 3)]);

    // Later entries win on overlap
    assert_eq!(doc.get("a"), Some(&3.into()));
    assert_eq!(doc.get("b.c"), Some(&2.into()));
    let keys: Vec<&str> = doc.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_fill_respects_existing_values() {
    let mut doc = sample();

    doc.fill("foo", "ignored");
    doc.fill("fresh", "kept");
    doc.fill("null", "replaces declared null");

    assert_eq!(doc.get("foo"), Some(&"bar".into()));
    assert_eq!(doc.get("fresh"), Some(&"kept".into()));
    assert_eq!(doc.get("null"), Some(&"replaces declared null".into()));
}

#[test]
fn test_fill_many() {
    let mut doc = Document::new();
    doc.set("a", 1);

    doc.fill_many([("a", 10), ("b", 20)]);

    assert_eq!(doc.get("a"), Some(&1.into()));
    assert_eq!(doc.get("b"), Some(&20.into()));
}

#[test]
fn test_with_builder_chains() {
    let doc = Document::new()
        .with("name", "svc")
        .with("limits.requests", 100)
        .with("limits.burst", 20);

    assert_eq!(doc.get("name"), Some(&"svc".into()));
    assert_eq!(doc.get("limits.requests"), Some(&100.into()));
    assert_eq!(doc.get("limits.burst"), Some(&20.into()));
}

#[test]
fn test_mutators_chain() {
    let mut doc = Document::new();

    doc.set("a", 1).fill("b", 2).forget("a").set("c", 3);

    assert!(doc.missing("a"));
    assert_eq!(doc.get("b"), Some(&2.into()));
    assert_eq!(doc.get("c"), Some(&3.into()));
}

// ===== PRESENCE =====

#[test]
fn test_has_requires_every_path() {
    let doc = sample();

    assert!(doc.has(["foo", "baz.quuz.quux", "null"]));
    assert!(!doc.has(["foo", "absent"]));
    // Empty input is false by definition
    assert!(!doc.has(std::iter::empty::<&str>()));
}

#[test]
fn test_has_any_requires_one_path() {
    let doc = sample();

    assert!(doc.has_any(["absent", "foo"]));
    assert!(!doc.has_any(["absent", "also.absent"]));
    // Empty input asks whether the document itself has entries
    assert!(doc.has_any(std::iter::empty::<&str>()));
    assert!(!Document::new().has_any(std::iter::empty::<&str>()));
}

#[test]
fn test_is_set_requires_non_null() {
    let doc = sample();

    assert!(doc.is_set("foo"));
    assert!(!doc.is_set("null"));
    assert!(!doc.is_set("absent"));
    assert!(doc.is_not_set("null"));
    assert!(doc.is_not_set("absent"));
}

#[test]
fn test_missing_is_the_negation_of_contains_key() {
    let doc = sample();

    assert!(!doc.missing("null"));
    assert!(doc.missing("absent"));
    assert!(!doc.missing("baz.quz.0"));
}

// ===== REMOVAL =====

#[test]
fn test_forget_removes_nested_entries() {
    let mut doc = sample();

    doc.forget("baz.quuz.quux");

    assert!(doc.missing("baz.quuz.quux"));
    // The emptied parent mapping stays in place
    let quuz = doc.get("baz.quuz").and_then(Value::as_doc);
    assert_eq!(quuz.map(Document::len), Some(0));
}

#[test]
fn test_forget_is_idempotent() {
    let mut doc = sample();

    doc.forget("foo").forget("foo").forget("never.there");

    assert!(doc.missing("foo"));
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_remove_returns_the_value() {
    let mut doc = sample();

    let removed = doc.remove("baz.quuz.quux");
    assert_eq!(removed, Some("fred".into()));

    let missing = doc.remove("baz.quuz.quux");
    assert_eq!(missing, None);
}

#[test]
fn test_clear_empties_the_document() {
    let mut doc = sample();

    doc.clear();

    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
    assert!(!doc.is_not_empty());
}

// ===== COLLECTION SURFACE =====

#[test]
fn test_keys_values_iter_in_insertion_order() {
    let doc = sample();

    let keys: Vec<&str> = doc.keys().collect();
    assert_eq!(keys, vec!["foo", "baz", "corge", "null"]);

    assert_eq!(doc.values().count(), 4);

    let pairs: Vec<(&str, &Value)> = doc.iter().collect();
    assert_eq!(pairs[0].0, "foo");
    assert_eq!(pairs[3], ("null", &Value::Null));
}

#[test]
fn test_documents_compare_by_content() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);

    let mut c = sample();
    c.set("foo", "other");
    assert_ne!(a, c);
}

#[test]
fn test_replace_swaps_all_entries() {
    let mut doc = sample();

    doc.replace([("x", 1), ("dotted.key", 2)]);

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("x"), Some(&1.into()));
    // Replace takes literal keys, so the dot is part of the key
    assert!(doc.as_map().contains_key("dotted.key"));
    assert_eq!(doc.get("dotted.key"), None);
}

#[test]
fn test_extend_appends_entries() {
    let mut doc = Document::new();
    doc.set("a", 1);

    doc.extend([("b".to_string(), Value::from(2))]);

    assert_eq!(doc.get("b"), Some(&2.into()));
}

#[test]
fn test_as_map_mut_takes_literal_keys() {
    let mut doc = Document::new();

    doc.as_map_mut().insert("a.b".to_string(), Value::from(1));

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("a.b"), None);
}

#[test]
fn test_from_iterator_takes_literal_keys() {
    let doc: Document = [("plain", Value::from(1)), ("dotted.key", Value::from(2))]
        .into_iter()
        .collect();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("plain"), Some(&1.into()));
    assert_eq!(doc.get("dotted.key"), None);
    assert!(doc.as_map().contains_key("dotted.key"));
}

// ===== PROJECTIONS =====

#[test]
fn test_only_keeps_requested_top_level_keys() {
    let doc = sample();

    let picked = doc.only(["foo", "corge", "absent"]);

    let keys: Vec<&str> = picked.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["foo", "corge"]);
    assert_eq!(picked["foo"], "bar");

    // Dotted strings never match a literal top-level key
    assert!(doc.only(["baz.quuz"]).is_empty());
}

#[test]
fn test_except_drops_requested_top_level_keys() {
    let doc = sample();

    let rest = doc.except(["foo", "corge"]);

    let keys: Vec<&str> = rest.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["baz", "null"]);
}

#[test]
fn test_only_and_except_partition_the_document() {
    let doc = sample();
    let keys = ["foo", "null"];

    let mut rebuilt: Vec<String> = doc.only(keys).into_keys().collect();
    rebuilt.extend(doc.except(keys).into_keys());
    rebuilt.sort();

    let mut original: Vec<String> = doc.keys().map(str::to_string).collect();
    original.sort();
    assert_eq!(rebuilt, original);
}

#[test]
fn test_segments_projects_paths_with_structure() {
    let doc = sample();

    let picked = doc.segments(["baz.quuz.quux", "foo", "absent"]);

    assert_eq!(picked.get("baz.quuz.quux"), Some(&"fred".into()));
    assert_eq!(picked.get("foo"), Some(&"bar".into()));
    assert_eq!(picked.get("absent"), Some(&Value::Null));
    // Unrelated branches are not carried over
    assert!(picked.missing("baz.quz"));
    assert!(picked.missing("corge"));
}

#[test]
fn test_segments_or_uses_shared_default() {
    let doc = sample();

    let picked = doc.segments_or(["foo", "a.b"], "dflt");

    assert_eq!(picked.get("foo"), Some(&"bar".into()));
    assert_eq!(picked.get("a.b"), Some(&"dflt".into()));
}

#[test]
fn test_segments_rebuilds_nested_structure() {
    let doc = Document::from_json(r#"{"foo":"bar","baz":{"quuz":{"quux":"fred"}}}"#).unwrap();

    let picked = doc.segments_or(["foo", "baz.quuz.quux", "absent"], "X");

    assert_eq!(
        picked.to_json().unwrap(),
        r#"{"foo":"bar","baz":{"quuz":{"quux":"fred"}},"absent":"X"}"#
    );
}

#[test]
fn test_segments_with_lazy_default() {
    let doc = sample();
    let mut calls = 0;

    let picked = doc.segments_with(["foo", "a", "b"], || {
        calls += 1;
        calls
    });

    assert_eq!(calls, 2);
    assert_eq!(picked.get("a"), Some(&1.into()));
    assert_eq!(picked.get("b"), Some(&2.into()));
}

#[test]
fn test_collect_coerces_to_a_map() {
    let doc = sample();

    // Nested document: its entries
    let entries = doc.collect("baz.quuz");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries["quux"], "fred");

    // List: indexed entries
    let list = doc.collect("baz.quz");
    assert_eq!(list["0"], "qux");

    // Scalar: a single "0" entry
    let scalar = doc.collect("foo");
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar["0"], "bar");

    // Declared null and unresolved paths: empty
    assert!(doc.collect("null").is_empty());
    assert!(doc.collect("absent").is_empty());
}

// ===== INDEX SUGAR =====

#[test]
fn test_index_returns_null_for_unresolved_paths() {
    let doc = sample();

    assert_eq!(doc["foo"], "bar");
    assert_eq!(doc["baz.quuz.quux"], "fred");
    assert_eq!(doc["absent"], Value::Null);
    assert_eq!(doc["null"], Value::Null);
}

#[test]
fn test_index_mut_creates_the_slot() {
    let mut doc = Document::new();

    doc["a.b"] = Value::from(5);

    assert_eq!(doc.get("a.b"), Some(&5.into()));

    // Existing slots are handed back for in-place edits
    doc["a.b"] = Value::from(6);
    assert_eq!(doc["a.b"], 6);
}
